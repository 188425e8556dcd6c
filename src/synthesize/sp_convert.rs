use wkt::types::{Coord, MultiPolygon, Polygon};

use crate::geometry::GeometryVariant;
use crate::kernel::GeometryKernel;
use crate::synthesize::matrix::CoordMatrix;

/// Builds a polygon whose exterior ring holds the matrix rows in order.
fn matrix_polygon<K: GeometryKernel>(kernel: &K, matrix: &CoordMatrix) -> Option<Polygon<f64>> {
    if matrix.ncols() != 2 {
        return None;
    }

    let mut geom = GeometryVariant::Polygon(Polygon(vec![]));
    for row in matrix.rows() {
        let coord = Coord {
            x: row[0],
            y: row[1],
            z: None,
            m: None,
        };
        kernel.append_point(&mut geom, coord);
    }

    match geom {
        GeometryVariant::Polygon(polygon) => Some(polygon),
        _ => None,
    }
}

/// The polygon WKT of one two-column matrix, or `None` for any other column count.
pub fn matrix_text<K: GeometryKernel>(kernel: &K, matrix: &CoordMatrix) -> Option<String> {
    let polygon = matrix_polygon(kernel, matrix)?;
    Some(kernel.to_text(&GeometryVariant::Polygon(polygon)))
}

/// One WKT value for a group of matrices.
///
/// A single matrix becomes a polygon and several become a multi-polygon with one polygon per
/// matrix. An empty group, or any matrix without exactly two columns, gives `None`.
pub fn group_text<K: GeometryKernel>(kernel: &K, matrices: &[CoordMatrix]) -> Option<String> {
    match matrices {
        [] => None,
        [matrix] => matrix_text(kernel, matrix),
        _ => {
            let polygons = matrices
                .iter()
                .map(|matrix| matrix_polygon(kernel, matrix))
                .collect::<Option<Vec<_>>>()?;
            Some(kernel.to_text(&GeometryVariant::MultiPolygon(MultiPolygon(polygons))))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::native::BoundingRect;
    use crate::datatypes::GeometryKind;
    use crate::kernel::GeoKernel;

    fn square() -> CoordMatrix {
        CoordMatrix::from_rows(&[[0.5, 0.25], [0.5, 3.75], [2.125, 3.75], [0.5, 0.25]]).unwrap()
    }

    #[test]
    fn single_matrix() {
        assert_eq!(
            group_text(&GeoKernel::default(), &[square()]),
            Some("POLYGON((0.5 0.25,0.5 3.75,2.125 3.75,0.5 0.25))".to_string())
        );
    }

    #[test]
    fn several_matrices() {
        let other = CoordMatrix::from_rows(&[[10., 10.], [10., 11.], [11., 11.], [10., 10.]])
            .unwrap();
        assert_eq!(
            group_text(&GeoKernel::default(), &[square(), other]),
            Some(
                "MULTIPOLYGON(((0.5 0.25,0.5 3.75,2.125 3.75,0.5 0.25)),\
                 ((10 10,10 11,11 11,10 10)))"
                    .to_string()
            )
        );
    }

    #[test]
    fn wrong_column_count() {
        let kernel = GeoKernel::default();
        let wide = CoordMatrix::from_rows(&[[0., 0., 0.], [1., 1., 1.]]).unwrap();
        assert_eq!(matrix_text(&kernel, &wide), None);
        assert_eq!(group_text(&kernel, &[square(), wide]), None);
        assert_eq!(group_text(&kernel, &[]), None);
    }

    #[test]
    fn envelope_reproduces_matrix_extremes() {
        let kernel = GeoKernel::default();
        let text = matrix_text(&kernel, &square()).unwrap();
        let geom = kernel.parse(&text, GeometryKind::from_wkt(&text)).unwrap();
        let envelope: BoundingRect = kernel.envelope(&geom).unwrap();
        assert_eq!(envelope.to_array(), [0.5, 0.25, 2.125, 3.75]);
    }
}
