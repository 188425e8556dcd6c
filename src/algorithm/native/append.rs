use wkt::types::{Coord, LineString, Point, Polygon};

use crate::geometry::GeometryVariant;

/// Appends a coordinate to a geometry.
///
/// A point takes the coordinate as its value, line strings and multi-points grow by one, and a
/// polygon grows its exterior ring. Multi-geometries grow their last part, which is created
/// first when there is none.
pub trait AppendPoint {
    fn append_point(&mut self, coord: Coord<f64>);
}

impl AppendPoint for GeometryVariant {
    fn append_point(&mut self, coord: Coord<f64>) {
        match self {
            GeometryVariant::Point(point) => point.0 = Some(coord),
            GeometryVariant::MultiPoint(multi_point) => multi_point.0.push(Point(Some(coord))),
            GeometryVariant::LineString(line_string) => line_string.0.push(coord),
            GeometryVariant::MultiLineString(multi_line_string) => {
                if multi_line_string.0.is_empty() {
                    multi_line_string.0.push(LineString(vec![]));
                }
                if let Some(line) = multi_line_string.0.last_mut() {
                    line.0.push(coord);
                }
            }
            GeometryVariant::Polygon(polygon) => append_exterior(polygon, coord),
            GeometryVariant::MultiPolygon(multi_polygon) => {
                if multi_polygon.0.is_empty() {
                    multi_polygon.0.push(Polygon(vec![]));
                }
                if let Some(polygon) = multi_polygon.0.last_mut() {
                    append_exterior(polygon, coord);
                }
            }
        }
    }
}

fn append_exterior(polygon: &mut Polygon<f64>, coord: Coord<f64>) {
    match polygon.0.first_mut() {
        Some(exterior) => exterior.0.push(coord),
        None => polygon.0.push(LineString(vec![coord])),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::GeometryKind;
    use crate::io::wkt::to_text;

    fn xy(x: f64, y: f64) -> Coord<f64> {
        Coord {
            x,
            y,
            z: None,
            m: None,
        }
    }

    #[test]
    fn grows_polygon_exterior() {
        let mut geom = GeometryVariant::empty(GeometryKind::Polygon).unwrap();
        for (x, y) in [(0., 0.), (0., 1.), (1., 1.), (0., 0.)] {
            geom.append_point(xy(x, y));
        }
        assert_eq!(to_text(&geom), "POLYGON((0 0,0 1,1 1,0 0))");
    }

    #[test]
    fn grows_last_part() {
        let mut geom = GeometryVariant::empty(GeometryKind::MultiLineString).unwrap();
        geom.append_point(xy(1., 2.));
        geom.append_point(xy(3., 4.));
        assert_eq!(to_text(&geom), "MULTILINESTRING((1 2,3 4))");
    }

    #[test]
    fn sets_point() {
        let mut geom = GeometryVariant::empty(GeometryKind::Point).unwrap();
        geom.append_point(xy(5., 6.));
        assert_eq!(to_text(&geom), "POINT(5 6)");
    }
}
