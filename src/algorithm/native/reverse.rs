use crate::geometry::GeometryVariant;

/// Reverses the order of points within a geometry.
///
/// Line strings and every ring of a polygon are reversed in place. Points and multi-points have
/// no direction and are left as they are, and the order of parts within multi-geometries is
/// kept.
pub trait Reverse {
    fn reverse(&mut self);
}

impl Reverse for GeometryVariant {
    fn reverse(&mut self) {
        match self {
            GeometryVariant::Point(_) | GeometryVariant::MultiPoint(_) => {}
            GeometryVariant::LineString(line_string) => line_string.0.reverse(),
            GeometryVariant::MultiLineString(multi_line_string) => multi_line_string
                .0
                .iter_mut()
                .for_each(|line| line.0.reverse()),
            GeometryVariant::Polygon(polygon) => {
                polygon.0.iter_mut().for_each(|ring| ring.0.reverse())
            }
            GeometryVariant::MultiPolygon(multi_polygon) => multi_polygon
                .0
                .iter_mut()
                .flat_map(|polygon| polygon.0.iter_mut())
                .for_each(|ring| ring.0.reverse()),
        }
    }
}
