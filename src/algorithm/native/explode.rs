use serde::{Deserialize, Serialize};
use wkt::types::{LineString, Polygon};

/// One output row of a coordinate extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordRow {
    /// 1-based position of the input row this coordinate came from.
    pub object: i32,
    /// `"outer"`, `"inner 1"`, `"inner 2"`, ... or `None` when nothing could be extracted.
    pub ring: Option<String>,
    pub lng: Option<f64>,
    pub lat: Option<f64>,
}

impl CoordRow {
    /// The single placeholder row emitted for an input with nothing to extract.
    pub fn missing(object: i32) -> Self {
        Self {
            object,
            ring: None,
            lng: None,
            lat: None,
        }
    }
}

/// Explodes a polygon into one row per ring vertex, outer ring first.
///
/// A polygon whose outer ring is empty is the empty-geometry sentinel and yields a single
/// [`CoordRow::missing`] row.
pub fn explode_polygon(polygon: &Polygon<f64>, object: i32) -> Vec<CoordRow> {
    let Some(exterior) = polygon.0.first().filter(|ring| !ring.0.is_empty()) else {
        return vec![CoordRow::missing(object)];
    };

    let mut rows = Vec::with_capacity(polygon.0.iter().map(|ring| ring.0.len()).sum());
    push_ring(&mut rows, exterior, "outer", object);
    for (idx, interior) in polygon.0.iter().skip(1).enumerate() {
        push_ring(&mut rows, interior, &format!("inner {}", idx + 1), object);
    }
    rows
}

fn push_ring(rows: &mut Vec<CoordRow>, ring: &LineString<f64>, label: &str, object: i32) {
    rows.extend(ring.0.iter().map(|coord| CoordRow {
        object,
        ring: Some(label.to_string()),
        lng: Some(coord.x),
        lat: Some(coord.y),
    }));
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::GeometryKind;
    use crate::geometry::GeometryVariant;
    use crate::io::wkt::parse;
    use crate::test::wkt::*;

    fn polygon(wkt: &str) -> Polygon<f64> {
        match parse(wkt, GeometryKind::Polygon).unwrap() {
            GeometryVariant::Polygon(polygon) => polygon,
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn outer_ring_rows() {
        let rows = explode_polygon(&polygon(POLYGON), 1);
        let coords: Vec<(f64, f64)> = rows
            .iter()
            .map(|row| (row.lng.unwrap(), row.lat.unwrap()))
            .collect();
        assert_eq!(
            coords,
            vec![(30., 10.), (40., 40.), (20., 40.), (10., 20.), (30., 10.)]
        );
        assert!(rows
            .iter()
            .all(|row| row.object == 1 && row.ring.as_deref() == Some("outer")));
    }

    #[test]
    fn inner_ring_labels() {
        let rows = explode_polygon(&polygon(POLYGON_CW_WITH_HOLE), 3);
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[4].ring.as_deref(), Some("outer"));
        assert_eq!(rows[5].ring.as_deref(), Some("inner 1"));
        assert_eq!(rows[5].lng, Some(20.));
        assert!(rows.iter().all(|row| row.object == 3));
    }

    #[test]
    fn empty_outer_ring() {
        let rows = explode_polygon(&Polygon(vec![]), 2);
        assert_eq!(rows, vec![CoordRow::missing(2)]);
    }
}
