use geo::Area;
use serde::{Deserialize, Serialize};
use wkt::types::{LineString, Polygon};

use crate::geometry::{line_string_to_geo, GeometryVariant};

/// Winding direction expected of exterior rings. Interior rings must wind the other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RingOrientation {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl RingOrientation {
    /// Whether a ring with the given signed area winds this way.
    ///
    /// Positive area is counter-clockwise. A ring with zero area has no direction and
    /// matches either orientation.
    pub(crate) fn matches(&self, signed_area: f64) -> bool {
        match self {
            Self::Clockwise => signed_area <= 0.,
            Self::CounterClockwise => signed_area >= 0.,
        }
    }

    pub(crate) fn opposite(&self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

/// Signed shoelace area of a ring; positive when counter-clockwise.
pub(crate) fn ring_signed_area(ring: &LineString<f64>) -> f64 {
    geo::Polygon::new(line_string_to_geo(ring), vec![]).signed_area()
}

/// Closes open rings and re-winds rings to the expected orientation.
///
/// Only polygons and multi-polygons have rings; every other geometry is left alone.
pub trait CorrectOrientation {
    fn correct_orientation(&mut self, orientation: RingOrientation);
}

impl CorrectOrientation for GeometryVariant {
    fn correct_orientation(&mut self, orientation: RingOrientation) {
        match self {
            GeometryVariant::Polygon(polygon) => correct_polygon(polygon, orientation),
            GeometryVariant::MultiPolygon(multi_polygon) => multi_polygon
                .0
                .iter_mut()
                .for_each(|polygon| correct_polygon(polygon, orientation)),
            _ => {}
        }
    }
}

fn correct_polygon(polygon: &mut Polygon<f64>, orientation: RingOrientation) {
    for (idx, ring) in polygon.0.iter_mut().enumerate() {
        close_ring(ring);
        let expected = if idx == 0 {
            orientation
        } else {
            orientation.opposite()
        };
        if !expected.matches(ring_signed_area(ring)) {
            ring.0.reverse();
        }
    }
}

fn close_ring(ring: &mut LineString<f64>) {
    let open = match (ring.0.first(), ring.0.last()) {
        (Some(first), Some(last)) => first.x != last.x || first.y != last.y,
        _ => false,
    };
    if open {
        if let Some(first) = ring.0.first().cloned() {
            ring.0.push(first);
        }
    }
}
