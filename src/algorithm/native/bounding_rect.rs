use geo::{coord, Rect};
use serde::{Deserialize, Serialize};
use wkt::types::Coord;

use crate::error::{Result, WktKitError};
use crate::geometry::GeometryVariant;

/// An axis-aligned envelope accumulated one coordinate at a time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingRect {
    minx: f64,
    miny: f64,
    maxx: f64,
    maxy: f64,
}

impl BoundingRect {
    /// New, empty envelope.
    pub fn new() -> Self {
        BoundingRect {
            minx: f64::INFINITY,
            miny: f64::INFINITY,
            maxx: -f64::INFINITY,
            maxy: -f64::INFINITY,
        }
    }

    pub fn minx(&self) -> f64 {
        self.minx
    }

    pub fn miny(&self) -> f64 {
        self.miny
    }

    pub fn maxx(&self) -> f64 {
        self.maxx
    }

    pub fn maxy(&self) -> f64 {
        self.maxy
    }

    /// Whether no coordinate has been added yet.
    pub fn is_empty(&self) -> bool {
        self.minx > self.maxx || self.miny > self.maxy
    }

    pub fn add_coord(&mut self, coord: &Coord<f64>) {
        if coord.x < self.minx {
            self.minx = coord.x;
        }
        if coord.y < self.miny {
            self.miny = coord.y;
        }
        if coord.x > self.maxx {
            self.maxx = coord.x;
        }
        if coord.y > self.maxy {
            self.maxy = coord.y;
        }
    }

    pub fn add_geometry(&mut self, geom: &GeometryVariant) {
        geom.coords().for_each(|coord| self.add_coord(coord));
    }

    /// `[min_x, min_y, max_x, max_y]`
    pub fn to_array(&self) -> [f64; 4] {
        [self.minx, self.miny, self.maxx, self.maxy]
    }
}

impl Default for BoundingRect {
    fn default() -> Self {
        Self::new()
    }
}

impl From<BoundingRect> for Rect {
    fn from(value: BoundingRect) -> Self {
        let min_coord = coord! { x: value.minx, y: value.miny };
        let max_coord = coord! { x: value.maxx, y: value.maxy };
        Rect::new(min_coord, max_coord)
    }
}

/// Computes the envelope of a geometry.
pub trait Envelope {
    /// Fails with [`WktKitError::EmptyGeometry`] when there are no coordinates.
    fn envelope(&self) -> Result<BoundingRect>;
}

impl Envelope for GeometryVariant {
    fn envelope(&self) -> Result<BoundingRect> {
        let mut rect = BoundingRect::new();
        rect.add_geometry(self);
        if rect.is_empty() {
            return Err(WktKitError::EmptyGeometry("envelope"));
        }
        Ok(rect)
    }
}
