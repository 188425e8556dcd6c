//! The geometry capability consumed by every row operation.
//!
//! [`GeometryKernel`] is the seam between the batch machinery and the geometry algorithms.
//! [`GeoKernel`] implements it with the [`wkt`] grammar and [`geo`] algorithms.

use serde::{Deserialize, Serialize};
use wkt::types::Coord;

use crate::algorithm::geo::{Centroid, CorrectOrientation, RingOrientation};
use crate::algorithm::native::{AppendPoint, BoundingRect, Envelope, Reverse};
use crate::algorithm::validity::{FailureCode, IsValid};
use crate::datatypes::GeometryKind;
use crate::error::Result;
use crate::geometry::GeometryVariant;
use crate::io::wkt as wkt_io;

/// The validity policy and orientation convention of a [`GeoKernel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelOptions {
    /// Expected winding of exterior rings.
    pub orientation: RingOrientation,

    /// Whether consecutive duplicate points are accepted.
    pub allow_duplicates: bool,

    /// Whether line strings may double back on themselves. Rings never may.
    pub allow_spikes: bool,
}

impl KernelOptions {
    pub fn with_orientation(self, orientation: RingOrientation) -> Self {
        Self {
            orientation,
            ..self
        }
    }

    pub fn with_allow_duplicates(self, allow_duplicates: bool) -> Self {
        Self {
            allow_duplicates,
            ..self
        }
    }

    pub fn with_allow_spikes(self, allow_spikes: bool) -> Self {
        Self {
            allow_spikes,
            ..self
        }
    }
}

impl Default for KernelOptions {
    fn default() -> Self {
        Self {
            orientation: RingOrientation::Clockwise,
            allow_duplicates: true,
            allow_spikes: true,
        }
    }
}

/// Geometry primitives over a single materialized value.
pub trait GeometryKernel {
    /// Parse text already classified as `kind`.
    fn parse(&self, text: &str, kind: GeometryKind) -> Result<GeometryVariant>;

    /// `Ok(())` when the geometry is valid, otherwise the first failure found.
    fn is_valid(&self, geom: &GeometryVariant) -> std::result::Result<(), FailureCode>;

    fn centroid(&self, geom: &GeometryVariant) -> Result<geo::Coord<f64>>;

    fn envelope(&self, geom: &GeometryVariant) -> Result<BoundingRect>;

    /// Reverse the point order of every line and ring in place.
    fn reverse(&self, geom: &mut GeometryVariant);

    /// Close open rings and re-wind rings to the kernel's orientation in place.
    fn correct_orientation(&self, geom: &mut GeometryVariant);

    fn append_point(&self, geom: &mut GeometryVariant, coord: Coord<f64>);

    fn to_text(&self, geom: &GeometryVariant) -> String;

    /// WKT of the axis-aligned rectangle spanning the given extremes.
    fn box_to_polygon_text(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> String;
}

/// The default kernel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeoKernel {
    options: KernelOptions,
}

impl GeoKernel {
    pub fn new(options: KernelOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &KernelOptions {
        &self.options
    }
}

impl GeometryKernel for GeoKernel {
    fn parse(&self, text: &str, kind: GeometryKind) -> Result<GeometryVariant> {
        wkt_io::parse(text, kind)
    }

    fn is_valid(&self, geom: &GeometryVariant) -> std::result::Result<(), FailureCode> {
        geom.check_validity(&self.options)
    }

    fn centroid(&self, geom: &GeometryVariant) -> Result<geo::Coord<f64>> {
        geom.centroid()
    }

    fn envelope(&self, geom: &GeometryVariant) -> Result<BoundingRect> {
        geom.envelope()
    }

    fn reverse(&self, geom: &mut GeometryVariant) {
        Reverse::reverse(geom)
    }

    fn correct_orientation(&self, geom: &mut GeometryVariant) {
        geom.correct_orientation(self.options.orientation)
    }

    fn append_point(&self, geom: &mut GeometryVariant, coord: Coord<f64>) {
        geom.append_point(coord)
    }

    fn to_text(&self, geom: &GeometryVariant) -> String {
        wkt_io::to_text(geom)
    }

    fn box_to_polygon_text(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> String {
        wkt_io::box_to_polygon_text(min_x, min_y, max_x, max_y)
    }
}
