use geo::algorithm::centroid::Centroid as GeoCentroid;

use crate::error::{Result, WktKitError};
use crate::geometry::GeometryVariant;

/// Calculation of the centroid.
///
/// The centroid is the arithmetic mean position of all points in the shape, weighted by length
/// for line strings and by area for polygons. Coordinates are treated as cartesian.
///
/// # Examples
///
/// ```
/// use wktkit::algorithm::geo::Centroid;
/// use wktkit::datatypes::GeometryKind;
/// use wktkit::io::wkt::parse;
///
/// let line = parse("LINESTRING (40.02 116.34, 40.02 118.23)", GeometryKind::LineString).unwrap();
/// let centroid = line.centroid().unwrap();
/// assert_eq!(centroid.x, 40.02);
/// assert_eq!(centroid.y, 117.285);
/// ```
pub trait Centroid {
    /// Fails with [`WktKitError::EmptyGeometry`] when there are no coordinates.
    fn centroid(&self) -> Result<geo::Coord<f64>>;
}

impl Centroid for GeometryVariant {
    fn centroid(&self) -> Result<geo::Coord<f64>> {
        self.to_geo()
            .centroid()
            .map(|point| point.0)
            .ok_or(WktKitError::EmptyGeometry("centroid"))
    }
}
