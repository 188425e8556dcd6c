//! Algorithms implemented on parsed geometries using georust/geo algorithms.

/// Calculate the centroid of a geometry.
pub mod centroid;
pub use centroid::Centroid;

/// Close and re-wind polygon rings.
pub mod orient;
pub use orient::{CorrectOrientation, RingOrientation};
