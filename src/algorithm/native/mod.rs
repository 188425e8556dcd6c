//! Algorithms that work directly on parsed coordinates.

pub mod append;
pub mod bounding_rect;
pub mod explode;
pub mod reverse;

pub use append::AppendPoint;
pub use bounding_rect::{BoundingRect, Envelope};
pub use explode::{explode_polygon, CoordRow};
pub use reverse::Reverse;
