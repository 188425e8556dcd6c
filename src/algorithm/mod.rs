//! Algorithms implemented on parsed geometries.

pub mod geo;
pub mod native;
pub mod validity;
