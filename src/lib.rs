//! Batch validation, repair and synthesis of [Well-Known Text](https://en.wikipedia.org/wiki/Well-known_text_representation_of_geometry)
//! geometries over Arrow arrays.
//!
//! Each input row is classified by its leading keyword, parsed into a [`GeometryVariant`] and
//! handed to a [`GeometryKernel`]. Rows that are missing, unsupported or unparsable never fail
//! a batch; they produce nulls, or their original text for the rewriting operations.
//! [`table::WktEngine`] exposes the batch entry points.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use geometry::GeometryVariant;
pub use kernel::{GeoKernel, GeometryKernel, KernelOptions};
pub use table::WktEngine;

pub mod algorithm;
pub mod batch;
pub mod datatypes;
pub mod dispatch;
pub mod error;
pub mod geometry;
pub mod io;
pub mod kernel;
pub mod synthesize;
pub mod table;
#[cfg(test)]
pub(crate) mod test;
pub mod validate;
