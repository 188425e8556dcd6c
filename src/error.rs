//! Defines [`WktKitError`], representing all errors returned by this crate.

use arrow_schema::ArrowError;
use std::borrow::Cow;
use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
///
/// The first group of variants describes why a single row failed. Batch entry points never
/// return those; they turn them into the row's missing-value sentinel. The remaining variants
/// abort a whole call.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum WktKitError {
    /// The input row was missing.
    #[error("Missing input")]
    MissingInput,

    /// The text did not start with a supported geometry keyword.
    #[error("Object could not be recognised as a supported WKT type")]
    UnsupportedType,

    /// The WKT parser rejected the text.
    #[error("{0}")]
    Parse(Cow<'static, str>),

    /// The geometry has no coordinates to compute a result from.
    #[error("Empty geometry: {0}")]
    EmptyGeometry(&'static str),

    /// A coordinate array had the wrong shape for the requested geometry.
    #[error("Invalid coordinate shape: {0}")]
    InvalidShape(Cow<'static, str>),

    /// The third ordinate tag was neither `z` nor `m`.
    #[error("'third' must be one of 'm' or 'z', got '{0}'")]
    InvalidDimensionTag(String),

    /// Parallel input arrays did not have the same length.
    #[error("All input vectors must be the same length")]
    LengthMismatch,

    /// The batch was interrupted before it completed.
    #[error("Interrupted at row {row}")]
    Interrupted {
        /// Index of the row at which the interrupt was observed.
        row: usize,
    },

    /// General error.
    #[error("General error: {0}")]
    General(String),

    /// [ArrowError]
    #[error("{0}")]
    Arrow(String),

    /// [serde_json::Error]
    #[error("{0}")]
    SerdeJson(String),
}

impl From<ArrowError> for WktKitError {
    fn from(err: ArrowError) -> Self {
        Self::Arrow(err.to_string())
    }
}

impl From<serde_json::Error> for WktKitError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerdeJson(err.to_string())
    }
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, WktKitError>;

impl From<WktKitError> for ArrowError {
    fn from(err: WktKitError) -> Self {
        match err {
            WktKitError::Arrow(msg) => ArrowError::ComputeError(msg),
            _ => ArrowError::ExternalError(Box::new(err)),
        }
    }
}
