//! Formatting of coordinate matrices and GeoJSON-like objects as WKT at a fixed precision.
//!
//! Only the first two ordinates of every coordinate are written. The number of columns decides
//! the dimension tag: three columns are tagged with [`DumpOptions::third`], four with `ZM`.

use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::datatypes::DimensionTag;
use crate::error::{Result, WktKitError};
use crate::synthesize::matrix::CoordMatrix;

/// Formatting policy for the dump functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpOptions {
    /// Digits after the decimal point.
    pub precision: usize,

    /// Tag for three-column coordinates, `"z"` or `"m"` in any case.
    #[serde(default = "default_third")]
    pub third: String,
}

fn default_third() -> String {
    "z".to_string()
}

impl DumpOptions {
    pub fn new(precision: usize) -> Self {
        Self {
            precision,
            third: default_third(),
        }
    }

    pub fn with_third(self, third: impl Into<String>) -> Self {
        Self {
            third: third.into(),
            ..self
        }
    }
}

fn format_pair(coords: &[f64], precision: usize) -> Result<String> {
    match coords {
        [x, y, ..] => Ok(format!("{x:.precision$} {y:.precision$}")),
        _ => Err(WktKitError::InvalidShape(
            "a coordinate needs at least two ordinates".into(),
        )),
    }
}

fn format_matrix(matrix: &CoordMatrix, precision: usize) -> Result<Vec<String>> {
    matrix
        .rows()
        .map(|row| format_pair(row, precision))
        .collect()
}

fn tagged(keyword: &str, body: &str, ncols: usize, options: &DumpOptions) -> Result<String> {
    let out = match ncols {
        3 => {
            let tag = DimensionTag::from_str(&options.third)?;
            format!("{keyword} {}({body})", tag.as_str())
        }
        4 => format!("{keyword} ZM({body})"),
        _ => format!("{keyword} ({body})"),
    };
    Ok(out)
}

/// Parenthesized, comma-joined parts, each part a comma-joined run of pairs.
fn format_parts(parts: &[CoordMatrix], options: &DumpOptions) -> Result<(String, usize)> {
    let Some(first) = parts.first() else {
        return Err(WktKitError::InvalidShape("at least one part is required".into()));
    };
    let body = parts
        .iter()
        .map(|part| Ok(format!("({})", format_matrix(part, options.precision)?.join(", "))))
        .collect::<Result<Vec<String>>>()?
        .join(", ");
    Ok((body, first.ncols()))
}

/// `POINT (x y)` from a single coordinate.
///
/// ```
/// use wktkit::synthesize::{dump_point, DumpOptions};
///
/// assert_eq!(dump_point(&[1., 2.], &DumpOptions::new(1)).unwrap(), "POINT (1.0 2.0)");
/// assert_eq!(dump_point(&[1., 2., 3.], &DumpOptions::new(0)).unwrap(), "POINT Z(1 2)");
/// ```
pub fn dump_point(coords: &[f64], options: &DumpOptions) -> Result<String> {
    let body = format_pair(coords, options.precision)?;
    tagged("POINT", &body, coords.len(), options)
}

pub fn dump_multi_point(coords: &CoordMatrix, options: &DumpOptions) -> Result<String> {
    let body = format_matrix(coords, options.precision)?
        .iter()
        .map(|pair| format!("({pair})"))
        .join(", ");
    tagged("MULTIPOINT", &body, coords.ncols(), options)
}

pub fn dump_line_string(coords: &CoordMatrix, options: &DumpOptions) -> Result<String> {
    let body = format_matrix(coords, options.precision)?.join(", ");
    tagged("LINESTRING", &body, coords.ncols(), options)
}

/// The dimension tag follows the first line's column count.
pub fn dump_multi_line_string(lines: &[CoordMatrix], options: &DumpOptions) -> Result<String> {
    let (body, ncols) = format_parts(lines, options)?;
    tagged("MULTILINESTRING", &body, ncols, options)
}

/// The dimension tag follows the first ring's column count.
pub fn dump_polygon(rings: &[CoordMatrix], options: &DumpOptions) -> Result<String> {
    let (body, ncols) = format_parts(rings, options)?;
    tagged("POLYGON", &body, ncols, options)
}

/// A GeoJSON-like geometry object: `{"type": "Point", "coordinates": [1.0, 2.0]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum DumpGeometry {
    Point(Vec<f64>),
    MultiPoint(Vec<Vec<f64>>),
    LineString(Vec<Vec<f64>>),
    MultiLineString(Vec<Vec<Vec<f64>>>),
    Polygon(Vec<Vec<Vec<f64>>>),
}

impl DumpGeometry {
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Write the geometry as WKT.
    pub fn to_wkt(&self, options: &DumpOptions) -> Result<String> {
        match self {
            Self::Point(coords) => dump_point(coords, options),
            Self::MultiPoint(rows) => dump_multi_point(&CoordMatrix::from_rows(rows)?, options),
            Self::LineString(rows) => dump_line_string(&CoordMatrix::from_rows(rows)?, options),
            Self::MultiLineString(parts) => {
                dump_multi_line_string(&to_matrices(parts)?, options)
            }
            Self::Polygon(rings) => dump_polygon(&to_matrices(rings)?, options),
        }
    }
}

impl FromStr for DumpGeometry {
    type Err = WktKitError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

fn to_matrices(parts: &[Vec<Vec<f64>>]) -> Result<Vec<CoordMatrix>> {
    parts.iter().map(|rows| CoordMatrix::from_rows(rows)).collect()
}
