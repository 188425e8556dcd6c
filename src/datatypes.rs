//! Geometry kinds recognised from WKT text.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WktKitError;

/// The kind of geometry a WKT string claims to hold, read from its leading keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
    /// Anything whose keyword is not one of the above.
    Unsupported,
}

impl GeometryKind {
    /// Classify a WKT string by its leading keyword.
    ///
    /// Leading and trailing blanks and tabs are ignored, as is case. Only the keyword is
    /// inspected: `"POINT (banana)"` is still a [`GeometryKind::Point`].
    ///
    /// ```
    /// use wktkit::datatypes::GeometryKind;
    ///
    /// assert_eq!(GeometryKind::from_wkt("  polygon((0 0, 1 0, 1 1, 0 0))"), GeometryKind::Polygon);
    /// assert_eq!(GeometryKind::from_wkt("ARGHLEFLARFDFG"), GeometryKind::Unsupported);
    /// ```
    pub fn from_wkt(wkt: &str) -> Self {
        let cleaned = clean_wkt(wkt).to_ascii_lowercase();
        match cleaned.find([' ', '(']) {
            Some(idx) if idx + 1 < cleaned.len() => Self::from_keyword(&cleaned[..idx]),
            _ => Self::Unsupported,
        }
    }

    /// Match an already lower-cased keyword.
    fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "point" => Self::Point,
            "multipoint" => Self::MultiPoint,
            "linestring" => Self::LineString,
            "multilinestring" => Self::MultiLineString,
            "polygon" => Self::Polygon,
            "multipolygon" => Self::MultiPolygon,
            "geometrycollection" => Self::GeometryCollection,
            _ => Self::Unsupported,
        }
    }

    /// Whether a value of this kind can be materialized as a single geometry.
    pub fn is_single(&self) -> bool {
        !matches!(self, Self::GeometryCollection | Self::Unsupported)
    }

    /// The upper-case WKT keyword, or `None` for [`GeometryKind::Unsupported`].
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Self::Point => Some("POINT"),
            Self::MultiPoint => Some("MULTIPOINT"),
            Self::LineString => Some("LINESTRING"),
            Self::MultiLineString => Some("MULTILINESTRING"),
            Self::Polygon => Some("POLYGON"),
            Self::MultiPolygon => Some("MULTIPOLYGON"),
            Self::GeometryCollection => Some("GEOMETRYCOLLECTION"),
            Self::Unsupported => None,
        }
    }
}

impl Display for GeometryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword().unwrap_or("UNSUPPORTED"))
    }
}

/// Strip leading and trailing blanks and tabs.
pub(crate) fn clean_wkt(wkt: &str) -> &str {
    wkt.trim_matches([' ', '\t'])
}

/// Tag written between the keyword and the body when a synthesized coordinate has exactly
/// three ordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DimensionTag {
    Z,
    M,
}

impl DimensionTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Z => "Z",
            Self::M => "M",
        }
    }
}

impl FromStr for DimensionTag {
    type Err = WktKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "z" => Ok(Self::Z),
            "m" => Ok(Self::M),
            _ => Err(WktKitError::InvalidDimensionTag(s.to_string())),
        }
    }
}
