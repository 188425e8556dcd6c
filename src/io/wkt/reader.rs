use std::str::FromStr;

use wkt::Wkt;

use crate::datatypes::{clean_wkt, GeometryKind};
use crate::error::{Result, WktKitError};
use crate::geometry::GeometryVariant;

/// Parse WKT text that has already been classified as `kind`.
///
/// The text is parsed with the [`wkt`] grammar and must hold a geometry of exactly `kind`.
/// Collections and unsupported kinds cannot be materialized and fail with
/// [`WktKitError::UnsupportedType`]. Every other failure is a [`WktKitError::Parse`] carrying
/// the parser's message.
pub fn parse(text: &str, kind: GeometryKind) -> Result<GeometryVariant> {
    if !kind.is_single() {
        return Err(WktKitError::UnsupportedType);
    }

    // Keywords are matched upper-case by the grammar
    let normalized = clean_wkt(text).to_ascii_uppercase();
    let parsed = Wkt::<f64>::from_str(&normalized)
        .map_err(|err| WktKitError::Parse(err.to_string().into()))?;

    let geom = match parsed {
        Wkt::Point(point) if kind == GeometryKind::Point => {
            if point.0.is_none() {
                return Err(WktKitError::Parse("Empty points are not supported".into()));
            }
            GeometryVariant::Point(point)
        }
        Wkt::MultiPoint(geom) if kind == GeometryKind::MultiPoint => {
            GeometryVariant::MultiPoint(geom)
        }
        Wkt::LineString(geom) if kind == GeometryKind::LineString => {
            GeometryVariant::LineString(geom)
        }
        Wkt::MultiLineString(geom) if kind == GeometryKind::MultiLineString => {
            GeometryVariant::MultiLineString(geom)
        }
        Wkt::Polygon(geom) if kind == GeometryKind::Polygon => GeometryVariant::Polygon(geom),
        Wkt::MultiPolygon(geom) if kind == GeometryKind::MultiPolygon => {
            GeometryVariant::MultiPolygon(geom)
        }
        _ => {
            return Err(WktKitError::Parse(
                format!("Expected a {kind} but found a different geometry").into(),
            ))
        }
    };

    Ok(geom)
}
