//! The materialized geometry held by a successfully parsed row.

use wkt::types::{Coord, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};

use crate::datatypes::GeometryKind;

/// One parsed geometry of a single supported kind.
///
/// Values keep the coordinates exactly as written, including rings that are not closed and any
/// Z or M ordinates, so that validation can see structural defects and round trips through text
/// lose nothing. Conversion to [`geo`] types, which closes rings and drops extra ordinates,
/// happens only where a `geo` algorithm is called.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryVariant {
    Point(Point<f64>),
    MultiPoint(MultiPoint<f64>),
    LineString(LineString<f64>),
    MultiLineString(MultiLineString<f64>),
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
}

impl GeometryVariant {
    /// The kind this variant was parsed as.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Self::Point(_) => GeometryKind::Point,
            Self::MultiPoint(_) => GeometryKind::MultiPoint,
            Self::LineString(_) => GeometryKind::LineString,
            Self::MultiLineString(_) => GeometryKind::MultiLineString,
            Self::Polygon(_) => GeometryKind::Polygon,
            Self::MultiPolygon(_) => GeometryKind::MultiPolygon,
        }
    }

    /// An empty value of the given kind, or `None` if the kind cannot be materialized.
    pub fn empty(kind: GeometryKind) -> Option<Self> {
        let geom = match kind {
            GeometryKind::Point => Self::Point(Point(None)),
            GeometryKind::MultiPoint => Self::MultiPoint(MultiPoint(vec![])),
            GeometryKind::LineString => Self::LineString(LineString(vec![])),
            GeometryKind::MultiLineString => Self::MultiLineString(MultiLineString(vec![])),
            GeometryKind::Polygon => Self::Polygon(Polygon(vec![])),
            GeometryKind::MultiPolygon => Self::MultiPolygon(MultiPolygon(vec![])),
            GeometryKind::GeometryCollection | GeometryKind::Unsupported => return None,
        };
        Some(geom)
    }

    /// Iterate over every coordinate in storage order.
    pub fn coords(&self) -> Box<dyn Iterator<Item = &Coord<f64>> + '_> {
        match self {
            Self::Point(point) => Box::new(point.0.iter()),
            Self::MultiPoint(multi_point) => {
                Box::new(multi_point.0.iter().filter_map(|point| point.0.as_ref()))
            }
            Self::LineString(line_string) => Box::new(line_string.0.iter()),
            Self::MultiLineString(multi_line_string) => {
                Box::new(multi_line_string.0.iter().flat_map(|line| line.0.iter()))
            }
            Self::Polygon(polygon) => Box::new(polygon.0.iter().flat_map(|ring| ring.0.iter())),
            Self::MultiPolygon(multi_polygon) => Box::new(
                multi_polygon
                    .0
                    .iter()
                    .flat_map(|polygon| polygon.0.iter())
                    .flat_map(|ring| ring.0.iter()),
            ),
        }
    }

    /// Whether the geometry has no coordinates at all.
    pub fn is_empty(&self) -> bool {
        self.coords().next().is_none()
    }

    /// Convert to a [`geo::Geometry`], keeping only x and y.
    ///
    /// Polygon rings are closed by the conversion.
    pub fn to_geo(&self) -> geo::Geometry<f64> {
        match self {
            Self::Point(point) => match &point.0 {
                Some(coord) => geo::Geometry::Point(coord_to_geo(coord).into()),
                None => geo::Geometry::MultiPoint(geo::MultiPoint(vec![])),
            },
            Self::MultiPoint(multi_point) => geo::Geometry::MultiPoint(geo::MultiPoint(
                multi_point
                    .0
                    .iter()
                    .filter_map(|point| point.0.as_ref())
                    .map(|coord| coord_to_geo(coord).into())
                    .collect(),
            )),
            Self::LineString(line_string) => {
                geo::Geometry::LineString(line_string_to_geo(line_string))
            }
            Self::MultiLineString(multi_line_string) => {
                geo::Geometry::MultiLineString(geo::MultiLineString(
                    multi_line_string.0.iter().map(line_string_to_geo).collect(),
                ))
            }
            Self::Polygon(polygon) => geo::Geometry::Polygon(polygon_to_geo(polygon)),
            Self::MultiPolygon(multi_polygon) => geo::Geometry::MultiPolygon(geo::MultiPolygon(
                multi_polygon.0.iter().map(polygon_to_geo).collect(),
            )),
        }
    }
}

pub(crate) fn coord_to_geo(coord: &Coord<f64>) -> geo::Coord<f64> {
    geo::coord! { x: coord.x, y: coord.y }
}

pub(crate) fn line_string_to_geo(line_string: &LineString<f64>) -> geo::LineString<f64> {
    geo::LineString(line_string.0.iter().map(coord_to_geo).collect())
}

pub(crate) fn polygon_to_geo(polygon: &Polygon<f64>) -> geo::Polygon<f64> {
    let mut rings = polygon.0.iter().map(line_string_to_geo);
    let exterior = rings.next().unwrap_or_else(|| geo::LineString(vec![]));
    geo::Polygon::new(exterior, rings.collect())
}
