use std::fmt::{Display, Error, Write};

use wkt::types::{Coord, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};

use crate::geometry::GeometryVariant;

/// Serialize a geometry to WKT.
///
/// Keywords are upper-case and directly followed by the body, e.g. `POLYGON((0 0,0 1,1 1,0 0))`.
/// Numbers use the shortest representation that parses back to the same `f64`, so
/// `parse(to_text(g))` reproduces `g` exactly.
pub fn to_text(geom: &GeometryVariant) -> String {
    geom.to_string()
}

/// The WKT of the axis-aligned rectangle spanning the given bounds.
///
/// The ring starts at the lower-left corner and runs clockwise.
pub fn box_to_polygon_text(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> String {
    format!(
        "POLYGON(({0} {1},{0} {3},{2} {3},{2} {1},{0} {1}))",
        min_x, min_y, max_x, max_y
    )
}

impl Display for GeometryVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryVariant::Point(point) => point_to_wkt(point, f),
            GeometryVariant::MultiPoint(multi_point) => multi_point_to_wkt(multi_point, f),
            GeometryVariant::LineString(line_string) => linestring_to_wkt(line_string, f),
            GeometryVariant::MultiLineString(mls) => multi_linestring_to_wkt(mls, f),
            GeometryVariant::Polygon(polygon) => polygon_to_wkt(polygon, f),
            GeometryVariant::MultiPolygon(multi_polygon) => {
                multi_polygon_to_wkt(multi_polygon, f)
            }
        }
    }
}

fn point_to_wkt<W: Write>(point: &Point<f64>, writer: &mut W) -> Result<(), Error> {
    writer.write_str("POINT")?;

    match &point.0 {
        Some(coord) => {
            write_dimension(writer, Some(coord))?;
            writer.write_str("(")?;
            add_coord(writer, coord)?;
            writer.write_str(")")
        }
        None => writer.write_str(" EMPTY"),
    }
}

fn multi_point_to_wkt<W: Write>(
    multi_point: &MultiPoint<f64>,
    writer: &mut W,
) -> Result<(), Error> {
    writer.write_str("MULTIPOINT")?;

    let mut coords = multi_point.0.iter().filter_map(|point| point.0.as_ref());
    let Some(first) = coords.next() else {
        return writer.write_str(" EMPTY");
    };

    write_dimension(writer, Some(first))?;
    writer.write_str("((")?;
    add_coord(writer, first)?;
    for coord in coords {
        writer.write_str("),(")?;
        add_coord(writer, coord)?;
    }
    writer.write_str("))")
}

fn linestring_to_wkt<W: Write>(
    line_string: &LineString<f64>,
    writer: &mut W,
) -> Result<(), Error> {
    writer.write_str("LINESTRING")?;

    if line_string.0.is_empty() {
        return writer.write_str(" EMPTY");
    }

    write_dimension(writer, line_string.0.first())?;
    add_coords(writer, &line_string.0)
}

fn multi_linestring_to_wkt<W: Write>(
    multi_line_string: &MultiLineString<f64>,
    writer: &mut W,
) -> Result<(), Error> {
    writer.write_str("MULTILINESTRING")?;

    if multi_line_string.0.is_empty() {
        return writer.write_str(" EMPTY");
    }

    write_dimension(writer, first_coord(&multi_line_string.0))?;
    add_rings(writer, &multi_line_string.0)
}

fn polygon_to_wkt<W: Write>(polygon: &Polygon<f64>, writer: &mut W) -> Result<(), Error> {
    writer.write_str("POLYGON")?;

    if polygon.0.iter().all(|ring| ring.0.is_empty()) {
        return writer.write_str(" EMPTY");
    }

    write_dimension(writer, first_coord(&polygon.0))?;
    add_rings(writer, &polygon.0)
}

fn multi_polygon_to_wkt<W: Write>(
    multi_polygon: &MultiPolygon<f64>,
    writer: &mut W,
) -> Result<(), Error> {
    writer.write_str("MULTIPOLYGON")?;

    let mut polygons = multi_polygon.0.iter();
    let Some(first) = polygons.next() else {
        return writer.write_str(" EMPTY");
    };

    write_dimension(writer, first_coord(&first.0))?;
    writer.write_str("(")?;
    add_rings(writer, &first.0)?;
    for polygon in polygons {
        writer.write_str(",")?;
        add_rings(writer, &polygon.0)?;
    }
    writer.write_str(")")
}

fn first_coord(rings: &[LineString<f64>]) -> Option<&Coord<f64>> {
    rings.iter().find_map(|ring| ring.0.first())
}

fn write_dimension<W: Write>(writer: &mut W, coord: Option<&Coord<f64>>) -> Result<(), Error> {
    match coord.map(|c| (c.z.is_some(), c.m.is_some())) {
        Some((true, true)) => writer.write_str(" ZM "),
        Some((true, false)) => writer.write_str(" Z "),
        Some((false, true)) => writer.write_str(" M "),
        _ => Ok(()),
    }
}

fn add_coord<W: Write>(writer: &mut W, coord: &Coord<f64>) -> Result<(), Error> {
    write!(writer, "{} {}", coord.x, coord.y)?;
    if let Some(z) = coord.z {
        write!(writer, " {z}")?;
    }
    if let Some(m) = coord.m {
        write!(writer, " {m}")?;
    }
    Ok(())
}

fn add_coords<W: Write>(writer: &mut W, coords: &[Coord<f64>]) -> Result<(), Error> {
    writer.write_str("(")?;

    let mut coords = coords.iter();
    if let Some(first) = coords.next() {
        add_coord(writer, first)?;
    }
    for coord in coords {
        writer.write_str(",")?;
        add_coord(writer, coord)?;
    }

    writer.write_str(")")
}

fn add_rings<W: Write>(writer: &mut W, rings: &[LineString<f64>]) -> Result<(), Error> {
    writer.write_str("(")?;

    let mut rings = rings.iter();
    if let Some(first) = rings.next() {
        add_coords(writer, &first.0)?;
    }
    for ring in rings {
        writer.write_str(",")?;
        add_coords(writer, &ring.0)?;
    }

    writer.write_str(")")
}
