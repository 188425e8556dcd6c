//! The structural validity predicate behind validation and orientation correction.
//!
//! Checks run in a fixed order and stop at the first failure, so each invalid geometry reports
//! exactly one [`FailureCode`].

mod failure;

pub use failure::FailureCode;

use std::collections::{HashMap, HashSet};

use geo::algorithm::coordinate_position::{CoordPos, CoordinatePosition};
use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo::sweep::{Cross, Intersections, LineOrPoint};
use geo::{Area, BoundingRect, Coord, Intersects, Line, Rect};
use itertools::Itertools;

use crate::algorithm::geo::RingOrientation;
use crate::geometry::{coord_to_geo, polygon_to_geo, GeometryVariant};
use crate::kernel::KernelOptions;

/// Checks whether a geometry is structurally valid.
pub trait IsValid {
    /// `Ok(())` when valid, otherwise the first failure found.
    fn check_validity(&self, options: &KernelOptions) -> Result<(), FailureCode>;

    fn is_valid(&self, options: &KernelOptions) -> bool {
        self.check_validity(options).is_ok()
    }
}

impl IsValid for GeometryVariant {
    fn check_validity(&self, options: &KernelOptions) -> Result<(), FailureCode> {
        match self {
            GeometryVariant::Point(_) | GeometryVariant::MultiPoint(_) => Ok(()),
            GeometryVariant::LineString(line_string) => {
                check_line_string(&to_coords(&line_string.0), options)
            }
            GeometryVariant::MultiLineString(multi_line_string) => multi_line_string
                .0
                .iter()
                .try_for_each(|line| check_line_string(&to_coords(&line.0), options)),
            GeometryVariant::Polygon(polygon) => check_polygon(polygon, options),
            GeometryVariant::MultiPolygon(multi_polygon) => {
                multi_polygon
                    .0
                    .iter()
                    .try_for_each(|polygon| check_polygon(polygon, options))?;
                check_polygons_disjoint(&multi_polygon.0)
            }
        }
    }
}

fn to_coords(coords: &[wkt::types::Coord<f64>]) -> Vec<Coord<f64>> {
    coords.iter().map(coord_to_geo).collect()
}

fn check_line_string(coords: &[Coord<f64>], options: &KernelOptions) -> Result<(), FailureCode> {
    if coords.len() < 2 {
        return Err(FailureCode::FewPoints);
    }

    let distinct = dedup_consecutive(coords);
    if distinct.len() < 2 {
        return Err(FailureCode::WrongTopologicalDimension);
    }
    if !options.allow_duplicates && distinct.len() != coords.len() {
        return Err(FailureCode::DuplicatePoints);
    }
    if !options.allow_spikes
        && distinct
            .iter()
            .tuple_windows()
            .any(|(a, b, c)| is_spike(a, b, c))
    {
        return Err(FailureCode::Spikes);
    }

    Ok(())
}

fn check_ring(
    coords: &[Coord<f64>],
    orientation: RingOrientation,
    options: &KernelOptions,
) -> Result<(), FailureCode> {
    if coords.len() < 4 {
        return Err(FailureCode::FewPoints);
    }
    if coords.first() != coords.last() {
        return Err(FailureCode::NotClosed);
    }

    // Still closed: the first and last points survive deduplication.
    let closed = dedup_consecutive(coords);
    let open = &closed[..closed.len() - 1];
    if open.len() < 3 {
        return Err(FailureCode::WrongTopologicalDimension);
    }
    if !options.allow_duplicates && closed.len() != coords.len() {
        return Err(FailureCode::DuplicatePoints);
    }
    if has_ring_spikes(open) {
        return Err(FailureCode::Spikes);
    }
    if has_ring_self_intersection(&closed) {
        return Err(FailureCode::SelfIntersections);
    }

    let area = geo::Polygon::new(geo::LineString(closed), vec![]).signed_area();
    if !orientation.matches(area) {
        return Err(FailureCode::WrongOrientation);
    }

    Ok(())
}

fn check_polygon(
    polygon: &wkt::types::Polygon<f64>,
    options: &KernelOptions,
) -> Result<(), FailureCode> {
    let rings: Vec<Vec<Coord<f64>>> = polygon.0.iter().map(|ring| to_coords(&ring.0)).collect();
    let Some((exterior, interiors)) = rings.split_first() else {
        return Err(FailureCode::FewPoints);
    };

    check_ring(exterior, options.orientation, options)?;
    for interior in interiors {
        check_ring(interior, options.orientation.opposite(), options)?;
    }

    let touches = ring_touches(&rings)?;
    check_holes_inside(exterior, interiors)?;
    check_holes_not_nested(interiors)?;
    check_connected_interior(rings.len(), &touches)
}

fn dedup_consecutive(coords: &[Coord<f64>]) -> Vec<Coord<f64>> {
    let mut distinct = coords.to_vec();
    distinct.dedup();
    distinct
}

/// `b` is a spike when the path doubles back on itself there.
fn is_spike(a: &Coord<f64>, b: &Coord<f64>, c: &Coord<f64>) -> bool {
    let (ux, uy) = (b.x - a.x, b.y - a.y);
    let (vx, vy) = (c.x - b.x, c.y - b.y);
    ux * vy - uy * vx == 0. && ux * vx + uy * vy < 0.
}

fn has_ring_spikes(open: &[Coord<f64>]) -> bool {
    let n = open.len();
    (0..n).any(|idx| is_spike(&open[(idx + n - 1) % n], &open[idx], &open[(idx + 1) % n]))
}

/// A ring edge tagged with its ring and its position along that ring.
#[derive(Debug, Clone, Copy)]
struct Edge {
    ring: usize,
    idx: usize,
    line: Line<f64>,
}

impl Edge {
    fn is_finite(&self) -> bool {
        [self.line.start, self.line.end]
            .iter()
            .all(|coord| coord.x.is_finite() && coord.y.is_finite())
    }
}

impl Cross for Edge {
    type Scalar = f64;

    fn line(&self) -> LineOrPoint<f64> {
        self.line.into()
    }
}

/// Edges of a closed ring. `closed` must not repeat consecutive points.
fn ring_edges(ring: usize, closed: &[Coord<f64>]) -> impl Iterator<Item = Edge> + '_ {
    closed
        .iter()
        .tuple_windows()
        .enumerate()
        .map(move |(idx, (start, end))| Edge {
            ring,
            idx,
            line: Line::new(*start, *end),
        })
}

/// Every intersecting pair of edges, found with a Bentley-Ottmann sweep.
///
/// The sweep cannot order non-finite coordinates, so those inputs are compared pairwise.
fn crossings(edges: Vec<Edge>) -> Vec<(Edge, Edge, LineIntersection<f64>)> {
    if edges.iter().all(Edge::is_finite) {
        return Intersections::from_iter(edges).collect();
    }
    edges
        .into_iter()
        .tuple_combinations()
        .filter_map(|(a, b)| line_intersection(a.line, b.line).map(|found| (a, b, found)))
        .collect()
}

fn has_ring_self_intersection(closed: &[Coord<f64>]) -> bool {
    let last = closed.len() - 2;
    crossings(ring_edges(0, closed).collect())
        .into_iter()
        .any(|(a, b, _)| {
            let (i, j) = (a.idx.min(b.idx), a.idx.max(b.idx));
            j != i + 1 && !(i == 0 && j == last)
        })
}

/// A point where two different rings of one polygon meet without crossing.
struct Touch {
    rings: (usize, usize),
    point: Coord<f64>,
}

/// Fails on rings crossing or sharing an edge; otherwise returns the points where they touch.
fn ring_touches(rings: &[Vec<Coord<f64>>]) -> Result<Vec<Touch>, FailureCode> {
    let closed: Vec<Vec<Coord<f64>>> = rings.iter().map(|ring| dedup_consecutive(ring)).collect();
    let edges = closed
        .iter()
        .enumerate()
        .flat_map(|(ring, coords)| ring_edges(ring, coords))
        .collect();

    let mut touches = vec![];
    for (a, b, found) in crossings(edges) {
        if a.ring == b.ring {
            continue;
        }
        match found {
            LineIntersection::SinglePoint {
                intersection,
                is_proper: false,
            } => touches.push(Touch {
                rings: (a.ring, b.ring),
                point: intersection,
            }),
            _ => return Err(FailureCode::SelfIntersections),
        }
    }
    Ok(touches)
}

fn ring_polygon(ring: &[Coord<f64>]) -> geo::Polygon<f64> {
    geo::Polygon::new(geo::LineString(ring.to_vec()), vec![])
}

fn check_holes_inside(
    exterior: &[Coord<f64>],
    interiors: &[Vec<Coord<f64>>],
) -> Result<(), FailureCode> {
    let shell = ring_polygon(exterior);
    let outside = interiors
        .iter()
        .flatten()
        .any(|coord| shell.coordinate_position(coord) == CoordPos::Outside);
    if outside {
        return Err(FailureCode::InteriorRingsOutside);
    }
    Ok(())
}

fn check_holes_not_nested(interiors: &[Vec<Coord<f64>>]) -> Result<(), FailureCode> {
    let holes: Vec<geo::Polygon<f64>> = interiors.iter().map(|ring| ring_polygon(ring)).collect();
    for (inner_idx, inner) in interiors.iter().enumerate() {
        for (outer_idx, outer) in holes.iter().enumerate() {
            if inner_idx != outer_idx
                && inner
                    .iter()
                    .any(|coord| outer.coordinate_position(coord) == CoordPos::Inside)
            {
                return Err(FailureCode::NestedInteriorRings);
            }
        }
    }
    Ok(())
}

/// The interior is disconnected when rings and their touch points form a cycle.
fn check_connected_interior(ring_count: usize, touches: &[Touch]) -> Result<(), FailureCode> {
    let mut point_nodes: HashMap<(u64, u64), usize> = HashMap::new();
    let mut edges: HashSet<(usize, usize)> = HashSet::new();
    for touch in touches {
        // Adding zero folds -0.0 into 0.0
        let key = (
            (touch.point.x + 0.).to_bits(),
            (touch.point.y + 0.).to_bits(),
        );
        let next = ring_count + point_nodes.len();
        let node = *point_nodes.entry(key).or_insert(next);
        edges.insert((touch.rings.0, node));
        edges.insert((touch.rings.1, node));
    }

    let mut parent: Vec<usize> = (0..ring_count + point_nodes.len()).collect();
    for (ring, node) in edges.into_iter().sorted() {
        let (root_ring, root_node) = (find_root(&mut parent, ring), find_root(&mut parent, node));
        if root_ring == root_node {
            return Err(FailureCode::DisconnectedInterior);
        }
        parent[root_ring] = root_node;
    }
    Ok(())
}

fn find_root(parent: &mut [usize], mut idx: usize) -> usize {
    while parent[idx] != idx {
        parent[idx] = parent[parent[idx]];
        idx = parent[idx];
    }
    idx
}

fn check_polygons_disjoint(polygons: &[wkt::types::Polygon<f64>]) -> Result<(), FailureCode> {
    let polygons: Vec<geo::Polygon<f64>> = polygons.iter().map(polygon_to_geo).collect();
    let exteriors: Vec<Vec<Coord<f64>>> = polygons
        .iter()
        .map(|polygon| dedup_consecutive(&polygon.exterior().0))
        .collect();
    let edges = exteriors
        .iter()
        .enumerate()
        .flat_map(|(idx, ring)| ring_edges(idx, ring))
        .collect();

    let crossing = crossings(edges).into_iter().any(|(a, b, found)| {
        a.ring != b.ring
            && matches!(
                found,
                LineIntersection::SinglePoint {
                    is_proper: true,
                    ..
                } | LineIntersection::Collinear { .. }
            )
    });
    if crossing {
        return Err(FailureCode::IntersectingInteriors);
    }

    let bounds: Vec<Option<Rect<f64>>> = polygons.iter().map(|p| p.bounding_rect()).collect();
    for ((a, a_bounds), (b, b_bounds)) in polygons.iter().zip(&bounds).tuple_combinations() {
        let (Some(a_bounds), Some(b_bounds)) = (a_bounds, b_bounds) else {
            continue;
        };
        if !a_bounds.intersects(b_bounds) {
            continue;
        }

        let overlaps = a
            .exterior()
            .coords()
            .any(|coord| b.coordinate_position(coord) == CoordPos::Inside)
            || b.exterior()
                .coords()
                .any(|coord| a.coordinate_position(coord) == CoordPos::Inside);
        if overlaps {
            return Err(FailureCode::IntersectingInteriors);
        }
    }
    Ok(())
}
