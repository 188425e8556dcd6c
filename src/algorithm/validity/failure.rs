use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Why a parsed geometry failed the validity predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureCode {
    FewPoints,
    WrongTopologicalDimension,
    Spikes,
    DuplicatePoints,
    NotClosed,
    SelfIntersections,
    WrongOrientation,
    InteriorRingsOutside,
    NestedInteriorRings,
    DisconnectedInterior,
    IntersectingInteriors,
    /// Only boxes can fail this way, and boxes are never materialized from WKT.
    WrongCornerOrder,
}

const MESSAGES: [&str; 12] = [
    "The WKT object has too few points for its type",
    "The WKT object has a topological dimension too small for its dimensions",
    "The WKT object contains spikes",
    "The WKT object has consecutive duplicate points",
    "The WKT object is closed but does not have matching start/end points",
    "The WKT object has invalid self-intersections",
    "The WKT object has a different orientation from the default. Use correct to fix.",
    "The WKT object has interior rings sitting outside its exterior ring",
    "The WKT object has nested interior rings",
    "The interior of the WKT object is disconnected",
    "The WKT object has interior rings that intersect",
    "The WKT object, a box, has corners in the wrong order",
];

impl FailureCode {
    pub const ALL: [FailureCode; 12] = [
        Self::FewPoints,
        Self::WrongTopologicalDimension,
        Self::Spikes,
        Self::DuplicatePoints,
        Self::NotClosed,
        Self::SelfIntersections,
        Self::WrongOrientation,
        Self::InteriorRingsOutside,
        Self::NestedInteriorRings,
        Self::DisconnectedInterior,
        Self::IntersectingInteriors,
        Self::WrongCornerOrder,
    ];

    /// The fixed human-readable reason for this failure.
    pub fn message(&self) -> &'static str {
        MESSAGES[*self as usize]
    }
}

impl Display for FailureCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
