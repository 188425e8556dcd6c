//! Reading, writing and splitting Well-Known Text.

pub mod wkt;
