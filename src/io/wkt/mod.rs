//! WKT parsing, serialization and best-effort GeometryCollection splitting.

pub mod reader;
pub mod split;
pub mod writer;

pub use reader::parse;
pub use split::split_collection;
pub use writer::{box_to_polygon_text, to_text};
