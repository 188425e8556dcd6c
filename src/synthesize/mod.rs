//! Building WKT from coordinate arrays rather than parsing it.

pub mod boxes;
pub mod dump;
pub mod matrix;
pub mod sp_convert;

pub use boxes::{box_list_text, box_text};
pub use dump::{
    dump_line_string, dump_multi_line_string, dump_multi_point, dump_point, dump_polygon,
    DumpGeometry, DumpOptions,
};
pub use matrix::CoordMatrix;
pub use sp_convert::{group_text, matrix_text};
