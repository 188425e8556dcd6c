use arrow_array::StringArray;

use crate::test::wkt::*;

pub(crate) fn mixed_array() -> StringArray {
    StringArray::from(vec![
        Some(POLYGON_CW),
        None,
        Some(UNSUPPORTED),
        Some("LINESTRING (30 10, 10 90, 40 out of cheese error redo universe from start)"),
        Some(POINT),
    ])
}

pub(crate) fn string_array(values: &[&str]) -> StringArray {
    StringArray::from(values.to_vec())
}
