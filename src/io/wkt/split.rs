use crate::datatypes::clean_wkt;

/// Split the text of a GeometryCollection into the WKT of its members, in order of appearance.
///
/// This is a best-effort text scan, not a grammar. Walking backwards from the end of the input,
/// every run of ASCII letters that is preceded by a non-letter starts a member, and that member
/// extends up to the start of the member found before it. The run at the very start of the
/// input (the `GEOMETRYCOLLECTION` keyword itself) has nothing before it and is never emitted.
/// Afterwards the last member loses its final character (the collection's closing parenthesis),
/// and any member holding a `)` that does not end with one is cut back to its last `)`, which
/// drops the separating commas.
///
/// Known limits of the scan:
///
/// - An empty body such as `GEOMETRYCOLLECTION ()` yields no members.
/// - Any other letters split too: `GEOMETRYCOLLECTION EMPTY` yields `EMPT`, a dimension tag
///   like `POINT Z (1 2 3)` yields `POINT` and `Z (1 2 3)`, and exponents such as `1e5` split
///   a member in two.
/// - Nested collections are split into their own members plus the bare nested keyword.
///
/// ```
/// use wktkit::io::wkt::split_collection;
///
/// let members = split_collection("GEOMETRYCOLLECTION(POINT(4 6),LINESTRING(4 6,7 10))");
/// assert_eq!(members, vec!["POINT(4 6)", "LINESTRING(4 6,7 10)"]);
/// ```
pub fn split_collection(wkt: &str) -> Vec<String> {
    let bytes = clean_wkt(wkt).as_bytes();
    let mut members = backward_scan(bytes);

    if let Some(last) = members.first_mut() {
        last.pop();
    }
    for member in members.iter_mut() {
        if let Some(idx) = member.rfind(')') {
            member.truncate(idx + 1);
        }
    }

    members.reverse();
    members
}

/// Collect member fragments, last member first.
fn backward_scan(bytes: &[u8]) -> Vec<String> {
    let mut fragments = vec![];
    let mut in_tag = false;
    let mut split_end = bytes.len();

    // Starts one past the end so that a trailing letter run still closes on a non-letter.
    for idx in (0..=bytes.len()).rev() {
        if bytes.get(idx).is_some_and(u8::is_ascii_alphabetic) {
            in_tag = true;
        } else if in_tag {
            fragments.push(String::from_utf8_lossy(&bytes[idx + 1..split_end]).into_owned());
            in_tag = false;
            split_end = idx + 1;
        }
    }

    fragments
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::wkt::*;

    #[test]
    fn members_in_order() {
        assert_eq!(
            split_collection(COLLECTION),
            vec!["POINT (4 6)", "LINESTRING (4 6, 7 10)"]
        );
    }

    #[test]
    fn backward_scan_is_reversed() {
        let fragments = backward_scan(COLLECTION.as_bytes());
        assert_eq!(
            fragments,
            vec!["LINESTRING (4 6, 7 10))", "POINT (4 6), "]
        );
    }

    #[test]
    fn nested_polygons() {
        let wkt = "GEOMETRYCOLLECTION(POLYGON((0 0,0 1,1 1,0 0)),POINT(1 1),MULTIPOINT((1 2),(3 4)))";
        assert_eq!(
            split_collection(wkt),
            vec![
                "POLYGON((0 0,0 1,1 1,0 0))",
                "POINT(1 1)",
                "MULTIPOINT((1 2),(3 4))"
            ]
        );
    }

    #[test]
    fn surrounding_whitespace() {
        assert_eq!(
            split_collection("\t GEOMETRYCOLLECTION(POINT(4 6)) "),
            vec!["POINT(4 6)"]
        );
    }

    #[test]
    fn empty_bodies() {
        assert!(split_collection("GEOMETRYCOLLECTION ()").is_empty());
        assert!(split_collection("GEOMETRYCOLLECTION").is_empty());
        assert!(split_collection("").is_empty());
        assert_eq!(split_collection("GEOMETRYCOLLECTION EMPTY"), vec!["EMPT"]);
    }
}
