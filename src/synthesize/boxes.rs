use crate::kernel::GeometryKernel;

/// The polygon WKT of a box given as `[min_x, min_y, max_x, max_y]`.
///
/// Returns `None` when any bound is missing or not finite.
pub fn box_text<K: GeometryKernel>(kernel: &K, bounds: [Option<f64>; 4]) -> Option<String> {
    let [Some(min_x), Some(min_y), Some(max_x), Some(max_y)] = bounds else {
        return None;
    };
    if ![min_x, min_y, max_x, max_y].iter().all(|v| v.is_finite()) {
        return None;
    }
    Some(kernel.box_to_polygon_text(min_x, min_y, max_x, max_y))
}

/// Like [`box_text`], for a box given as a list that must hold exactly four values.
pub fn box_list_text<K: GeometryKernel>(kernel: &K, values: &[Option<f64>]) -> Option<String> {
    let bounds: [Option<f64>; 4] = values.try_into().ok()?;
    box_text(kernel, bounds)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::kernel::GeoKernel;

    #[test]
    fn finite_bounds() {
        assert_eq!(
            box_text(&GeoKernel::default(), [Some(1.), Some(2.), Some(3.), Some(4.5)]),
            Some("POLYGON((1 2,1 4.5,3 4.5,3 2,1 2))".to_string())
        );
    }

    #[test]
    fn missing_or_non_finite() {
        let kernel = GeoKernel::default();
        assert_eq!(box_text(&kernel, [Some(1.), None, Some(3.), Some(4.)]), None);
        assert_eq!(
            box_text(&kernel, [Some(1.), Some(f64::NAN), Some(3.), Some(4.)]),
            None
        );
        assert_eq!(
            box_text(&kernel, [Some(1.), Some(2.), Some(f64::INFINITY), Some(4.)]),
            None
        );
    }

    #[test]
    fn list_needs_four_values() {
        let kernel = GeoKernel::default();
        assert_eq!(
            box_list_text(&kernel, &[Some(0.), Some(0.), Some(1.), Some(1.)]),
            Some("POLYGON((0 0,0 1,1 1,1 0,0 0))".to_string())
        );
        assert_eq!(box_list_text(&kernel, &[Some(0.), Some(0.), Some(1.)]), None);
        assert_eq!(
            box_list_text(&kernel, &[Some(0.), Some(0.), Some(1.), Some(1.), Some(2.)]),
            None
        );
    }
}
