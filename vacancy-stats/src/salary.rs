/// Derives a single representative salary from an optional from/to range.
///
/// Both bounds present gives the mean of the two; a lone lower bound is
/// scaled up by 20%, a lone upper bound down by 20%. Providers send zero
/// as a placeholder for "not specified", so zero bounds count as absent.
pub fn estimate_salary(from: Option<f64>, to: Option<f64>) -> Option<f64> {
    let from = from.filter(|bound| *bound != 0.0);
    let to = to.filter(|bound| *bound != 0.0);
    match (from, to) {
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        (Some(from), None) => Some(from * 1.2),
        (None, Some(to)) => Some(to * 0.8),
        (None, None) => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_both_bounds_gives_mean() {
        assert_eq!(estimate_salary(Some(80_000.0), Some(120_000.0)), Some(100_000.0));
    }

    #[test]
    fn test_lower_bound_only_scales_up() {
        assert_eq!(estimate_salary(Some(100_000.0), None), Some(120_000.0));
    }

    #[test]
    fn test_upper_bound_only_scales_down() {
        assert_eq!(estimate_salary(None, Some(100_000.0)), Some(80_000.0));
    }

    #[test]
    fn test_no_bounds_gives_no_estimate() {
        assert_eq!(estimate_salary(None, None), None);
    }

    #[test]
    fn test_zero_bounds_count_as_absent() {
        assert_eq!(estimate_salary(Some(0.0), Some(0.0)), None);
        assert_eq!(estimate_salary(Some(0.0), Some(90_000.0)), Some(72_000.0));
        assert_eq!(estimate_salary(Some(90_000.0), Some(0.0)), Some(108_000.0));
    }
}
