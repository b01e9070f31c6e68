/// z value for a two-sided 95% confidence interval under a normal
/// approximation.
const Z_95: f64 = 1.96;

/// Arithmetic mean of the values, 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation around a pre-computed mean. Returns 0.0 for
/// fewer than two values, where the spread is undefined.
pub fn stddev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;

    variance.sqrt()
}

/// Half-width of the 95% confidence interval around the mean,
/// `z * s / sqrt(n)`. Returns 0.0 for fewer than two values.
pub fn ci95_half_width(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    Z_95 * stddev(values, mean) / (values.len() as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_mean_of_four() {
        assert_eq!(mean(&[10.0, 20.0, 30.0, 40.0]), 25.0);
    }

    #[test]
    fn test_stddev_constant_series() {
        let values = [7.0, 7.0, 7.0];
        assert_eq!(stddev(&values, mean(&values)), 0.0);
    }

    #[test]
    fn test_stddev_single_value_is_zero() {
        assert_eq!(stddev(&[42.0], 42.0), 0.0);
    }

    #[test]
    fn test_stddev_known_series() {
        let values = [10.0, 20.0, 30.0, 40.0];
        let expected = (500.0f64 / 3.0).sqrt();
        assert!((stddev(&values, mean(&values)) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_ci95_constant_series_is_zero() {
        let values = [5.0, 5.0, 5.0, 5.0];
        assert_eq!(ci95_half_width(&values, mean(&values)), 0.0);
    }

    #[test]
    fn test_ci95_single_value_is_zero() {
        assert_eq!(ci95_half_width(&[42.0], 42.0), 0.0);
    }

    #[test]
    fn test_ci95_empty_is_zero() {
        assert_eq!(ci95_half_width(&[], 0.0), 0.0);
    }

    #[test]
    fn test_ci95_scales_stddev_by_sample_size() {
        let values = [10.0, 20.0, 30.0, 40.0];
        let m = mean(&values);
        let expected = Z_95 * stddev(&values, m) / 2.0;
        let got = ci95_half_width(&values, m);
        assert!((got - expected).abs() < 1e-9);
        assert!(got > 0.0);
    }
}
