//! Percentile scaling for the color range.

/// Percentile of the strictly positive values, linearly interpolated
/// between order statistics (the NumPy default method).
///
/// Returns 0 when no value is positive. That leaves the color scale
/// degenerate and the whole map renders in the under-range color, which
/// is the documented behavior for empty countries, not an error.
pub fn positive_percentile(values: &[f32], percentile: f64) -> f32 {
    let mut positive: Vec<f64> = values
        .iter()
        .filter(|v| **v > 0.0)
        .map(|v| *v as f64)
        .collect();

    if positive.is_empty() {
        return 0.0;
    }

    positive.sort_by(f64::total_cmp);

    let rank = (positive.len() - 1) as f64 * percentile / 100.0;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;

    (positive[lo] + (positive[hi] - positive[lo]) * frac) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile_interpolates() {
        // 90th percentile of {1..6}: rank 4.5, halfway between 5 and 6
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert!((positive_percentile(&values, 90.0) - 5.5).abs() < 1e-6);
    }

    #[test]
    fn test_percentile_ignores_nonpositive() {
        // Zeros and negatives are excluded before ranking
        let values = [0.0, -2.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 0.0];
        assert!((positive_percentile(&values, 90.0) - 5.5).abs() < 1e-6);
    }

    #[test]
    fn test_all_nonpositive_yields_zero() {
        let values = [0.0, -1.0, 0.0];
        assert_eq!(positive_percentile(&values, 90.0), 0.0);
        assert_eq!(positive_percentile(&[], 90.0), 0.0);
    }

    #[test]
    fn test_single_positive_value() {
        assert_eq!(positive_percentile(&[0.0, 7.0], 90.0), 7.0);
    }

    #[test]
    fn test_median() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert!((positive_percentile(&values, 50.0) - 2.5).abs() < 1e-6);
    }
}
