//! Smoothed precision for a single (image, class) pair.

/// Smoothing term added to the precision denominator.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Calculate precision from true and false positive counts.
///
/// Precision = TP / (TP + FP + epsilon)
///
/// The smoothing term keeps the result defined when there were no predictions,
/// in which case the precision is 0.0. Because of it a perfect match scores
/// slightly below 1.0.
///
/// # Examples
///
/// ```
/// # use voc_eval::metrics::precision::calculate_precision;
/// let precision = calculate_precision(0, 0, 1e-6);
/// assert_eq!(precision, 0.0);
///
/// let precision = calculate_precision(3, 1, 1e-6);
/// assert!((precision - 0.75).abs() < 1e-6);
/// ```
#[must_use]
pub fn calculate_precision(tp: usize, fp: usize, epsilon: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let precision = (tp as f64) / ((tp + fp) as f64 + epsilon);

    debug_assert!(
        (0.0..=1.0).contains(&precision),
        "Precision must be between 0 and 1, got {precision}"
    );

    precision
}
