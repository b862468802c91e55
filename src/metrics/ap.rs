//! Per-class and overall averaging of precision values.

/// Arithmetic mean of a slice, 0.0 when empty.
///
/// # Example
///
/// ```
/// use voc_eval::metrics::ap::calculate_mean;
///
/// assert_eq!(calculate_mean(&[0.5, 1.0]), 0.75);
/// assert_eq!(calculate_mean(&[]), 0.0);
/// ```
pub fn calculate_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    values.iter().sum::<f64>() / values.len() as f64
}

/// Calculate the macro-averaged score across classes.
///
/// Every class weighs the same regardless of how many images or instances it
/// had.
///
/// # Example
///
/// ```
/// use voc_eval::metrics::ap::calculate_map;
///
/// let class_aps = vec![0.8, 0.9, 0.75, 0.85];
/// let map = calculate_map(&class_aps);
/// assert!((map - 0.825).abs() < 1e-10);
/// ```
pub fn calculate_map(class_aps: &[f64]) -> f64 {
    calculate_mean(class_aps)
}

/// Scale a fraction to 0-100 and round to two decimals.
///
/// ```
/// use voc_eval::metrics::ap::to_rounded_percentage;
///
/// assert_eq!(to_rounded_percentage(0.999999000001), 100.0);
/// assert_eq!(to_rounded_percentage(0.5), 50.0);
/// ```
pub fn to_rounded_percentage(value: f64) -> f64 {
    (value * 100.0 * 100.0).round() / 100.0
}
