//! Run-scoped accumulation of per-class precision values.

use crate::metrics::ap::{calculate_map, calculate_mean, to_rounded_percentage};
use std::collections::BTreeMap;

/// Precision values per class, one per image in which the class appeared on
/// either side.
///
/// A ledger belongs to a single evaluation run. It is passed explicitly to the
/// per-image scoring and reduced once at the end, so independent runs never
/// share state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassPrecisionLedger {
    entries: BTreeMap<String, Vec<f64>>,
}

impl ClassPrecisionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the precision of one (image, class) pair.
    pub fn record(&mut self, class: &str, precision: f64) {
        debug_assert!((0.0..=1.0).contains(&precision));
        match self.entries.get_mut(class) {
            Some(values) => values.push(precision),
            None => {
                self.entries.insert(class.to_string(), vec![precision]);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn num_classes(&self) -> usize {
        self.entries.len()
    }

    /// Recorded values for a class, in recording order.
    pub fn values(&self, class: &str) -> Option<&[f64]> {
        self.entries.get(class).map(Vec::as_slice)
    }

    /// Unrounded mean precision per class.
    pub fn class_means(&self) -> BTreeMap<String, f64> {
        self.entries
            .iter()
            .map(|(class, values)| (class.clone(), calculate_mean(values)))
            .collect()
    }

    /// Reduce to rounded percentages: the per-class means and their
    /// unweighted mean.
    ///
    /// The overall value is taken from the unrounded class means and only
    /// rounded at the end.
    pub fn reduce(&self) -> (BTreeMap<String, f64>, f64) {
        let class_means = self.class_means();
        let means: Vec<f64> = class_means.values().copied().collect();
        let mean_ap = to_rounded_percentage(calculate_map(&means));

        let ap_per_class = class_means
            .into_iter()
            .map(|(class, mean)| (class, to_rounded_percentage(mean)))
            .collect();

        (ap_per_class, mean_ap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ledger_reduces_to_zero() {
        let ledger = ClassPrecisionLedger::new();
        let (per_class, mean_ap) = ledger.reduce();
        assert!(per_class.is_empty());
        assert_eq!(mean_ap, 0.0);
    }

    #[test]
    fn test_record_appends_per_class() {
        let mut ledger = ClassPrecisionLedger::new();
        ledger.record("car", 1.0);
        ledger.record("car", 0.5);
        ledger.record("dog", 0.0);

        assert_eq!(ledger.num_classes(), 2);
        assert_eq!(ledger.values("car"), Some(&[1.0, 0.5][..]));
        assert_eq!(ledger.values("bus"), None);
    }

    #[test]
    fn test_macro_average_ignores_class_size() {
        let mut ledger = ClassPrecisionLedger::new();
        // "car" appears in four images, "dog" in one.
        for _ in 0..4 {
            ledger.record("car", 1.0);
        }
        ledger.record("dog", 0.0);

        let (per_class, mean_ap) = ledger.reduce();
        assert_eq!(per_class["car"], 100.0);
        assert_eq!(per_class["dog"], 0.0);
        assert_eq!(mean_ap, 50.0);
    }

    #[test]
    fn test_overall_uses_unrounded_means() {
        let mut ledger = ClassPrecisionLedger::new();
        ledger.record("a", 0.00006);
        ledger.record("b", 0.00006);
        ledger.record("c", 0.0);

        let (per_class, mean_ap) = ledger.reduce();
        assert_eq!(per_class["a"], 0.01);
        assert_eq!(per_class["b"], 0.01);
        assert_eq!(per_class["c"], 0.0);
        // Averaging the rounded values would give 0.01.
        assert_eq!(mean_ap, 0.0);
    }
}
