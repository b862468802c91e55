//! Statistics tracking for an evaluation run
//!
//! This module provides the counters collected while ground-truth images are
//! matched against a submission.

use crate::types::ClassMatch;
use serde::{Deserialize, Serialize};

/// Statistics collected during one evaluation run
///
/// False negatives are tracked here for completeness; they do not enter the
/// precision formula.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationStats {
    /// Number of ground-truth images scored
    pub processed_images: usize,

    /// Number of ground-truth images with no prediction file
    pub missing_predictions: usize,

    /// Total ground-truth boxes seen
    pub ground_truth_boxes: usize,

    /// Total predicted boxes seen
    pub predicted_boxes: usize,

    /// Predictions matched to a ground-truth box
    pub true_positives: usize,

    /// Predictions without an available ground-truth box
    pub false_positives: usize,

    /// Ground-truth boxes never matched
    pub false_negatives: usize,
}

impl EvaluationStats {
    /// Create a new `EvaluationStats` with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one scored image and its box counts
    pub fn add_image(&mut self, ground_truth_boxes: usize, predicted_boxes: usize) {
        self.processed_images += 1;
        self.ground_truth_boxes += ground_truth_boxes;
        self.predicted_boxes += predicted_boxes;
    }

    /// Record a ground-truth image whose prediction file was absent
    pub fn add_missing_prediction(&mut self) {
        self.missing_predictions += 1;
    }

    /// Fold the counts of one (image, class) match into the totals
    pub fn add_match(&mut self, class_match: &ClassMatch) {
        self.true_positives += class_match.true_positives;
        self.false_positives += class_match.false_positives;
        self.false_negatives += class_match.false_negatives;
    }

    /// Get a formatted string summary of the statistics
    pub fn summary_string(&self) -> String {
        format!(
            "EvaluationStats {{ images: {}, missing_predictions: {}, gt_boxes: {}, pred_boxes: {}, tp: {}, fp: {}, fn: {} }}",
            self.processed_images,
            self.missing_predictions,
            self.ground_truth_boxes,
            self.predicted_boxes,
            self.true_positives,
            self.false_positives,
            self.false_negatives
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_are_zero() {
        let stats = EvaluationStats::new();
        assert_eq!(stats.processed_images, 0);
        assert_eq!(stats.true_positives, 0);
        assert_eq!(stats.false_negatives, 0);
    }

    #[test]
    fn test_add_image_and_match() {
        let mut stats = EvaluationStats::new();
        stats.add_image(3, 2);
        stats.add_match(&ClassMatch {
            true_positives: 1,
            false_positives: 1,
            false_negatives: 2,
            matched_gt: vec![Some(0), None],
        });
        stats.add_missing_prediction();

        assert_eq!(stats.processed_images, 1);
        assert_eq!(stats.ground_truth_boxes, 3);
        assert_eq!(stats.predicted_boxes, 2);
        assert_eq!(stats.true_positives, 1);
        assert_eq!(stats.false_positives, 1);
        assert_eq!(stats.false_negatives, 2);
        assert_eq!(stats.missing_predictions, 1);
    }

    #[test]
    fn test_summary_string() {
        let mut stats = EvaluationStats::new();
        stats.add_image(4, 5);

        let summary = stats.summary_string();
        assert!(summary.contains("images: 1"));
        assert!(summary.contains("gt_boxes: 4"));
        assert!(summary.contains("pred_boxes: 5"));
    }
}
