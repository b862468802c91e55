//! Core data types for VOC annotations and evaluation results.

use crate::stats::EvaluationStats;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Represents a bounding box in VOC format (xmin, ymin, xmax, ymax).
///
/// Coordinates are integer pixel edges. No ordering between the min and max
/// edges is enforced, so an inverted box has a negative area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub xmin: i64,
    pub ymin: i64,
    pub xmax: i64,
    pub ymax: i64,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(xmin: i64, ymin: i64, xmax: i64, ymax: i64) -> Self {
        Self { xmin, ymin, xmax, ymax }
    }

    /// Width along x, negative for inverted boxes.
    pub fn width(&self) -> i128 {
        self.xmax as i128 - self.xmin as i128
    }

    /// Height along y, negative for inverted boxes.
    pub fn height(&self) -> i128 {
        self.ymax as i128 - self.ymin as i128
    }

    /// Area as `width * height`, without the inclusive `+1` and without clamping.
    pub fn area(&self) -> i128 {
        self.width() * self.height()
    }

    /// Check if the bounding box has positive extent on both axes.
    pub fn is_valid(&self) -> bool {
        self.xmin < self.xmax && self.ymin < self.ymax
    }
}

/// One object entry of an annotation record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    pub class: String,
    pub bbox: BoundingBox,
}

impl Detection {
    pub fn new(class: impl Into<String>, bbox: BoundingBox) -> Self {
        Self {
            class: class.into(),
            bbox,
        }
    }
}

/// All detections of one image, in source order.
pub type ImageAnnotationSet = Vec<Detection>;

/// Outcome of matching the predictions of one class against its ground truth
/// in a single image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassMatch {
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    /// For each prediction in input order, the ground-truth index it consumed.
    pub matched_gt: Vec<Option<usize>>,
}

impl ClassMatch {
    /// Number of predictions that took part in the match.
    pub fn num_predictions(&self) -> usize {
        self.true_positives + self.false_positives
    }
}

/// Final scores of one evaluation run.
///
/// Scores are percentages (0-100) rounded to two decimals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationResult {
    /// Mean precision per class
    pub ap_per_class: BTreeMap<String, f64>,
    /// Unweighted mean of the per-class values
    pub mean_ap: f64,
    /// Counters collected while scoring
    pub stats: EvaluationStats,
}
