//! Detection matching utilities for evaluating predictions against ground truth.

use crate::metrics::iou::calculate_iou;
use crate::types::{BoundingBox, ClassMatch, Detection};
use std::collections::{BTreeMap, BTreeSet};

/// Match predictions to ground truth boxes for a single image and class.
///
/// Uses greedy first-fit matching: predictions are taken in input order, and
/// each one is matched to the first still-unmatched ground truth whose IoU is
/// at least `iou_threshold`. There is no confidence ranking and no search for
/// the best IoU among the remaining candidates.
///
/// # Arguments
///
/// * `predictions` - Predicted boxes for this image/class
/// * `ground_truths` - Ground truth boxes for this image/class
/// * `iou_threshold` - Minimum IoU (inclusive) to consider a match
///
/// # Returns
///
/// Returns the TP/FP/FN counts and, per prediction, the consumed ground truth index.
pub fn match_detections(
    predictions: &[BoundingBox],
    ground_truths: &[BoundingBox],
    iou_threshold: f64,
) -> ClassMatch {
    // Track which ground truths have been matched
    let mut matched = vec![false; ground_truths.len()];
    let mut outcome = ClassMatch {
        matched_gt: Vec::with_capacity(predictions.len()),
        ..ClassMatch::default()
    };

    for pred_box in predictions {
        let hit = ground_truths
            .iter()
            .enumerate()
            .filter(|&(gt_idx, _)| !matched[gt_idx])
            .find(|(_, gt_box)| calculate_iou(pred_box, gt_box) >= iou_threshold)
            .map(|(gt_idx, _)| gt_idx);

        match hit {
            Some(gt_idx) => {
                matched[gt_idx] = true;
                outcome.true_positives += 1;
            }
            None => outcome.false_positives += 1,
        }
        outcome.matched_gt.push(hit);
    }

    outcome.false_negatives = ground_truths.len() - outcome.true_positives;
    outcome
}

/// Group detections by class name, keeping input order within each class.
pub fn group_by_class(detections: &[Detection]) -> BTreeMap<String, Vec<BoundingBox>> {
    let mut groups: BTreeMap<String, Vec<BoundingBox>> = BTreeMap::new();

    for detection in detections {
        groups
            .entry(detection.class.clone())
            .or_default()
            .push(detection.bbox);
    }

    groups
}

/// Union of the class names of two groupings.
pub fn class_union<'a>(
    ground_truth: &'a BTreeMap<String, Vec<BoundingBox>>,
    predictions: &'a BTreeMap<String, Vec<BoundingBox>>,
) -> BTreeSet<&'a str> {
    ground_truth
        .keys()
        .chain(predictions.keys())
        .map(String::as_str)
        .collect()
}
