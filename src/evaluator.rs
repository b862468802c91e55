//! Main evaluation orchestrator for VOC detection submissions.

use crate::archive::{collect_annotation_files, extract_archive, ScratchSpace};
use crate::config::EvalConfig;
use crate::error::Result;
use crate::ledger::ClassPrecisionLedger;
use crate::matching::{class_union, group_by_class, match_detections};
use crate::metrics::precision::calculate_precision;
use crate::reader::parse_annotation_file;
use crate::report::EvaluationReport;
use crate::stats::EvaluationStats;
use crate::types::{ClassMatch, Detection, EvaluationResult, ImageAnnotationSet};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, error, info, warn};

/// Scores submissions with a fixed configuration.
///
/// An `Evaluator` holds no per-run state, so one instance can score any number
/// of submissions, including from several threads at once.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    /// Create an evaluator after validating `config`.
    pub fn new(config: EvalConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Score one image and append a precision value per class to `ledger`.
    ///
    /// Every class present on either side gets a value, including classes
    /// with ground truth only, which score 0.0.
    ///
    /// # Returns
    ///
    /// Returns the match outcome of every class in the image.
    pub fn score_image(
        &self,
        ground_truth: &[Detection],
        predictions: &[Detection],
        ledger: &mut ClassPrecisionLedger,
    ) -> BTreeMap<String, ClassMatch> {
        let gt_by_class = group_by_class(ground_truth);
        let pred_by_class = group_by_class(predictions);

        let mut outcomes = BTreeMap::new();
        for class in class_union(&gt_by_class, &pred_by_class) {
            let gt_boxes = gt_by_class.get(class).map_or(&[][..], Vec::as_slice);
            let pred_boxes = pred_by_class.get(class).map_or(&[][..], Vec::as_slice);

            let outcome = match_detections(pred_boxes, gt_boxes, self.config.iou_threshold);
            let precision = calculate_precision(
                outcome.true_positives,
                outcome.false_positives,
                self.config.epsilon,
            );
            ledger.record(class, precision);

            outcomes.insert(class.to_string(), outcome);
        }

        outcomes
    }

    /// Evaluate extracted annotation directories.
    ///
    /// Only files found under `ground_truth_dir` are scored. A ground-truth
    /// file without a counterpart at the same relative path under
    /// `prediction_dir` counts as an image with no predictions.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be walked or any present
    /// annotation file cannot be parsed.
    pub fn evaluate_directories(
        &self,
        ground_truth_dir: &Path,
        prediction_dir: &Path,
    ) -> Result<EvaluationResult> {
        let files = collect_annotation_files(ground_truth_dir, &self.config.annotation_extension)?;

        let mut ledger = ClassPrecisionLedger::new();
        let mut stats = EvaluationStats::new();

        for relative in &files {
            let ground_truth = parse_annotation_file(ground_truth_dir.join(relative))?;

            let prediction_path = prediction_dir.join(relative);
            let predictions: ImageAnnotationSet = if prediction_path.exists() {
                parse_annotation_file(&prediction_path)?
            } else {
                debug!("No prediction file for {}", relative.display());
                stats.add_missing_prediction();
                Vec::new()
            };

            let outcomes = self.score_image(&ground_truth, &predictions, &mut ledger);

            stats.add_image(ground_truth.len(), predictions.len());
            for outcome in outcomes.values() {
                stats.add_match(outcome);
            }

            debug!(
                "Scored {}: {} ground truth, {} predicted, {} classes",
                relative.display(),
                ground_truth.len(),
                predictions.len(),
                outcomes.len()
            );
        }

        if files.is_empty() {
            warn!("No annotation files found in {}", ground_truth_dir.display());
        }

        let (ap_per_class, mean_ap) = ledger.reduce();
        info!("mAP@{}: {:.2} over {} classes", self.config.iou_threshold, mean_ap, ap_per_class.len());
        info!("{}", stats.summary_string());

        Ok(EvaluationResult {
            ap_per_class,
            mean_ap,
            stats,
        })
    }

    /// Evaluate a submission archive against a ground-truth archive.
    ///
    /// Both archives are extracted into a fresh scratch directory that is
    /// removed before this function returns, whatever the outcome.
    pub fn evaluate_archives(
        &self,
        ground_truth_archive: &Path,
        submission_archive: &Path,
    ) -> Result<EvaluationResult> {
        let scratch = ScratchSpace::new(self.config.scratch_root.as_deref())?;

        extract_archive(ground_truth_archive, scratch.ground_truth_dir())?;
        extract_archive(submission_archive, scratch.prediction_dir())?;

        self.evaluate_directories(scratch.ground_truth_dir(), scratch.prediction_dir())
    }

    /// Evaluate and always produce a report.
    ///
    /// Any failure is logged and turned into a report with a score of 0.0 and
    /// the error message, so a broken submission never stops a grading batch.
    pub fn evaluate(
        &self,
        ground_truth_archive: &Path,
        submission_archive: &Path,
        phase: &str,
    ) -> EvaluationReport {
        match self.evaluate_archives(ground_truth_archive, submission_archive) {
            Ok(evaluation) => EvaluationReport::success(phase, &evaluation),
            Err(e) => {
                error!("Evaluation of {} failed: {}", submission_archive.display(), e);
                EvaluationReport::failure(phase, e.to_string())
            }
        }
    }
}

/// Evaluate a submission with the default configuration.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use voc_eval::evaluator::evaluate;
///
/// let report = evaluate(
///     Path::new("annotations/test_phase_annotations.zip"),
///     Path::new("annotations/test_phase_submission.zip"),
///     "test",
/// );
/// println!("{}", report.to_json().unwrap());
/// ```
pub fn evaluate(ground_truth_archive: &Path, submission_archive: &Path, phase: &str) -> EvaluationReport {
    Evaluator::default().evaluate(ground_truth_archive, submission_archive, phase)
}

/// Evaluate a submission with custom settings.
///
/// An invalid configuration is reported like any other failure.
pub fn evaluate_with_config(
    ground_truth_archive: &Path,
    submission_archive: &Path,
    phase: &str,
    config: EvalConfig,
) -> EvaluationReport {
    match Evaluator::new(config) {
        Ok(evaluator) => evaluator.evaluate(ground_truth_archive, submission_archive, phase),
        Err(e) => {
            error!("Invalid evaluation settings: {}", e);
            EvaluationReport::failure(phase, e.to_string())
        }
    }
}
