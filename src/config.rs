//! Evaluation settings and their validation.

use crate::error::{Result, VocEvalError};
use crate::metrics::precision::DEFAULT_EPSILON;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// IoU a prediction must reach to match a ground truth box.
pub const DEFAULT_IOU_THRESHOLD: f64 = 0.95;

/// File extension of annotation records inside an archive.
pub const DEFAULT_ANNOTATION_EXTENSION: &str = "xml";

/// Settings for one evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Minimum IoU (inclusive) for a match
    pub iou_threshold: f64,
    /// Smoothing term of the precision denominator
    pub epsilon: f64,
    /// Extension (without dot) of annotation files, matched case-sensitively
    pub annotation_extension: String,
    /// Directory under which scratch space is created, system temp if unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scratch_root: Option<PathBuf>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            iou_threshold: DEFAULT_IOU_THRESHOLD,
            epsilon: DEFAULT_EPSILON,
            annotation_extension: DEFAULT_ANNOTATION_EXTENSION.to_string(),
            scratch_root: None,
        }
    }
}

impl EvalConfig {
    /// Check that all settings are usable.
    ///
    /// # Errors
    ///
    /// Returns `InvalidThreshold` if the IoU threshold is outside `(0.0, 1.0]`
    /// or the smoothing term is not a positive finite number.
    pub fn validate(&self) -> Result<()> {
        validate_iou_threshold(self.iou_threshold)?;

        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(VocEvalError::InvalidThreshold(format!(
                "Epsilon must be a positive finite number, got {}",
                self.epsilon
            )));
        }

        if self.annotation_extension.trim().is_empty() {
            return Err(VocEvalError::InvalidThreshold(
                "Annotation extension must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Validate that an IoU threshold is in `(0.0, 1.0]`.
///
/// A threshold of 0.0 would let disjoint boxes match.
pub fn validate_iou_threshold(threshold: f64) -> Result<()> {
    if !(threshold > 0.0 && threshold <= 1.0) {
        return Err(VocEvalError::InvalidThreshold(format!(
            "IoU threshold must be in (0.0, 1.0], got {}",
            threshold
        )));
    }
    Ok(())
}

/// Load settings from a JSON file. Missing keys take their defaults.
///
/// # Example
///
/// ```no_run
/// use voc_eval::config::load_config_from_file;
///
/// let config = load_config_from_file("eval_config.json").unwrap();
/// println!("IoU threshold: {}", config.iou_threshold);
/// ```
pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<EvalConfig> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config: EvalConfig = serde_json::from_reader(reader)?;

    config.validate()?;

    Ok(config)
}

/// Load settings from a JSON string. Missing keys take their defaults.
///
/// # Example
///
/// ```
/// use voc_eval::config::load_config_from_str;
///
/// let config = load_config_from_str(r#"{ "iou_threshold": 0.5 }"#).unwrap();
/// assert_eq!(config.iou_threshold, 0.5);
/// assert_eq!(config.annotation_extension, "xml");
/// ```
pub fn load_config_from_str(json_str: &str) -> Result<EvalConfig> {
    let config: EvalConfig = serde_json::from_str(json_str)?;
    config.validate()?;
    Ok(config)
}
