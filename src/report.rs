//! The JSON result handed back to the grading harness.

use crate::error::Result;
use crate::types::EvaluationResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Score reported for one phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseScore {
    #[serde(rename = "mAP@0.95")]
    pub map_095: f64,
}

/// Per-class breakdown, present only on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    #[serde(rename = "mean_ap_0.95")]
    pub mean_ap_095: f64,
    pub ap_per_class: BTreeMap<String, f64>,
}

/// Harness-facing result of one evaluation.
///
/// On success:
/// `{"result":[{"<phase>":{"mAP@0.95":v}}],"metadata":{"mean_ap_0.95":v,"ap_per_class":{..}}}`
///
/// On failure:
/// `{"result":[{"<phase>":{"mAP@0.95":0.0}}],"error":"<message>"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub result: Vec<BTreeMap<String, PhaseScore>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ReportMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EvaluationReport {
    /// Build the report of a successful run.
    pub fn success(phase: &str, evaluation: &EvaluationResult) -> Self {
        Self {
            result: phase_entry(phase, evaluation.mean_ap),
            metadata: Some(ReportMetadata {
                mean_ap_095: evaluation.mean_ap,
                ap_per_class: evaluation.ap_per_class.clone(),
            }),
            error: None,
        }
    }

    /// Build the degraded report: score forced to 0.0, no breakdown.
    pub fn failure(phase: &str, message: impl Into<String>) -> Self {
        Self {
            result: phase_entry(phase, 0.0),
            metadata: None,
            error: Some(message.into()),
        }
    }

    /// Headline score of the first phase entry.
    pub fn mean_ap(&self) -> f64 {
        self.result
            .first()
            .and_then(|entry| entry.values().next())
            .map_or(0.0, |score| score.map_095)
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn phase_entry(phase: &str, score: f64) -> Vec<BTreeMap<String, PhaseScore>> {
    let mut entry = BTreeMap::new();
    entry.insert(phase.to_string(), PhaseScore { map_095: score });
    vec![entry]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let mut evaluation = EvaluationResult::default();
        evaluation.ap_per_class.insert("car".to_string(), 100.0);
        evaluation.ap_per_class.insert("dog".to_string(), 50.0);
        evaluation.mean_ap = 75.0;

        let report = EvaluationReport::success("test", &evaluation);
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(
            value,
            json!({
                "result": [{ "test": { "mAP@0.95": 75.0 } }],
                "metadata": {
                    "mean_ap_0.95": 75.0,
                    "ap_per_class": { "car": 100.0, "dog": 50.0 }
                }
            })
        );
        assert!(report.is_success());
        assert_eq!(report.mean_ap(), 75.0);
    }

    #[test]
    fn test_failure_shape() {
        let report = EvaluationReport::failure("dev", "Archive error (x.zip): not found");
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(
            value,
            json!({
                "result": [{ "dev": { "mAP@0.95": 0.0 } }],
                "error": "Archive error (x.zip): not found"
            })
        );
        assert!(!report.is_success());
        assert_eq!(report.mean_ap(), 0.0);
    }
}
