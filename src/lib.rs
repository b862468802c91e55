//! # voc-eval
//!
//! A Rust library for scoring Pascal VOC object detection submissions against
//! ground truth at a strict IoU threshold.
//!
//! For every ground-truth image, predictions of each class are greedily
//! matched to ground truth boxes of the same class (first fit, IoU >= 0.95).
//! The per-image precision `TP / (TP + FP + 1e-6)` of each class is averaged
//! over images, and the per-class averages are averaged into the headline
//! **mAP@0.95**.
//!
//! ## Features
//!
//! - Parse VOC XML annotation records
//! - Extract ground truth and submission ZIP archives into scoped scratch space
//! - Greedy first-fit IoU matching per image and class
//! - Per-class and macro-averaged scores as percentages with two decimals
//! - A harness-facing JSON report that never fails: errors degrade to a 0.0 score
//!
//! ## Quick Start
//!
//! ```rust
//! use voc_eval::evaluator::Evaluator;
//! use voc_eval::ledger::ClassPrecisionLedger;
//! use voc_eval::reader::parse_annotation_str;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let xml = r#"<annotation>
//!     <object>
//!         <name>car</name>
//!         <bndbox><xmin>0</xmin><ymin>0</ymin><xmax>10</xmax><ymax>10</ymax></bndbox>
//!     </object>
//! </annotation>"#;
//! let ground_truth = parse_annotation_str(xml)?;
//! let predictions = parse_annotation_str(xml)?;
//!
//! let evaluator = Evaluator::default();
//! let mut ledger = ClassPrecisionLedger::new();
//! evaluator.score_image(&ground_truth, &predictions, &mut ledger);
//!
//! let (ap_per_class, mean_ap) = ledger.reduce();
//! assert_eq!(ap_per_class["car"], 100.0);
//! assert_eq!(mean_ap, 100.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## VOC Format
//!
//! Each archive holds one XML file per image, named after the image. Ground
//! truth and submission files for the same image share their relative path.
//!
//! ```xml
//! <annotation>
//!   <filename>000001.jpg</filename>
//!   <object>
//!     <name>car</name>
//!     <bndbox>
//!       <xmin>48</xmin>
//!       <ymin>240</ymin>
//!       <xmax>195</xmax>
//!       <ymax>371</ymax>
//!     </bndbox>
//!   </object>
//! </annotation>
//! ```

pub mod error;
pub mod types;
pub mod reader;
pub mod config;
pub mod metrics;
pub mod matching;
pub mod ledger;
pub mod stats;
pub mod archive;
pub mod report;
pub mod evaluator;

// Re-export commonly used types and functions
pub use error::{Result, VocEvalError};
pub use types::{BoundingBox, ClassMatch, Detection, EvaluationResult, ImageAnnotationSet};
pub use reader::{parse_annotation_file, parse_annotation_str};
pub use config::{load_config_from_file, load_config_from_str, EvalConfig};
pub use ledger::ClassPrecisionLedger;
pub use report::EvaluationReport;
pub use evaluator::{evaluate, evaluate_with_config, Evaluator};
