//! Metrics calculation modules for VOC evaluation.

pub mod iou;
pub mod precision;
pub mod ap;

pub use iou::calculate_iou;
pub use precision::{calculate_precision, DEFAULT_EPSILON};
pub use ap::{calculate_map, calculate_mean, to_rounded_percentage};
