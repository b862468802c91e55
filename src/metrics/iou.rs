//! Intersection over Union (IoU) calculation.

use crate::types::BoundingBox;

/// Calculate the Intersection over Union (IoU) between two bounding boxes.
///
/// The intersection is clamped to be non-negative along each axis. Box areas
/// are taken as `(xmax - xmin) * (ymax - ymin)` exactly as given, so an
/// inverted box contributes a negative area to the union. A non-positive union
/// yields 0.0.
///
/// # Arguments
///
/// * `bbox1` - First bounding box
/// * `bbox2` - Second bounding box
///
/// # Example
///
/// ```
/// use voc_eval::metrics::iou::calculate_iou;
/// use voc_eval::types::BoundingBox;
///
/// let bbox1 = BoundingBox::new(0, 0, 10, 10);
/// let bbox2 = BoundingBox::new(5, 5, 15, 15);
/// let iou = calculate_iou(&bbox1, &bbox2);
/// assert!(iou > 0.0 && iou < 1.0);
/// ```
pub fn calculate_iou(bbox1: &BoundingBox, bbox2: &BoundingBox) -> f64 {
    let x_left = bbox1.xmin.max(bbox2.xmin) as i128;
    let y_top = bbox1.ymin.max(bbox2.ymin) as i128;
    let x_right = bbox1.xmax.min(bbox2.xmax) as i128;
    let y_bottom = bbox1.ymax.min(bbox2.ymax) as i128;

    let intersection_area = (x_right - x_left).max(0) * (y_bottom - y_top).max(0);
    let union_area = bbox1.area() + bbox2.area() - intersection_area;

    if union_area <= 0 {
        return 0.0;
    }

    intersection_area as f64 / union_area as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_boxes() {
        let bbox = BoundingBox::new(0, 0, 10, 10);
        assert_eq!(calculate_iou(&bbox, &bbox), 1.0);
    }

    #[test]
    fn test_no_overlap() {
        let bbox1 = BoundingBox::new(0, 0, 10, 10);
        let bbox2 = BoundingBox::new(20, 20, 30, 30);
        assert_eq!(calculate_iou(&bbox1, &bbox2), 0.0);
    }

    #[test]
    fn test_touching_edges() {
        let bbox1 = BoundingBox::new(0, 0, 10, 10);
        let bbox2 = BoundingBox::new(10, 0, 20, 10);
        assert_eq!(calculate_iou(&bbox1, &bbox2), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        let bbox1 = BoundingBox::new(0, 0, 10, 10);
        let bbox2 = BoundingBox::new(5, 5, 15, 15);
        let iou = calculate_iou(&bbox1, &bbox2);

        // Intersection: 5x5 = 25
        // Union: 100 + 100 - 25 = 175
        assert!((iou - 25.0 / 175.0).abs() < 1e-12);
    }

    #[test]
    fn test_contained_box() {
        let outer = BoundingBox::new(0, 0, 20, 10);
        let inner = BoundingBox::new(0, 0, 19, 10);
        assert_eq!(calculate_iou(&outer, &inner), 0.95);
    }

    #[test]
    fn test_degenerate_boxes() {
        let point = BoundingBox::new(5, 5, 5, 5);
        assert_eq!(calculate_iou(&point, &point), 0.0);
    }

    #[test]
    fn test_inverted_box_area_enters_union() {
        // Areas 100 and -100 with no intersection give a zero union.
        let bbox1 = BoundingBox::new(0, 0, 10, 10);
        let inverted = BoundingBox::new(30, 20, 20, 30);
        assert_eq!(calculate_iou(&bbox1, &inverted), 0.0);
    }
}
