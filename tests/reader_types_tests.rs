//! Tests for the annotation reader and core types.

use std::fs;

use tempfile::TempDir;
use voc_eval::reader::{parse_annotation_file, parse_annotation_str};
use voc_eval::types::{BoundingBox, ClassMatch, Detection};

const VOC_RECORD: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<annotation>
    <folder>VOC2007</folder>
    <filename>000005.jpg</filename>
    <source>
        <database>The VOC2007 Database</database>
    </source>
    <size>
        <width>500</width>
        <height>375</height>
        <depth>3</depth>
    </size>
    <segmented>0</segmented>
    <object>
        <name>chair</name>
        <pose>Rear</pose>
        <truncated>0</truncated>
        <difficult>0</difficult>
        <bndbox>
            <xmin>263</xmin>
            <ymin>211</ymin>
            <xmax>324</xmax>
            <ymax>339</ymax>
        </bndbox>
    </object>
    <object>
        <name>chair</name>
        <pose>Unspecified</pose>
        <truncated>0</truncated>
        <difficult>1</difficult>
        <bndbox>
            <xmin>165</xmin>
            <ymin>264</ymin>
            <xmax>253</xmax>
            <ymax>372</ymax>
        </bndbox>
    </object>
    <object>
        <name>dining table</name>
        <bndbox>
            <xmin>5</xmin>
            <ymin>244</ymin>
            <xmax>67</xmax>
            <ymax>374</ymax>
        </bndbox>
    </object>
</annotation>
"#;

#[test]
fn test_parse_full_voc_record() {
    let detections = parse_annotation_str(VOC_RECORD).unwrap();

    assert_eq!(
        detections,
        vec![
            Detection::new("chair", BoundingBox::new(263, 211, 324, 339)),
            Detection::new("chair", BoundingBox::new(165, 264, 253, 372)),
            Detection::new("dining table", BoundingBox::new(5, 244, 67, 374)),
        ]
    );
}

#[test]
fn test_parse_file() {
    let work = TempDir::new().unwrap();
    let path = work.path().join("000005.xml");
    fs::write(&path, VOC_RECORD).unwrap();

    let detections = parse_annotation_file(&path).unwrap();
    assert_eq!(detections.len(), 3);
    assert_eq!(detections[2].class, "dining table");
}

#[test]
fn test_parse_directory_instead_of_file() {
    let work = TempDir::new().unwrap();
    let err = parse_annotation_file(work.path()).unwrap_err();
    assert!(err.is_parse_error());
}

#[test]
fn test_bndbox_missing_entirely() {
    let xml = "<annotation><object><name>car</name></object></annotation>";
    assert!(parse_annotation_str(xml).unwrap_err().is_parse_error());
}

#[test]
fn test_empty_coordinate() {
    let xml = "<annotation><object><name>car</name><bndbox>\
               <xmin></xmin><ymin>0</ymin><xmax>1</xmax><ymax>1</ymax>\
               </bndbox></object></annotation>";
    let err = parse_annotation_str(xml).unwrap_err();
    assert!(err.is_parse_error());
}

#[test]
fn test_bounding_box_area() {
    assert_eq!(BoundingBox::new(0, 0, 10, 5).area(), 50);
    assert_eq!(BoundingBox::new(3, 3, 3, 9).area(), 0);
}

#[test]
fn test_bounding_box_validity() {
    assert!(BoundingBox::new(0, 0, 1, 1).is_valid());
    assert!(!BoundingBox::new(0, 0, 0, 1).is_valid());
    assert!(!BoundingBox::new(5, 0, 1, 1).is_valid());
}

#[test]
fn test_class_match_prediction_count() {
    let outcome = ClassMatch {
        true_positives: 2,
        false_positives: 3,
        false_negatives: 1,
        matched_gt: vec![Some(0), None, Some(2), None, None],
    };
    assert_eq!(outcome.num_predictions(), 5);
}
