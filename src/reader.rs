//! XML loading utilities for Pascal VOC annotation records.

use crate::error::{Result, VocEvalError};
use crate::types::{BoundingBox, Detection, ImageAnnotationSet};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Root element of one annotation record. Only `<object>` children are read.
#[derive(Debug, Deserialize)]
struct XmlAnnotation {
    #[serde(rename = "object", default)]
    objects: Vec<XmlObject>,
}

/// Class names are trimmed, so `<name> car </name>` and `<name>car</name>`
/// are the same class.
#[derive(Debug, Deserialize)]
struct XmlObject {
    name: String,
    bndbox: XmlBndBox,
}

/// Coordinates are kept as text so that the integer check can report the
/// offending field.
#[derive(Debug, Deserialize)]
struct XmlBndBox {
    xmin: String,
    ymin: String,
    xmax: String,
    ymax: String,
}

impl XmlBndBox {
    fn to_bbox(&self) -> std::result::Result<BoundingBox, String> {
        Ok(BoundingBox::new(
            parse_coordinate("xmin", &self.xmin)?,
            parse_coordinate("ymin", &self.ymin)?,
            parse_coordinate("xmax", &self.xmax)?,
            parse_coordinate("ymax", &self.ymax)?,
        ))
    }
}

fn parse_coordinate(field: &str, text: &str) -> std::result::Result<i64, String> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| format!("`{}` is not an integer: {:?}", field, text))
}

/// Load one annotation record from an XML file.
///
/// # Errors
///
/// Returns a `Parse` error if the file cannot be read or interpreted. An
/// unreadable file is never turned into an empty annotation set.
///
/// # Example
///
/// ```no_run
/// use voc_eval::reader::parse_annotation_file;
///
/// let detections = parse_annotation_file("annotations/000001.xml").unwrap();
/// println!("Loaded {} objects", detections.len());
/// ```
pub fn parse_annotation_file<P: AsRef<Path>>(path: P) -> Result<ImageAnnotationSet> {
    let path = path.as_ref();
    let source_name = path.display().to_string();
    let xml = fs::read_to_string(path).map_err(|e| VocEvalError::parse(&source_name, e))?;
    parse_annotation(&xml, &source_name)
}

/// Load one annotation record from an XML string.
///
/// Objects are returned in document order.
///
/// # Example
///
/// ```
/// use voc_eval::reader::parse_annotation_str;
///
/// let xml = r#"<annotation>
///     <filename>000001.jpg</filename>
///     <object>
///         <name>car</name>
///         <bndbox><xmin>0</xmin><ymin>0</ymin><xmax>10</xmax><ymax>10</ymax></bndbox>
///     </object>
/// </annotation>"#;
/// let detections = parse_annotation_str(xml).unwrap();
/// assert_eq!(detections.len(), 1);
/// assert_eq!(detections[0].class, "car");
/// ```
pub fn parse_annotation_str(xml: &str) -> Result<ImageAnnotationSet> {
    parse_annotation(xml, "<string>")
}

fn parse_annotation(xml: &str, source_name: &str) -> Result<ImageAnnotationSet> {
    let record: XmlAnnotation =
        quick_xml::de::from_str(xml).map_err(|e| VocEvalError::parse(source_name, e))?;

    record
        .objects
        .into_iter()
        .enumerate()
        .map(|(index, object)| -> Result<Detection> {
            let bbox = object.bndbox.to_bbox().map_err(|reason| {
                VocEvalError::parse(source_name, format!("object {}: {}", index, reason))
            })?;
            Ok(Detection::new(object.name.trim(), bbox))
        })
        .collect()
}
