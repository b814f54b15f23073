//! Pascal VOC label documents
//!
//! One XML file per image, root `<annotation>`, one `<object>` element per
//! labeled object. The document carries two blocks the canonical VOC schema
//! does not have: `<source>` (originating database) and `<conversion>`
//! (timestamps of the run that produced the file).
//!
//! Object fields are strings, not numbers: the converter copies source
//! tokens through verbatim.

use serde::Serialize;

/// Root element of one VOC label file.
#[derive(Debug, Clone, Serialize)]
pub struct VocAnnotation {
    pub folder: String,
    pub filename: String,
    pub source: VocSource,
    pub conversion: VocConversion,
    pub size: VocSize,
    #[serde(rename = "object")]
    pub objects: Vec<VocObject>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VocSource {
    pub database: String,
    pub annotation: String,
}

// Both stamps carry the single timestamp captured when the converter was
// built, so every file of one run agrees
#[derive(Debug, Clone, Serialize)]
pub struct VocConversion {
    pub created: String,
    pub updated: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VocSize {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

/// One `<object>` element.
#[derive(Debug, Clone, Serialize)]
pub struct VocObject {
    pub name: String,
    pub truncated: String,
    pub occluded: String,
    pub alpha: String,
    pub bndbox: VocBndBox,
    pub dimensions: VocDimensions,
    pub location: VocLocation,
    pub rotation_y: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VocBndBox {
    pub xmin: String,
    pub ymin: String,
    pub xmax: String,
    pub ymax: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VocDimensions {
    pub height: String,
    pub width: String,
    pub length: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VocLocation {
    pub x: String,
    pub y: String,
    pub z: String,
}

/// Serialize a label document to XML text.
///
/// No XML declaration and no indentation; reserved characters in category
/// names are escaped by the writer.
pub fn to_xml(annotation: &VocAnnotation) -> Result<String, Box<dyn std::error::Error>> {
    let xml = quick_xml::se::to_string_with_root("annotation", annotation)?;
    Ok(xml)
}
