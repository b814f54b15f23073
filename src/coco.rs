//! COCO format data structures
//!
//! The subset of the COCO object-detection schema the extractor needs:
//! images, annotations with `bbox` as `[x, y, width, height]`, and
//! categories.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// COCO image entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CocoImage {
    pub id: u32,
    pub file_name: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

/// COCO annotation entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CocoAnnotation {
    pub id: u32,
    pub image_id: u32,
    pub category_id: u32,
    /// [x, y, width, height] in absolute pixels
    pub bbox: [f64; 4],
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub iscrowd: u32,
}

/// COCO category entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CocoCategory {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub supercategory: String,
}

/// A whole COCO annotation file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CocoDataset {
    #[serde(default)]
    pub images: Vec<CocoImage>,
    #[serde(default)]
    pub annotations: Vec<CocoAnnotation>,
    #[serde(default)]
    pub categories: Vec<CocoCategory>,
}

impl CocoDataset {
    /// Category-id to name lookup.
    pub fn category_index(&self) -> HashMap<u32, &str> {
        self.categories
            .iter()
            .map(|category| (category.id, category.name.as_str()))
            .collect()
    }
}

/// Read and parse a COCO annotation file from a buffered stream.
pub fn read_coco_file(path: &Path) -> Result<CocoDataset, Box<dyn std::error::Error>> {
    let file = File::open(path)
        .map_err(|e| format!("failed to open COCO file {}: {}", path.display(), e))?;
    let dataset = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("failed to parse COCO file {}: {}", path.display(), e))?;
    Ok(dataset)
}
