//! COCO to KITTI to Pascal VOC label converter
//!
//! This library converts object-detection dataset annotations between three
//! label formats: a COCO JSON file is extracted into per-image KITTI text
//! label files, and a KITTI label folder is converted into per-image Pascal
//! VOC XML files.

pub mod coco;
pub mod config;
pub mod conversion;
pub mod converter;
pub mod dataset;
pub mod kitti;
pub mod types;
pub mod utils;
pub mod voc;

// Re-export commonly used types and functions
pub use config::{ConvertArgs, ExtractArgs, PipelineArgs};
pub use conversion::extract_dataset;
pub use converter::{KittiToVocConverter, LabelConverter};
pub use dataset::validate_dataset;
pub use kitti::KittiRecord;
pub use types::{Annotation, BoundingBox, ImageSize};

// COCO schema exports
pub use coco::{read_coco_file, CocoDataset};
