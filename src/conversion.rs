//! COCO to KITTI extraction
//!
//! Reads one COCO annotation file and emits one KITTI label file per image
//! that has at least one annotation matching the category filter. COCO only
//! carries a category and a 2D box, so every other KITTI field is written
//! as a literal zero.

use log::info;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::coco::{read_coco_file, CocoAnnotation};
use crate::kitti::KittiRecord;
use crate::types::{Annotation, BoundingBox};
use crate::utils::create_output_directory;

/// Label file name for a COCO image entry: the file name's stem plus
/// `.txt`. Directory components some COCO exports carry are dropped, the
/// KITTI layout is flat.
pub fn kitti_label_name(file_name: &str) -> Option<PathBuf> {
    Path::new(file_name)
        .file_name()
        .map(|name| Path::new(name).with_extension("txt"))
}

/// Lift one COCO annotation into the format-agnostic record.
pub fn annotation_from_coco(coco: &CocoAnnotation, category: &str) -> Annotation {
    Annotation {
        category: category.to_string(),
        bbox: BoundingBox::from_xywh(coco.bbox),
        ..Annotation::default()
    }
}

/// Convert a COCO annotation file into a directory of KITTI label files.
///
/// `categories` filters by category name; an empty slice keeps everything.
/// An image whose annotations all fall outside the filter gets no label
/// file. The output directory is cleared and recreated first so label
/// files from a previous run never leak into this one.
///
/// Returns the number of label files written.
pub fn extract_dataset(
    ann_file: &Path,
    categories: &[String],
    label_dir: &Path,
) -> Result<usize, Box<dyn std::error::Error>> {
    let dataset = read_coco_file(ann_file)?;
    let category_names = dataset.category_index();

    let filter: Option<HashSet<&str>> = if categories.is_empty() {
        None
    } else {
        Some(categories.iter().map(String::as_str).collect())
    };

    let mut by_image: HashMap<u32, Vec<&CocoAnnotation>> = HashMap::new();
    for annotation in &dataset.annotations {
        // Annotations pointing at an unknown category carry no usable name
        let Some(name) = category_names.get(&annotation.category_id) else {
            continue;
        };
        if let Some(keep) = &filter {
            if !keep.contains(name) {
                continue;
            }
        }
        by_image.entry(annotation.image_id).or_default().push(annotation);
    }

    create_output_directory(label_dir)?;

    let mut written = 0;
    for image in &dataset.images {
        let Some(annotations) = by_image.get(&image.id) else {
            continue;
        };
        let Some(label_name) = kitti_label_name(&image.file_name) else {
            return Err(format!(
                "COCO image {} has no usable file name: {:?}",
                image.id, image.file_name
            )
            .into());
        };

        let label_path = label_dir.join(label_name);
        let mut writer = BufWriter::new(File::create(&label_path).map_err(|e| {
            format!("failed to create label file {}: {}", label_path.display(), e)
        })?);
        for annotation in annotations {
            let name = category_names[&annotation.category_id];
            let record = KittiRecord::from(&annotation_from_coco(annotation, name));
            writeln!(writer, "{}", record)?;
        }
        written += 1;
    }

    info!(
        "Wrote {} KITTI label files to {}",
        written,
        label_dir.display()
    );
    Ok(written)
}
