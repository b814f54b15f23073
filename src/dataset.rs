//! Dataset-level consistency checks
//!
//! A KITTI-style dataset pairs every image with exactly one label file of
//! the same stem. The whole pairing is checked up front; nothing is
//! converted when any file on either side is unmatched.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// List the plain files directly inside a directory, sorted by name.
pub fn list_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(PathBuf::from(entry.file_name()));
        }
    }
    files.sort();
    Ok(files)
}

fn stem_of(file: &Path) -> String {
    file.file_stem()
        .unwrap_or_else(|| file.as_os_str())
        .to_string_lossy()
        .into_owned()
}

/// Check that image stems and label stems form the same set, with no
/// duplicate stems on the label side.
///
/// Returns the label file names, sorted, so callers convert in a
/// deterministic order.
pub fn validate_dataset(
    image_dir: &Path,
    label_dir: &Path,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let label_files = list_files(label_dir)
        .map_err(|e| format!("failed to list label folder {}: {}", label_dir.display(), e))?;
    let image_files = list_files(image_dir)
        .map_err(|e| format!("failed to list image folder {}: {}", image_dir.display(), e))?;

    let label_stems: HashSet<String> = label_files.iter().map(|f| stem_of(f)).collect();
    if label_stems.len() != label_files.len() {
        let mut seen = HashSet::new();
        let mut repeated: Vec<String> = label_files
            .iter()
            .map(|f| stem_of(f))
            .filter(|stem| !seen.insert(stem.clone()))
            .collect();
        repeated.sort();
        repeated.dedup();
        return Err(format!(
            "repeated label files in {}: {}",
            label_dir.display(),
            repeated.join(", ")
        )
        .into());
    }

    let image_stems: HashSet<String> = image_files.iter().map(|f| stem_of(f)).collect();

    let mut unlabeled: Vec<&String> = image_stems.difference(&label_stems).collect();
    unlabeled.sort();
    if !unlabeled.is_empty() {
        return Err(format!(
            "images with no label file found: {}",
            unlabeled
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
        .into());
    }

    let mut orphaned: Vec<&String> = label_stems.difference(&image_stems).collect();
    orphaned.sort();
    if !orphaned.is_empty() {
        return Err(format!(
            "labels with no image found: {}",
            orphaned
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
        .into());
    }

    Ok(label_files)
}
