use image::{ColorType, ImageDecoder, ImageReader};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::ImageSize;

/// Read width, height and color mode from an image header.
///
/// Only the header is decoded, not the pixel data. Anything but 8-bit RGB
/// is a hard failure: the VOC `<size>` block always states depth 3.
pub fn read_image_size(path: &Path) -> Result<ImageSize, Box<dyn std::error::Error>> {
    let reader = ImageReader::open(path)
        .map_err(|e| format!("failed to open image {}: {}", path.display(), e))?
        .with_guessed_format()
        .map_err(|e| format!("failed to probe image format of {}: {}", path.display(), e))?;
    let decoder = reader
        .into_decoder()
        .map_err(|e| format!("failed to read image header of {}: {}", path.display(), e))?;

    let (width, height) = decoder.dimensions();
    let color = decoder.color_type();
    if color != ColorType::Rgb8 {
        return Err(format!(
            "color mode for image {} is not RGB, it is {:?}",
            path.display(),
            color
        )
        .into());
    }

    Ok(ImageSize {
        width,
        height,
        depth: 3,
    })
}

/// Create a progress bar with the given length and label
pub fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
                label
            ))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}

/// Clear and recreate an output directory, returning its path.
///
/// Label files left over from a previous run would silently merge into the
/// new output, so an existing directory is removed first.
pub fn create_output_directory(path: &Path) -> std::io::Result<PathBuf> {
    if path.exists() {
        log::warn!(
            "Directory {:?} already exists. Deleting and recreating it.",
            path
        );
        fs::remove_dir_all(path).and_then(|_| fs::create_dir_all(path))?;
    } else {
        fs::create_dir_all(path)?;
    }
    Ok(path.to_path_buf())
}
