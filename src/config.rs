use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for extracting KITTI label files from a COCO
/// annotation file.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct ExtractArgs {
    /// Path to the COCO annotation JSON file
    pub ann_file: PathBuf,

    /// Directory the KITTI label files are written into (cleared first)
    #[arg(
        short = 'o',
        long = "label_dir",
        default_value_os_t = std::env::temp_dir().join("labels")
    )]
    pub label_dir: PathBuf,

    /// Category names to keep; empty keeps every category
    #[arg(long = "classes", use_value_delimiter = true)]
    pub classes: Vec<String>,
}

/// Command-line arguments for converting a KITTI label folder to Pascal
/// VOC XML files.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct ConvertArgs {
    /// Directory containing the dataset images
    pub image_dir: PathBuf,

    /// Directory containing the KITTI label files
    pub label_dir: PathBuf,

    /// Directory the VOC XML files are written into (must exist)
    pub output_dir: PathBuf,

    /// Image file extension used to resolve each label's image
    #[arg(long = "image_ext", default_value = "jpg")]
    pub image_ext: String,

    /// Dataset name written into the <source> block
    #[arg(long = "database", default_value = "KITTI")]
    pub database: String,
}

/// Command-line arguments for the end-to-end COCO to VOC pipeline.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct PipelineArgs {
    /// Directory containing the dataset images
    pub image_dir: PathBuf,

    /// Path to the COCO annotation JSON file
    pub ann_file: PathBuf,

    /// Directory for the intermediate KITTI label files;
    /// defaults to "labels" under the system temp directory
    #[arg(long = "work_dir")]
    pub work_dir: Option<PathBuf>,

    /// Directory the VOC XML files are written into (created if absent)
    #[arg(long = "out_dir", default_value = "VOC_labels")]
    pub out_dir: PathBuf,

    /// Category names to keep; empty keeps every category
    #[arg(long = "classes", use_value_delimiter = true)]
    pub classes: Vec<String>,

    /// Image file extension used to resolve each label's image
    #[arg(long = "image_ext", default_value = "jpg")]
    pub image_ext: String,
}
