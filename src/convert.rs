use clap::Parser;

use log::{error, info};
use std::fs;
use std::path::PathBuf;

use coco2voc::{extract_dataset, KittiToVocConverter, LabelConverter, PipelineArgs};

fn run(args: &PipelineArgs) -> Result<(), Box<dyn std::error::Error>> {
    let work_dir: PathBuf = args
        .work_dir
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("labels"));

    info!("Extracting KITTI labels to {}...", work_dir.display());
    extract_dataset(&args.ann_file, &args.classes, &work_dir)?;

    // Idempotent: an existing output directory is reused as-is
    fs::create_dir_all(&args.out_dir)
        .map_err(|e| format!("failed to create {}: {}", args.out_dir.display(), e))?;

    info!("Converting KITTI labels to VOC in {}...", args.out_dir.display());
    let converter = KittiToVocConverter::new(&args.image_dir, &work_dir, &args.out_dir)?
        .with_image_ext(&args.image_ext);
    converter.convert_dataset()?;
    Ok(())
}

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = PipelineArgs::parse();

    if !args.image_dir.is_dir() {
        error!(
            "The specified image directory does not exist: {}",
            args.image_dir.display()
        );
        std::process::exit(1);
    }
    if !args.ann_file.is_file() {
        error!(
            "The specified annotation file does not exist: {}",
            args.ann_file.display()
        );
        std::process::exit(1);
    }

    info!("Starting COCO to VOC pipeline...");

    if let Err(e) = run(&args) {
        error!("Pipeline failed: {}", e);
        std::process::exit(1);
    }
    info!("Pipeline completed successfully.");
}
