use clap::Parser;

use log::{error, info};

use coco2voc::{extract_dataset, ExtractArgs};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = ExtractArgs::parse();

    if !args.ann_file.is_file() {
        error!(
            "The specified annotation file does not exist: {}",
            args.ann_file.display()
        );
        std::process::exit(1);
    }

    info!("Starting COCO to KITTI extraction...");

    match extract_dataset(&args.ann_file, &args.classes, &args.label_dir) {
        Ok(written) => info!("Extraction complete, {} label files written.", written),
        Err(e) => {
            error!("Failed to extract dataset: {}", e);
            std::process::exit(1);
        }
    }
}
