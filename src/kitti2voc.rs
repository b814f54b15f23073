use clap::Parser;

use log::{error, info};

use coco2voc::{ConvertArgs, KittiToVocConverter, LabelConverter};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = ConvertArgs::parse();

    info!("Starting KITTI to VOC conversion...");

    let converter = match KittiToVocConverter::new(&args.image_dir, &args.label_dir, &args.output_dir)
    {
        Ok(converter) => converter
            .with_image_ext(&args.image_ext)
            .with_database(&args.database),
        Err(e) => {
            error!("Failed to set up converter: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = converter.convert_dataset() {
        error!("Failed to convert dataset: {}", e);
        std::process::exit(1);
    }
    info!("Conversion process completed successfully.");
}
