//! KITTI to Pascal VOC conversion
//!
//! The converter owns nothing but fixed run configuration: the three
//! directories, the image extension, the database name and one timestamp
//! captured at construction. Everything else lives for a single label
//! file's conversion.

use chrono::Local;
use log::info;
use std::error::Error;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::dataset::validate_dataset;
use crate::kitti::KittiRecord;
use crate::utils::{create_progress_bar, read_image_size};
use crate::voc::{
    to_xml, VocAnnotation, VocBndBox, VocConversion, VocDimensions, VocLocation, VocObject,
    VocSize, VocSource,
};

/// A whole-dataset label converter targeting Pascal VOC.
///
/// `convert_dataset` validates and walks the source folder, calling
/// `init_header` once per label file and `convert_record` once per source
/// record.
pub trait LabelConverter {
    type Record;

    /// Convert every label file in the source folder. Returns how many
    /// files were written.
    fn convert_dataset(&self) -> Result<usize, Box<dyn Error>>;

    /// Build the per-file document header: everything that does not depend
    /// on individual records.
    fn init_header(&self, image_file: &str) -> Result<VocAnnotation, Box<dyn Error>>;

    /// Turn one source record into a VOC `<object>` element.
    fn convert_record(&self, record: &Self::Record) -> VocObject;
}

#[derive(Debug)]
pub struct KittiToVocConverter {
    image_dir: PathBuf,
    label_dir: PathBuf,
    output_dir: PathBuf,
    image_ext: String,
    database: String,
    created: String,
}

impl KittiToVocConverter {
    /// Build a converter over three existing directories.
    ///
    /// None of them is ever created here; a missing directory is a
    /// configuration error, not something to paper over.
    pub fn new(
        image_dir: &Path,
        label_dir: &Path,
        output_dir: &Path,
    ) -> Result<Self, Box<dyn Error>> {
        for (dir, what) in [
            (image_dir, "image"),
            (label_dir, "source label"),
            (output_dir, "output label"),
        ] {
            if !dir.is_dir() {
                return Err(format!("{} folder {} does not exist", what, dir.display()).into());
            }
        }

        Ok(Self {
            image_dir: image_dir.to_path_buf(),
            label_dir: label_dir.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            image_ext: "jpg".to_string(),
            database: "KITTI".to_string(),
            created: Local::now().to_rfc3339(),
        })
    }

    /// Image file extension used to resolve the image belonging to a label
    /// file. Fixed per run, never sniffed from the dataset.
    pub fn with_image_ext(mut self, ext: &str) -> Self {
        self.image_ext = ext.trim_start_matches('.').to_string();
        self
    }

    /// Dataset name written into the `<source>` block.
    pub fn with_database(mut self, database: &str) -> Self {
        self.database = database.to_string();
        self
    }

    /// Convert one label file into one VOC XML file.
    pub fn convert_label_file(&self, label_file: &Path) -> Result<(), Box<dyn Error>> {
        let Some(stem) = label_file.file_stem() else {
            return Err(format!("label file {} has no stem", label_file.display()).into());
        };
        let image_file = format!("{}.{}", stem.to_string_lossy(), self.image_ext);

        let mut document = self.init_header(&image_file)?;

        let label_path = self.label_dir.join(label_file);
        let content = fs::read_to_string(&label_path)
            .map_err(|e| format!("failed to read label file {}: {}", label_path.display(), e))?;
        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let record = KittiRecord::parse(line)
                .map_err(|e| format!("{}: {}", label_path.display(), e))?;
            document.objects.push(self.convert_record(&record));
        }

        let output_path = self.output_dir.join(Path::new(stem).with_extension("xml"));
        let xml = to_xml(&document)?;
        let mut writer = BufWriter::new(File::create(&output_path).map_err(|e| {
            format!("failed to create {}: {}", output_path.display(), e)
        })?);
        writer.write_all(xml.as_bytes())?;
        Ok(())
    }
}

impl LabelConverter for KittiToVocConverter {
    type Record = KittiRecord;

    fn convert_dataset(&self) -> Result<usize, Box<dyn Error>> {
        let label_files = validate_dataset(&self.image_dir, &self.label_dir)?;

        let pb = create_progress_bar(label_files.len() as u64, "Convert");
        for label_file in &label_files {
            self.convert_label_file(label_file)?;
            pb.inc(1);
        }
        pb.finish_with_message("Conversion complete");

        info!("Finished converting {} labels", label_files.len());
        Ok(label_files.len())
    }

    fn init_header(&self, image_file: &str) -> Result<VocAnnotation, Box<dyn Error>> {
        let size = read_image_size(&self.image_dir.join(image_file))?;

        Ok(VocAnnotation {
            folder: self.image_dir.display().to_string(),
            filename: image_file.to_string(),
            source: VocSource {
                database: self.database.clone(),
                annotation: self.database.clone(),
            },
            conversion: VocConversion {
                created: self.created.clone(),
                updated: self.created.clone(),
            },
            size: VocSize {
                width: size.width,
                height: size.height,
                depth: size.depth,
            },
            objects: Vec::new(),
        })
    }

    fn convert_record(&self, record: &KittiRecord) -> VocObject {
        VocObject {
            name: record.kind.to_lowercase(),
            truncated: record.truncated.clone(),
            occluded: record.occluded.clone(),
            alpha: record.alpha.clone(),
            bndbox: VocBndBox {
                xmin: record.bbox_left.clone(),
                ymin: record.bbox_top.clone(),
                xmax: record.bbox_right.clone(),
                ymax: record.bbox_bottom.clone(),
            },
            dimensions: VocDimensions {
                height: record.dim_height.clone(),
                width: record.dim_width.clone(),
                length: record.dim_length.clone(),
            },
            location: VocLocation {
                x: record.loc_x.clone(),
                y: record.loc_y.clone(),
                z: record.loc_z.clone(),
            },
            rotation_y: record.rotation_y.clone(),
        }
    }
}
