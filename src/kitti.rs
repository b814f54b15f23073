//! KITTI label rows
//!
//! One text file per image, one object per row, 15 whitespace-separated
//! fields: type, truncated, occluded, alpha, four bbox pixel coordinates
//! (left, top, right, bottom), three dimensions (height, width, length in
//! meters), three location coordinates (x, y, z in meters) and rotation_y.

use std::fmt;

use crate::types::Annotation;

// Field count of a label row; result files may append a 16th score column,
// which is ignored on read
pub const KITTI_FIELDS: usize = 15;

/// One KITTI label row.
///
/// Fields are kept as the raw tokens they were read as (or formatted to),
/// so converting a row into another format reproduces the source text
/// verbatim. Nothing here checks that a token is numeric or in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KittiRecord {
    pub kind: String,
    pub truncated: String,
    pub occluded: String,
    pub alpha: String,
    pub bbox_left: String,
    pub bbox_top: String,
    pub bbox_right: String,
    pub bbox_bottom: String,
    pub dim_height: String,
    pub dim_width: String,
    pub dim_length: String,
    pub loc_x: String,
    pub loc_y: String,
    pub loc_z: String,
    pub rotation_y: String,
}

impl KittiRecord {
    /// Parse one label row.
    ///
    /// Splits on any whitespace; fewer than 15 tokens is an error, tokens
    /// past the 15th (the optional score column) are ignored.
    pub fn parse(line: &str) -> Result<Self, String> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < KITTI_FIELDS {
            return Err(format!(
                "expected {} fields in KITTI row, got {}",
                KITTI_FIELDS,
                tokens.len()
            ));
        }

        Ok(Self {
            kind: tokens[0].to_string(),
            truncated: tokens[1].to_string(),
            occluded: tokens[2].to_string(),
            alpha: tokens[3].to_string(),
            bbox_left: tokens[4].to_string(),
            bbox_top: tokens[5].to_string(),
            bbox_right: tokens[6].to_string(),
            bbox_bottom: tokens[7].to_string(),
            dim_height: tokens[8].to_string(),
            dim_width: tokens[9].to_string(),
            dim_length: tokens[10].to_string(),
            loc_x: tokens[11].to_string(),
            loc_y: tokens[12].to_string(),
            loc_z: tokens[13].to_string(),
            rotation_y: tokens[14].to_string(),
        })
    }
}

impl fmt::Display for KittiRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {} {} {} {} {} {} {} {}",
            self.kind,
            self.truncated,
            self.occluded,
            self.alpha,
            self.bbox_left,
            self.bbox_top,
            self.bbox_right,
            self.bbox_bottom,
            self.dim_height,
            self.dim_width,
            self.dim_length,
            self.loc_x,
            self.loc_y,
            self.loc_z,
            self.rotation_y,
        )
    }
}

impl From<&Annotation> for KittiRecord {
    /// Format a typed annotation into row tokens. Whitespace inside the
    /// category name would shift every later field by one token, so it is
    /// stripped.
    fn from(annotation: &Annotation) -> Self {
        let kind: String = annotation
            .category
            .split_whitespace()
            .collect::<Vec<_>>()
            .concat();

        Self {
            kind,
            truncated: annotation.truncated.to_string(),
            occluded: annotation.occluded.to_string(),
            alpha: annotation.alpha.to_string(),
            bbox_left: annotation.bbox.left.to_string(),
            bbox_top: annotation.bbox.top.to_string(),
            bbox_right: annotation.bbox.right.to_string(),
            bbox_bottom: annotation.bbox.bottom.to_string(),
            dim_height: annotation.dimensions[0].to_string(),
            dim_width: annotation.dimensions[1].to_string(),
            dim_length: annotation.dimensions[2].to_string(),
            loc_x: annotation.location[0].to_string(),
            loc_y: annotation.location[1].to_string(),
            loc_z: annotation.location[2].to_string(),
            rotation_y: annotation.rotation_y.to_string(),
        }
    }
}
