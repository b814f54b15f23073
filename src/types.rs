use serde::{Deserialize, Serialize};

// Axis-aligned bounding box in absolute pixel coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoundingBox {
    /// Build from a COCO-style `[x, y, width, height]` box.
    pub fn from_xywh(bbox: [f64; 4]) -> Self {
        let [x, y, w, h] = bbox;
        Self {
            left: x,
            top: y,
            right: x + w,
            bottom: y + h,
        }
    }
}

/// One annotated object, independent of the label format it came from.
///
/// Fields a source format does not carry stay at their zero defaults:
/// COCO knows nothing about truncation, occlusion or 3D geometry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub category: String,
    /// Float in [0, 1], 0 = not truncated
    pub truncated: f64,
    /// 0 = fully visible, 1 = partly occluded, 2 = largely occluded, 3 = unknown
    pub occluded: u8,
    /// Observation angle in radians, [-pi, pi]
    pub alpha: f64,
    pub bbox: BoundingBox,
    /// 3D height, width, length in meters
    pub dimensions: [f64; 3],
    /// 3D x, y, z in camera coordinates, meters
    pub location: [f64; 3],
    /// Rotation around the Y axis in radians, [-pi, pi]
    pub rotation_y: f64,
}

// Pixel dimensions of an image; depth is always 3 (8-bit RGB is enforced
// when the header is read)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}
