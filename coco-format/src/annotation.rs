use crate::common::*;

/// A keypoint annotation of one image.
///
/// `keypoints` is the flattened `[x0, y0, v0, x1, y1, v1, ...]` sequence.
/// The visibility code `v` is 0 for unlabeled joints, 1 for labeled but
/// occluded joints, and 2 for labeled and visible joints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: usize,
    pub image_id: usize,
    pub category_id: usize,
    pub keypoints: Vec<f64>,
    pub num_keypoints: usize,
    pub bbox: [f64; 4],
    pub area: f64,
    pub iscrowd: usize,
    pub segmentation: Vec<Vec<f64>>,
}
