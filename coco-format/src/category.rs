use crate::common::*;

/// A keypoint category.
///
/// `keypoints` names each joint index and `skeleton` lists the joint index
/// pairs drawn as limbs by visualization tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub supercategory: String,
    pub id: usize,
    pub name: String,
    pub keypoints: Vec<String>,
    pub skeleton: Vec<[usize; 2]>,
}
