use crate::common::*;
use coco_format::Category;

/// Category id assigned to every annotation.
pub const PERSON_CATEGORY_ID: usize = 1;

/// The person category with the LSP joint order and skeleton graph.
pub static PERSON_CATEGORY: Lazy<Category> = Lazy::new(|| Category {
    supercategory: "person".to_owned(),
    id: PERSON_CATEGORY_ID,
    name: "person".to_owned(),
    keypoints: [
        "right_ankle",
        "right_knee",
        "right_hip",
        "left_hip",
        "left_knee",
        "left_ankle",
        "right_wrist",
        "right_elbow",
        "right_shoulder",
        "left_shoulder",
        "left_elbow",
        "left_wrist",
        "neck",
        "head_top",
    ]
    .map(|name| name.to_owned())
    .to_vec(),
    skeleton: vec![
        // legs
        [0, 1],
        [1, 2],
        [3, 4],
        [4, 5],
        // arms
        [6, 7],
        [7, 8],
        [9, 10],
        [10, 11],
        // torso and head
        [2, 3],
        [8, 9],
        [8, 12],
        [9, 12],
        [12, 13],
    ],
});
