use crate::common::*;

/// An image entry.
///
/// Field order is the key order expected by downstream consumers of the
/// serialized document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: usize,
    pub file_name: String,
    pub width: usize,
    pub height: usize,
    pub license: usize,
    pub flickr_url: String,
    pub coco_url: String,
    pub date_captured: String,
}
