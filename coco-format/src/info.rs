use crate::common::*;

/// The descriptive header of an annotation document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    pub description: String,
    pub url: String,
    pub version: String,
    pub year: i32,
    pub contributor: String,
    pub date_created: String,
}

/// A license entry, referenced by images through its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub id: usize,
    pub name: String,
    pub url: String,
}
