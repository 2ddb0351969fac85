//! COCO keypoint annotation document types.

mod common;

pub use annotation::*;
pub mod annotation;

pub use category::*;
pub mod category;

pub use dataset::*;
pub mod dataset;

pub use image::*;
pub mod image;

pub use info::*;
pub mod info;
