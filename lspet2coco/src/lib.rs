//! HR-LSPET to COCO keypoints conversion tool.

mod common;

pub mod category;
pub mod config;
pub mod convert;
pub mod images;
pub mod joints;

use crate::{common::*, config::Config};

/// Runs the conversion described by `config`.
pub fn start(config: &Config) -> Result<()> {
    let Config {
        joints_file,
        image_dir,
        output_file,
    } = config;

    let joints = joints::JointMatrix::open(joints_file)?;
    info!("loaded joint array with shape {:?}", joints.shape());

    let image_files = images::list_image_files(image_dir)?;
    info!(
        "found {} image files in '{}'",
        image_files.len(),
        image_dir.display()
    );

    let dataset = convert::convert(&joints, &image_files)?;
    info!(
        "converted {} images and {} annotations",
        dataset.images.len(),
        dataset.annotations.len()
    );

    dataset.save(output_file)?;
    info!("saved document to '{}'", output_file.display());

    Ok(())
}
