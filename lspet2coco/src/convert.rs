use crate::{
    category::{PERSON_CATEGORY, PERSON_CATEGORY_ID},
    common::*,
    joints::{JointMatrix, JointSample, NUM_JOINTS},
};
use chrono::Local;
use coco_format::{Annotation, Dataset, Image, Info};

/// Ratio of the raw bounding box span added as padding on each side.
pub const BBOX_PADDING_RATIO: f64 = 0.1;

/// Visibility code of a labeled and visible keypoint.
const VISIBILITY_VISIBLE: f64 = 2.0;
/// Visibility code of an unlabeled keypoint.
const VISIBILITY_NOT_LABELED: f64 = 0.0;

/// Builds the output document from the joint matrix and the enumerated
/// image files.
///
/// Image files align with samples by position in the sorted list. Samples
/// beyond the number of available images are dropped with a warning.
pub fn convert(joints: &JointMatrix, image_files: &[PathBuf]) -> Result<Dataset> {
    let num_samples = joints.num_samples();
    let num_records = num_samples.min(image_files.len());
    let mut images = Vec::with_capacity(num_records);
    let mut annotations = Vec::with_capacity(num_records);

    for index in 0..num_samples {
        let image_file = match image_files.get(index) {
            Some(path) => path,
            None => {
                warn!(
                    "more annotations than images, stopping at sample {} of {}",
                    index, num_samples
                );
                break;
            }
        };

        let imagesize::ImageSize { width, height } = imagesize::size(image_file)
            .with_context(|| format!("failed to read image size of '{}'", image_file.display()))?;
        let file_name = image_file
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| format_err!("invalid image file name '{}'", image_file.display()))?
            .to_owned();

        let image_id = index + 1;
        let sample = joints.sample(index);
        let (keypoints, num_keypoints) = flatten_keypoints(&sample);
        let (bbox, area) = bounding_box(&sample, width as f64, height as f64);

        images.push(Image {
            id: image_id,
            file_name,
            width,
            height,
            license: 0,
            flickr_url: String::new(),
            coco_url: String::new(),
            date_captured: String::new(),
        });
        annotations.push(Annotation {
            id: image_id,
            image_id,
            category_id: PERSON_CATEGORY_ID,
            keypoints,
            num_keypoints,
            bbox,
            area,
            iscrowd: 0,
            segmentation: vec![],
        });
    }

    Ok(Dataset {
        info: dataset_info(),
        licenses: vec![],
        images,
        annotations,
        categories: vec![PERSON_CATEGORY.clone()],
    })
}

/// Flattens a sample into the `[x, y, v]` keypoint sequence and counts the
/// labeled keypoints.
fn flatten_keypoints(sample: &JointSample) -> (Vec<f64>, usize) {
    let mut keypoints = Vec::with_capacity(NUM_JOINTS * 3);
    let mut num_labeled = 0;

    for joint in &sample.joints {
        // The source visibility flag is binary, so code 1 (labeled but not
        // visible) never occurs in the output.
        let code = if joint.visible {
            VISIBILITY_VISIBLE
        } else {
            VISIBILITY_NOT_LABELED
        };
        keypoints.extend([joint.x, joint.y, code]);
        if code > 0.0 {
            num_labeled += 1;
        }
    }

    (keypoints, num_labeled)
}

/// Derives the padded bounding box of the visibly labeled joints, clamped to
/// the image extent.
///
/// The visible set is selected on the raw visibility flag, not on the output
/// visibility code.
fn bounding_box(sample: &JointSample, image_width: f64, image_height: f64) -> ([f64; 4], f64) {
    let visible: Vec<_> = sample.joints.iter().filter(|joint| joint.visible).collect();
    if visible.is_empty() {
        return ([0.0, 0.0, 0.0, 0.0], 0.0);
    }

    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for joint in visible {
        x_min = x_min.min(joint.x);
        x_max = x_max.max(joint.x);
        y_min = y_min.min(joint.y);
        y_max = y_max.max(joint.y);
    }

    let raw_width = x_max - x_min;
    let raw_height = y_max - y_min;
    let x_min = (x_min - raw_width * BBOX_PADDING_RATIO).max(0.0);
    let y_min = (y_min - raw_height * BBOX_PADDING_RATIO).max(0.0);
    let width = (raw_width * (1.0 + 2.0 * BBOX_PADDING_RATIO)).min(image_width - x_min);
    let height = (raw_height * (1.0 + 2.0 * BBOX_PADDING_RATIO)).min(image_height - y_min);

    ([x_min, y_min, width, height], width * height)
}

/// The fixed document header.
fn dataset_info() -> Info {
    Info {
        description: "HR-LSPET Dataset in COCO Format".to_owned(),
        url: "https://sam.johnson.io/research/lspet.html".to_owned(),
        version: "1.0".to_owned(),
        year: 2015,
        contributor: "Leonid Pishchulin, Mykhaylo Andriluka, Bernt Schiele".to_owned(),
        date_created: Local::now().format("%Y/%m/%d").to_string(),
    }
}
