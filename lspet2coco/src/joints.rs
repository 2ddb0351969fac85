use crate::common::*;
use ndarray::{Array3, ShapeBuilder};
use std::{fs::File, io::BufReader};

/// Number of joints annotated per pose sample.
pub const NUM_JOINTS: usize = 14;

/// Name of the pose array inside the MAT file.
pub const JOINTS_ARRAY_NAME: &str = "joints";

/// The coordinate components stored per joint: x, y and the visibility flag.
const NUM_COMPONENTS: usize = 3;

/// One annotated joint of a pose sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Joint {
    pub x: f64,
    pub y: f64,
    pub visible: bool,
}

/// The joints annotated for one image.
#[derive(Debug, Clone, PartialEq)]
pub struct JointSample {
    pub joints: [Joint; NUM_JOINTS],
}

/// Joint annotations of the whole dataset in canonical
/// (component, joint, sample) axis order.
#[derive(Debug, Clone, PartialEq)]
pub struct JointMatrix {
    array: Array3<f64>,
}

impl JointMatrix {
    /// Loads the joint array from a MAT file.
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let reader = BufReader::new(
            File::open(path)
                .with_context(|| format!("failed to open joint file '{}'", path.display()))?,
        );
        let mat_file = matfile::MatFile::parse(reader).map_err(|err| {
            format_err!("failed to parse MAT file '{}': {:?}", path.display(), err)
        })?;
        let array = mat_file.find_by_name(JOINTS_ARRAY_NAME).ok_or_else(|| {
            format_err!(
                "array '{}' not found in '{}'",
                JOINTS_ARRAY_NAME,
                path.display()
            )
        })?;

        let dims = array.size();
        ensure!(
            dims.len() == 3,
            "expected a 3-axis joint array, found shape {:?}",
            dims
        );
        let (d0, d1, d2) = (dims[0], dims[1], dims[2]);

        // MAT arrays are stored in column-major order.
        let data = numeric_to_f64(array.data());
        let array = Array3::from_shape_vec((d0, d1, d2).f(), data)
            .with_context(|| format!("joint array shape {:?} does not match its data", dims))?;

        Self::from_array(array)
    }

    /// Wraps a raw joint array, normalizing the axis order to
    /// (component, joint, sample).
    ///
    /// Some distributions of the dataset store the array with the joint and
    /// component axes swapped; that orientation is detected by its exact
    /// axis lengths and transposed back.
    pub fn from_array(array: Array3<f64>) -> Result<Self> {
        let (d0, d1, _) = array.dim();

        let array = if d0 == NUM_COMPONENTS && d1 == NUM_JOINTS {
            array
        } else if d0 == NUM_JOINTS && d1 == NUM_COMPONENTS {
            info!(
                "transposing joint array from shape {:?} to (component, joint, sample) order",
                array.shape()
            );
            array.permuted_axes([1, 0, 2])
        } else {
            bail!("unrecognized joint array shape {:?}", array.shape());
        };

        Ok(Self { array })
    }

    pub fn shape(&self) -> &[usize] {
        self.array.shape()
    }

    pub fn num_samples(&self) -> usize {
        self.array.dim().2
    }

    /// Returns the joints annotated for the sample at `index`.
    ///
    /// A joint is visible iff its raw visibility value equals 1 exactly.
    pub fn sample(&self, index: usize) -> JointSample {
        let joints = std::array::from_fn(|joint| {
            let x = self.array[[0, joint, index]];
            let y = self.array[[1, joint, index]];
            let visibility = self.array[[2, joint, index]];
            Joint {
                x,
                y,
                visible: visibility == 1.0,
            }
        });
        JointSample { joints }
    }
}

fn numeric_to_f64(data: &matfile::NumericData) -> Vec<f64> {
    use matfile::NumericData as N;

    match data {
        N::Double { real, .. } => real.clone(),
        N::Single { real, .. } => real.iter().map(|&v| v as f64).collect(),
        N::Int8 { real, .. } => real.iter().map(|&v| v as f64).collect(),
        N::UInt8 { real, .. } => real.iter().map(|&v| v as f64).collect(),
        N::Int16 { real, .. } => real.iter().map(|&v| v as f64).collect(),
        N::UInt16 { real, .. } => real.iter().map(|&v| v as f64).collect(),
        N::Int32 { real, .. } => real.iter().map(|&v| v as f64).collect(),
        N::UInt32 { real, .. } => real.iter().map(|&v| v as f64).collect(),
        N::Int64 { real, .. } => real.iter().map(|&v| v as f64).collect(),
        N::UInt64 { real, .. } => real.iter().map(|&v| v as f64).collect(),
    }
}
