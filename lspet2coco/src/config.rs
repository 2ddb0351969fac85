use crate::common::*;

/// Conversion job configuration.
///
/// Every field falls back to the conventional dataset layout, so an empty
/// config file and no config file at all both describe the same job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The MAT file with the joint annotation array.
    #[serde(default = "default_joints_file")]
    pub joints_file: PathBuf,
    /// The directory that contains the dataset images.
    #[serde(default = "default_image_dir")]
    pub image_dir: PathBuf,
    /// The annotation document to write.
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,
}

impl Config {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let text = fs::read_to_string(path)?;
        let config = json5::from_str(&text)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            joints_file: default_joints_file(),
            image_dir: default_image_dir(),
            output_file: default_output_file(),
        }
    }
}

fn default_joints_file() -> PathBuf {
    PathBuf::from("joints.mat")
}

fn default_image_dir() -> PathBuf {
    PathBuf::from("images")
}

fn default_output_file() -> PathBuf {
    PathBuf::from("hr_lspet_coco_keypoints.json")
}
