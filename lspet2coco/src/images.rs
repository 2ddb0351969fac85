use crate::common::*;

/// File extension of the dataset images.
pub const IMAGE_EXTENSION: &str = "png";

/// Lists the image files of `dir` in ascending filename order.
///
/// The position of a file in the returned list is the sample index it is
/// paired with. A directory without matching files yields an empty list.
pub fn list_image_files<P>(dir: P) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
{
    let dir = dir.as_ref();
    let mut files: Vec<_> =
        glob::glob(&format!("{}/*.{}", dir.display(), IMAGE_EXTENSION))?.try_collect()?;
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn files_are_filtered_and_sorted() {
        let dir = TempDir::new().unwrap();
        for name in [
            "im0002.png",
            "im0001.png",
            "im0010.png",
            "notes.txt",
            "im0003.jpg",
        ] {
            fs::write(dir.path().join(name), b"").unwrap();
        }

        let files = list_image_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|path| path.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, ["im0001.png", "im0002.png", "im0010.png"]);
    }

    #[test]
    fn empty_directory_yields_no_files() {
        let dir = TempDir::new().unwrap();
        assert!(list_image_files(dir.path()).unwrap().is_empty());
    }
}
