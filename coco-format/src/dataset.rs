use crate::{common::*, Annotation, Category, Image, Info, License};

/// A complete annotation document.
///
/// Field order is the top-level key order of the serialized file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub info: Info,
    pub licenses: Vec<License>,
    pub images: Vec<Image>,
    pub annotations: Vec<Annotation>,
    pub categories: Vec<Category>,
}

impl Dataset {
    /// Serializes the document with 2-space indentation.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the serialized document to `path`.
    pub fn save<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let json = self.to_pretty_json()?;
        fs::write(path, json)
            .with_context(|| format!("failed to create output file '{}'", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_dataset() -> Dataset {
        Dataset {
            info: Info {
                description: "test".to_owned(),
                url: "http://example.com".to_owned(),
                version: "1.0".to_owned(),
                year: 2015,
                contributor: "tester".to_owned(),
                date_created: "2015/01/01".to_owned(),
            },
            licenses: vec![],
            images: vec![Image {
                id: 1,
                file_name: "im0001.png".to_owned(),
                width: 100,
                height: 80,
                license: 0,
                flickr_url: String::new(),
                coco_url: String::new(),
                date_captured: String::new(),
            }],
            annotations: vec![Annotation {
                id: 1,
                image_id: 1,
                category_id: 1,
                keypoints: vec![10.0, 20.0, 2.0],
                num_keypoints: 1,
                bbox: [9.0, 18.0, 12.0, 24.0],
                area: 288.0,
                iscrowd: 0,
                segmentation: vec![],
            }],
            categories: vec![Category {
                supercategory: "person".to_owned(),
                id: 1,
                name: "person".to_owned(),
                keypoints: vec!["neck".to_owned()],
                skeleton: vec![[0, 1]],
            }],
        }
    }

    #[test]
    fn top_level_key_order() {
        let json = sample_dataset().to_pretty_json().unwrap();
        let positions: Vec<_> = [
            "\"info\"",
            "\"licenses\"",
            "\"images\"",
            "\"annotations\"",
            "\"categories\"",
        ]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn indents_with_two_spaces() {
        let json = sample_dataset().to_pretty_json().unwrap();
        let second_line = json.lines().nth(1).unwrap();
        assert!(second_line.starts_with("  \""));
        assert!(!second_line.starts_with("   "));
    }

    #[test]
    fn save_writes_the_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("annotations.json");

        let dataset = sample_dataset();
        dataset.save(&path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, dataset.to_pretty_json().unwrap());
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("annotations.json");
        assert!(sample_dataset().save(&path).is_err());
    }
}
