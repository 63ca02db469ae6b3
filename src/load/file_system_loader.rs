use crate::load::error::LoadError;
use crate::load::traits::Loadable;
use crate::transform::HarvestExport;
use log::debug;
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::fs::File;
use std::path::PathBuf;

/// A loader that writes one harvest's exports into a local directory:
/// the tag and element-text frames as CSV, the per-item date maps (and
/// the field categories, when configured) as pretty-printed JSON.
#[derive(Debug, Deserialize)]
pub struct FileSystemLoader {
    /// The output directory the export files land in.
    out_path: PathBuf,
    /// If true the full out path is created on demand.
    create_dir: bool,
}

impl FileSystemLoader {
    pub fn new(out_path: PathBuf, create_dir: bool) -> Self {
        Self {
            out_path,
            create_dir,
        }
    }

    fn create(&self, name: &str) -> Result<File, LoadError> {
        let path = self.out_path.join(name);
        debug!("Storing file to: {path:?}");
        File::create(&path).map_err(|err| LoadError::CantStore {
            name: name.to_string(),
            reason: err.to_string(),
        })
    }

    fn write_csv(&self, name: &str, frame: &DataFrame) -> Result<(), LoadError> {
        let mut file = self.create(name)?;
        CsvWriter::new(&mut file)
            .finish(&mut frame.clone())
            .map_err(|err| LoadError::CantStore {
                name: name.to_string(),
                reason: err.to_string(),
            })
    }

    fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<(), LoadError> {
        let file = self.create(name)?;
        serde_json::to_writer_pretty(file, value).map_err(|err| LoadError::CantStore {
            name: name.to_string(),
            reason: err.to_string(),
        })
    }
}

impl Loadable for FileSystemLoader {
    fn load(&self, export: &HarvestExport) -> Result<(), LoadError> {
        if self.create_dir {
            fs::create_dir_all(self.out_path.as_path()).map_err(|err| LoadError::NoStorage {
                reason: err.to_string(),
            })?;
        }

        self.write_csv("tags.csv", &export.tags)?;
        self.write_csv("element_texts.csv", &export.element_texts)?;
        self.write_json("dates.json", &export.dates)?;
        if let Some(field_categories) = &export.field_categories {
            self.write_json("field_categories.json", field_categories)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::Value;
    use std::collections::BTreeMap;
    use std::fs;
    use tempfile::tempdir;

    fn sample_export() -> HarvestExport {
        HarvestExport {
            tags: df! {
                "id" => [12i64],
                "tags__name" => ["letters"],
            }
            .unwrap(),
            element_texts: df! {
                "id" => [12i64],
                "text" => ["circa 1945"],
            }
            .unwrap(),
            dates: BTreeMap::from([(
                12,
                BTreeMap::from([(
                    "Date".to_string(),
                    vec!["1945-01-01T00:00:00Z".to_string()],
                )]),
            )]),
            field_categories: Some(BTreeMap::from([(
                "Date".to_string(),
                "chronology".to_string(),
            )])),
        }
    }

    #[rstest]
    fn test_loader_writes_every_export_file() {
        let tmp_dir = tempdir().unwrap();
        let out_path = tmp_dir.path().join("harvest");
        let loader = FileSystemLoader::new(out_path.clone(), true);

        loader.load(&sample_export()).expect("load should succeed");

        let tags_csv = fs::read_to_string(out_path.join("tags.csv")).unwrap();
        assert_eq!(tags_csv, "id,tags__name\n12,letters\n");

        assert!(out_path.join("element_texts.csv").exists());

        let dates: Value =
            serde_json::from_str(&fs::read_to_string(out_path.join("dates.json")).unwrap())
                .unwrap();
        assert_eq!(dates["12"]["Date"][0], "1945-01-01T00:00:00Z");

        let categories: Value = serde_json::from_str(
            &fs::read_to_string(out_path.join("field_categories.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(categories["Date"], "chronology");
    }

    #[rstest]
    fn test_loader_skips_the_categories_file_when_unconfigured() {
        let tmp_dir = tempdir().unwrap();
        let loader = FileSystemLoader::new(tmp_dir.path().to_path_buf(), false);
        let export = HarvestExport {
            field_categories: None,
            ..sample_export()
        };

        loader.load(&export).expect("load should succeed");

        assert!(!tmp_dir.path().join("field_categories.json").exists());
    }

    #[rstest]
    fn test_missing_directory_without_create_dir_is_an_error() {
        let tmp_dir = tempdir().unwrap();
        let loader = FileSystemLoader::new(tmp_dir.path().join("absent"), false);

        let err = loader.load(&sample_export()).unwrap_err();

        assert!(matches!(err, LoadError::CantStore { .. }));
    }
}
