use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoaderConfig {
    FileSystem {
        output_dir: PathBuf,
        #[serde(default)]
        create_dir: bool,
    },
}
