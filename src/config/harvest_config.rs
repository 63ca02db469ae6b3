use crate::config::loader_config::LoaderConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

/// Everything needed to construct and run the harvest pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct HarvestConfig {
    #[validate(nested)]
    pub api: ApiConfig,
    pub loader: LoaderConfig,
    /// Optional YAML sidecar grouping metadata fields into categories.
    #[serde(default)]
    pub category_map: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ApiConfig {
    #[validate(url)]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn config_with_base_url(base_url: &str) -> HarvestConfig {
        HarvestConfig {
            api: ApiConfig {
                base_url: base_url.to_string(),
                api_key: None,
            },
            loader: LoaderConfig::FileSystem {
                output_dir: "out".into(),
                create_dir: true,
            },
            category_map: None,
        }
    }

    #[rstest]
    fn test_valid_base_url_passes_validation() {
        assert!(
            config_with_base_url("https://archive.example.org/api")
                .validate()
                .is_ok()
        );
    }

    #[rstest]
    fn test_non_url_base_url_fails_validation() {
        assert!(config_with_base_url("archive.example.org").validate().is_err());
    }
}
