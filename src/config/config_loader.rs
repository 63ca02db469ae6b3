use config::{Config, ConfigError, File, FileFormat};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Deserializes a config file, choosing the format by extension.
    ///
    /// `$VAR` references resolve against the environment before parsing,
    /// so secrets such as the API key can stay out of the file. Literal
    /// dollar signs must be escaped as `\$`.
    pub fn load<T: DeserializeOwned>(file_path: &Path) -> Result<T, ConfigError> {
        let file_format = match file_path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => FileFormat::Yaml,
            Some("json") => FileFormat::Json,
            Some("toml") => FileFormat::Toml,
            _ => {
                return Err(ConfigError::NotFound(format!(
                    "File format not supported. File needs to end with .yaml, .yml, .json or .toml. {file_path:?}"
                )));
            }
        };

        let raw = fs::read_to_string(file_path)
            .map_err(|err| ConfigError::Message(format!("Could not read {file_path:?}: {err}")))?;
        let expanded = shellexpand::env(&raw)
            .map_err(|err| ConfigError::Message(format!("Environment expansion failed: {err}")))?;

        let config = Config::builder()
            .add_source(File::from_str(&expanded, file_format))
            .build()?;
        config.try_deserialize()
    }
}
