use crate::config::config_loader::ConfigLoader;
use config::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Category → field-name groupings, loaded from a YAML sidecar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryMap(BTreeMap<String, Vec<String>>);

impl CategoryMap {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        ConfigLoader::load(path)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn fields(&self, category: &str) -> Option<&[String]> {
        self.0.get(category).map(Vec::as_slice)
    }

    /// The field → category inverse. A field listed under several
    /// categories keeps the last category encountered.
    pub fn invert(&self) -> BTreeMap<String, String> {
        self.0
            .iter()
            .flat_map(|(category, fields)| {
                fields
                    .iter()
                    .map(move |field| (field.clone(), category.clone()))
            })
            .collect()
    }
}

impl<const N: usize> From<[(String, Vec<String>); N]> for CategoryMap {
    fn from(entries: [(String, Vec<String>); N]) -> Self {
        Self(BTreeMap::from(entries))
    }
}
