use crate::extract::records::{FileRecord, FileUrls};
use crate::transform::error::TransformError;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// The renditions Omeka stores per file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum FileUrlKind {
    Original,
    Fullsize,
    Thumbnail,
    SquareThumbnail,
}

impl FileUrlKind {
    /// Parses a rendition name, listing the accepted names on failure.
    pub fn parse(name: &str) -> Result<Self, TransformError> {
        Self::from_str(name).map_err(|_| TransformError::UnknownFileUrlKind {
            given: name.to_string(),
            allowed: Self::iter()
                .map(|kind| kind.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

impl FileUrls {
    pub fn url(&self, kind: FileUrlKind) -> Option<&str> {
        match kind {
            FileUrlKind::Original => self.original.as_deref(),
            FileUrlKind::Fullsize => self.fullsize.as_deref(),
            FileUrlKind::Thumbnail => self.thumbnail.as_deref(),
            FileUrlKind::SquareThumbnail => self.square_thumbnail.as_deref(),
        }
    }
}

/// The present URLs of one rendition across a set of file records.
/// Records without that rendition contribute nothing.
pub fn extract_file_urls(files: &[FileRecord], kind: FileUrlKind) -> Vec<String> {
    files
        .iter()
        .filter_map(|file| file.file_urls.url(kind))
        .map(str::to_string)
        .collect()
}
