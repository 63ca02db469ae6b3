//! Free-text date extraction and normalization.
//!
//! Archive metadata carries dates in whatever shape the cataloguer used:
//! partial dates, regional slash and dot formats, `xx` placeholders for
//! unknown components, brackets marking uncertain provenance. This module
//! recognizes those shapes, normalizes each to one canonical UTC timestamp
//! string, and never lets a malformed value abort a batch.

pub mod normalizer;
pub use normalizer::normalize;
pub mod pattern_extractor;
pub use pattern_extractor::extract;
pub mod standardizer;
pub use standardizer::{standardize, standardize_value};
