pub mod dates;
pub mod error;
pub mod export;
pub use export::HarvestExport;
pub mod file_urls;
pub use file_urls::FileUrlKind;
pub mod tabular;
