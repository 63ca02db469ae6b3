use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Invalid file URL type '{given}'. Must be one of: {allowed}")]
    UnknownFileUrlKind { given: String, allowed: String },
    #[error(transparent)]
    Polars(#[from] PolarsError),
}
