use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not create output directory: {reason}")]
    NoStorage { reason: String },
    #[error("Could not store {name}: {reason}")]
    CantStore { name: String, reason: String },
}
