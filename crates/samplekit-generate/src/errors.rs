use thiserror::Error;

/// Errors emitted by the sampling engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unknown generator: {0}")]
    UnknownGenerator(String),
    #[error(transparent)]
    Catalog(#[from] samplekit_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
