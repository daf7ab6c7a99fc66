use thiserror::Error;

/// Errors emitted around generation: pool loading and record output.
///
/// Generating, iterating and closing a reader never fail.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("core error: {0}")]
    Core(#[from] fakedocs_core::Error),
    #[error("pool error: {0}")]
    Pool(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
