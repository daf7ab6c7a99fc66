use thiserror::Error;

/// Core error type shared across fakedocs crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A reference pool was defined without any candidate values.
    #[error("invalid pool '{0}': a pool needs at least one value")]
    EmptyPool(String),
    /// The requested reader variant does not exist.
    #[error("unknown variant: {0}")]
    UnknownVariant(String),
}

/// Convenience alias for results returned by fakedocs crates.
pub type Result<T> = std::result::Result<T, Error>;
