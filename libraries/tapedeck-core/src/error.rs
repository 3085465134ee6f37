/// Core error types for Tapedeck
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Tapedeck
#[derive(Error, Debug)]
pub enum CoreError {
    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
