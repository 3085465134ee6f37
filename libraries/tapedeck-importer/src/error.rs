//! Error types for the importer
//!
//! Display strings are shown to the user as-is.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("Paste playlist JSON or at least one direct stream URL.")]
    EmptyInput,

    /// Carries the JSON parser's message
    #[error("{0}")]
    MalformedJson(String),

    #[error("Provide an array with at least one usable stream URL field.")]
    NoPlayableEntries,

    #[error("Provide a JSON playlist or direct URLs separated by spaces or new lines.")]
    NoUrlsFound,
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedJson(err.to_string())
    }
}
