//! Tool error types

use tapedeck_importer::ImportError;
use tapedeck_playback::PlaybackError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ToolError>;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Import(#[from] ImportError),

    #[error("Playback error: {0}")]
    Playback(#[from] PlaybackError),
}
