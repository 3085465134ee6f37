//! Error types for playback sequencing

use thiserror::Error;

/// Playback errors
///
/// None of these are fatal: the session turns them into advisory text.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Device refused to start, typically for lack of a user gesture
    #[error("Playback rejected: {0}")]
    PlaybackRejected(String),

    /// Index out of bounds
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// No track with this id in the queue
    #[error("Track not found: {0}")]
    TrackNotFound(String),

    /// Quick-insert submitted without a URL
    #[error("Provide a direct stream URL.")]
    EmptyLink,

    /// Both clipboard paths failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Playlist could not be serialized
    #[error("Export error: {0}")]
    Export(#[from] tapedeck_core::CoreError),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
