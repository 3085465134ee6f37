//! Tapedeck Playlist Importer
//!
//! Turns pasted text into playable tracks.
//!
//! # Features
//!
//! - JSON playlists: bare arrays or objects with a `tracks` array
//! - Field aliases (`streamUrl`/`url`/`href`, `title`/`name`, ...)
//! - Plain-text link dumps: every `http(s)://` URL becomes a stream
//! - Partial success: unusable entries are dropped, not reported
//!
//! # Architecture
//!
//! - `rules`: ordered field accessor tables
//! - `json`: structured extraction
//! - `text`: URL scanning for free text
//! - `normalizer`: input classification and orchestration

mod error;
mod json;
mod normalizer;
mod rules;
mod sample;
mod text;

pub use error::ImportError;
pub use normalizer::{classify, normalize, normalize_with_ids, InputKind};
pub use rules::{FieldRule, ARTIST_RULE, ARTWORK_RULE, PLAYLIST_FIELD, STREAM_URL_RULE, TITLE_RULE};
pub use sample::SAMPLE_PLAYLIST;

/// Result type for import operations
pub type Result<T> = std::result::Result<T, ImportError>;
