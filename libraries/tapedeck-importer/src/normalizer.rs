//! Input classification and normalization
//!
//! Tolerance over strictness: errors are reserved for input that yields
//! nothing playable. Missing optional metadata is never an error.

use crate::error::ImportError;
use crate::{json, text, Result};
use tapedeck_core::{assign_runtime_ids, IdGenerator, Track, TrackDraft};

/// How raw input will be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Nothing but whitespace
    Empty,
    /// Starts with `{` or `[` after trimming
    Json,
    /// Anything else; scanned for URLs
    Text,
}

/// Classify raw input
pub fn classify(raw: &str) -> InputKind {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        InputKind::Empty
    } else if trimmed.starts_with('{') || trimmed.starts_with('[') {
        InputKind::Json
    } else {
        InputKind::Text
    }
}

/// Normalize raw text into drafts in playback order
pub fn normalize(raw: &str) -> Result<Vec<TrackDraft>> {
    let trimmed = raw.trim();

    let result = match classify(trimmed) {
        InputKind::Empty => Err(ImportError::EmptyInput),
        InputKind::Json => {
            let root: serde_json::Value = serde_json::from_str(trimmed)?;
            let drafts = json::extract_tracks(&root);
            if drafts.is_empty() {
                Err(ImportError::NoPlayableEntries)
            } else {
                Ok(drafts)
            }
        }
        InputKind::Text => {
            let drafts = text::extract_streams(trimmed);
            if drafts.is_empty() {
                Err(ImportError::NoUrlsFound)
            } else {
                Ok(drafts)
            }
        }
    };

    match &result {
        Ok(drafts) => tracing::info!(count = drafts.len(), "Normalized playlist input"),
        Err(e) => tracing::warn!(error = %e, "Playlist input rejected"),
    }

    result
}

/// Normalize and assign runtime ids in one step
pub fn normalize_with_ids(raw: &str, ids: &mut dyn IdGenerator) -> Result<Vec<Track>> {
    let drafts = normalize(raw)?;
    Ok(assign_runtime_ids(drafts, ids))
}
