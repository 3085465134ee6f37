//! Playlist export
//!
//! The export contains only what is needed to rebuild the queue: ids are
//! runtime-only and are left out, as are absent optional fields.

use crate::error::Result;
use crate::types::Track;
use serde::{Deserialize, Serialize};

/// One entry of an exported playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedTrack {
    pub title: String,
    pub stream_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork: Option<String>,
}

impl From<&Track> for ExportedTrack {
    fn from(track: &Track) -> Self {
        Self {
            title: track.title.clone(),
            stream_url: track.stream_url.clone(),
            // Empty strings are treated as absent
            artist: track.artist.clone().filter(|a| !a.is_empty()),
            artwork: track.artwork.clone().filter(|a| !a.is_empty()),
        }
    }
}

/// Build the export model in playlist order
pub fn export_playlist(tracks: &[Track]) -> Vec<ExportedTrack> {
    tracks.iter().map(ExportedTrack::from).collect()
}

/// Pretty-printed JSON export, or an empty string for an empty playlist
pub fn export_playlist_json(tracks: &[Track]) -> Result<String> {
    if tracks.is_empty() {
        return Ok(String::new());
    }

    Ok(serde_json::to_string_pretty(&export_playlist(tracks))?)
}
