/// Track types
use super::ids::{IdGenerator, TrackId};
use serde::{Deserialize, Serialize};

/// A normalized playlist entry ready for playback
///
/// `stream_url` is always non-empty; the device receives it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Runtime-unique identifier
    pub id: TrackId,

    /// Display title (source field or positional fallback)
    pub title: String,

    /// Artist name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    /// Opaque stream URL handed to the playback device
    pub stream_url: String,

    /// Artwork URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork: Option<String>,
}

impl Track {
    /// Create a track with only the required fields
    pub fn new(id: TrackId, title: impl Into<String>, stream_url: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: None,
            stream_url: stream_url.into(),
            artwork: None,
        }
    }

    /// Artist name or the "Unknown artist" placeholder used by list views
    pub fn artist_or_unknown(&self) -> &str {
        self.artist.as_deref().unwrap_or("Unknown artist")
    }
}

/// Normalizer output before runtime ids are assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackDraft {
    /// Id found in the source, or the entry's position as a string
    pub source_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    pub stream_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork: Option<String>,
}

impl TrackDraft {
    pub fn new(
        source_id: impl Into<String>,
        title: impl Into<String>,
        stream_url: impl Into<String>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            title: title.into(),
            artist: None,
            stream_url: stream_url.into(),
            artwork: None,
        }
    }

    /// Turn the draft into a playable track with the given runtime id
    pub fn into_track(self, id: TrackId) -> Track {
        Track {
            id,
            title: self.title,
            artist: self.artist,
            stream_url: self.stream_url,
            artwork: self.artwork,
        }
    }
}

/// Give every draft a fresh runtime id
///
/// Source ids are positional or user-controlled and collide across repeated
/// imports, so they are never reused as playlist ids.
pub fn assign_runtime_ids(drafts: Vec<TrackDraft>, ids: &mut dyn IdGenerator) -> Vec<Track> {
    drafts
        .into_iter()
        .map(|draft| {
            let id = ids.next_id();
            draft.into_track(id)
        })
        .collect()
}
