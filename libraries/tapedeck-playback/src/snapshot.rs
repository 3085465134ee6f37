//! Read-only view of a session for the UI layer

use crate::{clipboard::CopyStatus, state::TrackPhase};
use serde::Serialize;
use tapedeck_core::Track;

/// Everything the UI renders, captured at one point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub tracks: Vec<Track>,
    pub cursor: usize,
    pub current_track: Option<Track>,
    pub is_playing: bool,
    pub progress_percent: f64,
    pub is_loading: bool,
    pub phase: TrackPhase,
    pub hint: Option<String>,

    /// Last import failure
    pub error: Option<String>,

    /// Last quick-insert failure
    pub link_error: Option<String>,

    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub copy_status: CopyStatus,

    /// "No tracks loaded", "1 track ready", "N tracks ready"
    pub summary: String,
}
