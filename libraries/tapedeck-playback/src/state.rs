//! Observed playback state
//!
//! `PlaybackStatus` mirrors what the device reports. Every device event is
//! folded in by the pure [`reduce`] function, so the state machine can be
//! exercised without a device.
//!
//! ```text
//! Idle -> Loading -> Playing <-> Paused
//!            \
//!             -> Error
//! (any) -> Idle on track change or empty queue
//! ```

use crate::device::DeviceEvent;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Hint shown when the device reports a decode or network failure
pub const STREAM_ERROR_HINT: &str = "Unable to load this stream. Choose another track to continue.";

/// Per-track playback phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackPhase {
    /// No stream loaded yet, or just switched
    #[default]
    Idle,

    /// Buffering
    Loading,

    /// Audio is flowing
    Playing,

    /// Ready but not playing
    Paused,

    /// Device gave up on the stream
    Error,
}

/// Transient playback state shown by the UI
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackStatus {
    pub phase: TrackPhase,

    /// Mirrors the device's play/pause events
    pub is_playing: bool,

    /// 0-100, reset on track change
    pub progress_percent: f64,

    /// True between a load/stall event and a ready/playing/error event
    pub is_loading: bool,

    /// Advisory text for the player card
    pub hint: Option<String>,
}

impl PlaybackStatus {
    /// State for a freshly selected track
    ///
    /// A play-request hint survives the switch. A stream error hint belongs
    /// to the failed track and is dropped with it.
    pub fn track_changed(self) -> Self {
        Self {
            hint: match self.phase {
                TrackPhase::Error => None,
                _ => self.hint,
            },
            ..Self::default()
        }
    }
}

/// Progress percentage, 0 when the duration is unknown
pub fn progress_percent(position: Duration, duration: Option<Duration>) -> f64 {
    match duration {
        Some(duration) if !duration.is_zero() => {
            let percent = position.as_secs_f64() / duration.as_secs_f64() * 100.0;
            percent.clamp(0.0, 100.0)
        }
        _ => 0.0,
    }
}

/// Fold one device event into the status
pub fn reduce(status: PlaybackStatus, event: &DeviceEvent) -> PlaybackStatus {
    match event {
        DeviceEvent::TimeUpdate { position, duration } => PlaybackStatus {
            progress_percent: progress_percent(*position, *duration),
            ..status
        },
        DeviceEvent::LoadStart | DeviceEvent::Waiting | DeviceEvent::Stalled => PlaybackStatus {
            phase: TrackPhase::Loading,
            is_loading: true,
            ..status
        },
        DeviceEvent::CanPlay => PlaybackStatus {
            phase: if status.is_playing {
                TrackPhase::Playing
            } else {
                TrackPhase::Paused
            },
            is_loading: false,
            ..status
        },
        DeviceEvent::Playing => PlaybackStatus {
            phase: TrackPhase::Playing,
            is_playing: true,
            is_loading: false,
            ..status
        },
        DeviceEvent::Play => PlaybackStatus {
            is_playing: true,
            ..status
        },
        DeviceEvent::Pause | DeviceEvent::Ended => PlaybackStatus {
            phase: match status.phase {
                TrackPhase::Idle | TrackPhase::Error => status.phase,
                _ => TrackPhase::Paused,
            },
            is_playing: false,
            ..status
        },
        DeviceEvent::Error { detail } => {
            let hint = match detail {
                Some(detail) => format!("{} ({})", STREAM_ERROR_HINT, detail),
                None => STREAM_ERROR_HINT.to_string(),
            };
            PlaybackStatus {
                phase: TrackPhase::Error,
                is_playing: false,
                is_loading: false,
                hint: Some(hint),
                ..status
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold(events: &[DeviceEvent]) -> PlaybackStatus {
        events
            .iter()
            .fold(PlaybackStatus::default(), |status, event| reduce(status, event))
    }

    #[test]
    fn progress_is_zero_without_duration() {
        assert_eq!(progress_percent(Duration::from_secs(10), None), 0.0);
        assert_eq!(progress_percent(Duration::from_secs(10), Some(Duration::ZERO)), 0.0);
    }

    #[test]
    fn progress_is_clamped() {
        let percent = progress_percent(Duration::from_secs(90), Some(Duration::from_secs(60)));
        assert_eq!(percent, 100.0);

        let percent = progress_percent(Duration::from_secs(15), Some(Duration::from_secs(60)));
        assert_eq!(percent, 25.0);
    }

    #[test]
    fn load_then_play_sequence() {
        let status = fold(&[DeviceEvent::LoadStart]);
        assert_eq!(status.phase, TrackPhase::Loading);
        assert!(status.is_loading);

        let status = fold(&[DeviceEvent::LoadStart, DeviceEvent::Play, DeviceEvent::Playing]);
        assert_eq!(status.phase, TrackPhase::Playing);
        assert!(status.is_playing);
        assert!(!status.is_loading);

        let status = fold(&[DeviceEvent::LoadStart, DeviceEvent::Playing, DeviceEvent::Pause]);
        assert_eq!(status.phase, TrackPhase::Paused);
        assert!(!status.is_playing);
    }

    #[test]
    fn stall_marks_loading_until_ready() {
        let status = fold(&[DeviceEvent::Playing, DeviceEvent::Stalled]);
        assert!(status.is_loading);
        assert_eq!(status.phase, TrackPhase::Loading);

        let status = reduce(status, &DeviceEvent::CanPlay);
        assert!(!status.is_loading);
        assert_eq!(status.phase, TrackPhase::Playing);
    }

    #[test]
    fn error_clears_loading_and_sets_hint() {
        let status = fold(&[
            DeviceEvent::LoadStart,
            DeviceEvent::Error {
                detail: Some("404".to_string()),
            },
        ]);

        assert_eq!(status.phase, TrackPhase::Error);
        assert!(!status.is_loading);
        assert_eq!(
            status.hint.as_deref(),
            Some("Unable to load this stream. Choose another track to continue. (404)")
        );
    }

    #[test]
    fn pause_after_error_keeps_error_phase() {
        let status = fold(&[DeviceEvent::Error { detail: None }, DeviceEvent::Pause]);
        assert_eq!(status.phase, TrackPhase::Error);
    }

    #[test]
    fn track_change_keeps_hint_only() {
        let status = PlaybackStatus {
            phase: TrackPhase::Playing,
            is_playing: true,
            progress_percent: 40.0,
            is_loading: true,
            hint: Some("hint".to_string()),
        };

        let status = status.track_changed();

        assert_eq!(status.phase, TrackPhase::Idle);
        assert!(!status.is_playing);
        assert_eq!(status.progress_percent, 0.0);
        assert_eq!(status.hint.as_deref(), Some("hint"));
    }

    #[test]
    fn track_change_drops_stream_error_hint() {
        let status = fold(&[DeviceEvent::LoadStart, DeviceEvent::Error { detail: None }]);

        let status = status.track_changed();

        assert_eq!(status.phase, TrackPhase::Idle);
        assert!(status.hint.is_none());
    }
}
