//! Tapedeck - Playback Sequencing
//!
//! Platform-agnostic playlist sequencing for Tapedeck.
//!
//! This crate provides:
//! - Ordered playlist queue with a self-clamping cursor
//! - Replace, append, remove, select, next and previous commands
//! - One-shot autoplay intents reconciled against the device
//! - A pure reducer folding device events into playback status
//! - Clipboard export with a fallback path
//! - A session type exposing the whole UI command surface
//!
//! # Architecture
//!
//! `tapedeck-playback` never touches audio itself:
//! - The host's media element sits behind [`PlaybackDevice`]
//! - The host's clipboard sits behind [`ClipboardWriter`]
//! - Play requests are non-blocking; their outcome arrives later through
//!   [`PlayerSession::resolve_play`]
//!
//! With the `wasm` feature the session is exported to JavaScript as
//! `WasmPlayer`.
//!
//! # Example: Headless Session
//!
//! ```rust
//! use tapedeck_playback::{DeviceEvent, HeadlessDevice, LoadMode, PlayerConfig, PlayerSession};
//!
//! let mut session = PlayerSession::new(HeadlessDevice::new(), PlayerConfig::default());
//!
//! session
//!     .load_from_text("https://a.example/1.mp3 https://a.example/2.mp3", LoadMode::Replace)
//!     .unwrap();
//! assert_eq!(session.summary(), "2 tracks ready");
//!
//! // Loading queued an autoplay request for the first track
//! let ticket = session.device().last_request().unwrap().ticket;
//! session.resolve_play(ticket, Ok(()));
//! session.handle_device_event(DeviceEvent::Playing);
//! assert!(session.snapshot().is_playing);
//!
//! // Skipping while playing keeps playing
//! session.play_next();
//! assert_eq!(session.snapshot().cursor, 1);
//! ```

mod autoplay;
mod clipboard;
mod config;
mod device;
mod error;
mod queue;
mod sequencer;
mod session;
mod snapshot;
pub mod state;

#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use autoplay::AutoplayIntent;
pub use clipboard::{copy_with_fallback, ClipboardWriter, CopyFeedback, CopyStatus, FeedbackTimer};
pub use config::PlayerConfig;
pub use device::{DeviceEvent, HeadlessDevice, PlayOrigin, PlayRequest, PlaybackDevice};
pub use error::{PlaybackError, Result};
pub use queue::{PlaylistQueue, Removal};
pub use sequencer::{Sequencer, AUTOPLAY_DENIED_HINT, PLAY_DENIED_HINT};
pub use session::{LoadMode, PlayerSession};
pub use snapshot::PlayerSnapshot;
pub use state::{reduce, PlaybackStatus, TrackPhase, STREAM_ERROR_HINT};
