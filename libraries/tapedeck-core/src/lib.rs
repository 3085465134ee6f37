//! Tapedeck Core
//!
//! Platform-agnostic track model shared by the importer and the playback
//! sequencer.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `TrackDraft`, `TrackId`
//! - **Id Generation**: `IdGenerator` plus session and deterministic generators
//! - **Export**: the serializable playlist representation
//! - **Error Handling**: `CoreError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use tapedeck_core::{assign_runtime_ids, export_playlist_json, SequentialIdGenerator, TrackDraft};
//!
//! let drafts = vec![TrackDraft::new("0", "Sunset Drive", "https://example.com/1.mp3")];
//! let mut ids = SequentialIdGenerator::new("track");
//! let tracks = assign_runtime_ids(drafts, &mut ids);
//!
//! assert_eq!(tracks[0].id.as_str(), "track-1");
//! let json = export_playlist_json(&tracks).unwrap();
//! assert!(json.contains("\"streamUrl\""));
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod export;
pub mod types;

pub use error::{CoreError, Result};
pub use export::{export_playlist, export_playlist_json, ExportedTrack};
pub use types::{
    assign_runtime_ids, IdGenerator, SequentialIdGenerator, SessionIdGenerator, Track, TrackDraft,
    TrackId,
};
