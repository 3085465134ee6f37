//! Subcommand implementations
//!
//! Each command drives a headless [`PlayerSession`] and returns the text to
//! print, so the binary only handles I/O.

use crate::error::Result;
use std::fmt::Write;
use tapedeck_playback::{HeadlessDevice, LoadMode, PlayerConfig, PlayerSession};

pub type HeadlessSession = PlayerSession<HeadlessDevice>;

pub fn new_session(config: &PlayerConfig) -> HeadlessSession {
    PlayerSession::new(HeadlessDevice::new(), config.clone())
}

/// Normalize `primary`, append `extra` inputs and `links`, return export JSON
///
/// A failing extra input is skipped with a warning; the queue built so far
/// is kept.
pub fn import(
    session: &mut HeadlessSession,
    primary: &str,
    extra: &[(String, String)],
    links: &[String],
) -> Result<String> {
    session.load_from_text(primary, LoadMode::Replace)?;

    for (name, raw) in extra {
        if let Err(e) = session.load_from_text(raw, LoadMode::Append) {
            tracing::warn!(input = %name, error = %e, "Skipping input");
        }
    }

    for link in links {
        session.insert_link(None, link)?;
    }

    tracing::info!(summary = %session.summary(), "Import complete");
    Ok(session.export_json()?)
}

/// Describe the queue built from `raw`
pub fn inspect(session: &mut HeadlessSession, raw: &str) -> Result<String> {
    session.load_from_text(raw, LoadMode::Replace)?;

    let snapshot = session.snapshot();
    let mut out = String::new();
    let _ = writeln!(out, "{}", snapshot.summary);
    for (index, track) in snapshot.tracks.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} - {}",
            index + 1,
            track.title,
            track.artist_or_unknown()
        );
    }
    Ok(out)
}

/// The built-in sample playlist
pub fn sample(session: &mut HeadlessSession) -> String {
    session.reset_sample().to_string()
}
