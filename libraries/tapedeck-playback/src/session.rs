//! Player session - the command surface used by the UI layer
//!
//! A session wraps the sequencer with everything around it: importing
//! text, quick link insertion, advisory text and clipboard export. It is
//! the single logical owner of the device; every command and device event
//! is followed by autoplay reconciliation.

use crate::{
    clipboard::{copy_with_fallback, ClipboardWriter, CopyFeedback, CopyStatus, FeedbackTimer},
    config::PlayerConfig,
    device::{DeviceEvent, PlaybackDevice},
    error::{PlaybackError, Result},
    sequencer::Sequencer,
    snapshot::PlayerSnapshot,
};
use tapedeck_core::{export_playlist_json, IdGenerator, SessionIdGenerator, Track, TrackId};
use tapedeck_importer::{normalize_with_ids, ImportError, SAMPLE_PLAYLIST};

/// How imported tracks are combined with the current playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Discard the current playlist; a failed import leaves it empty
    Replace,
    /// Add to the end; a failed import keeps the current playlist
    Append,
}

/// Interactive player session
pub struct PlayerSession<D: PlaybackDevice> {
    sequencer: Sequencer<D>,
    ids: Box<dyn IdGenerator>,
    config: PlayerConfig,
    error: Option<String>,
    link_error: Option<String>,
    copy: CopyFeedback,
}

impl<D: PlaybackDevice> PlayerSession<D> {
    /// Create a session with time-seeded track ids
    pub fn new(device: D, config: PlayerConfig) -> Self {
        Self::with_id_generator(device, config, Box::new(SessionIdGenerator::new()))
    }

    /// Create a session with a caller-supplied id generator
    pub fn with_id_generator(device: D, config: PlayerConfig, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            sequencer: Sequencer::new(device),
            ids,
            config,
            error: None,
            link_error: None,
            copy: CopyFeedback::default(),
        }
    }

    // ===== Import =====

    /// Normalize `raw` and install or append the result
    ///
    /// Returns the number of imported tracks. On failure the error text is
    /// kept for display.
    pub fn load_from_text(
        &mut self,
        raw: &str,
        mode: LoadMode,
    ) -> std::result::Result<usize, ImportError> {
        self.sequencer.clear_hint();

        let tracks = match normalize_with_ids(raw, self.ids.as_mut()) {
            Ok(tracks) => tracks,
            Err(e) => {
                tracing::info!(error = %e, ?mode, "Import failed");
                self.error = Some(e.to_string());
                if mode == LoadMode::Replace {
                    self.sequencer.clear();
                }
                return Err(e);
            }
        };

        self.error = None;
        let count = tracks.len();
        tracing::info!(count, ?mode, "Imported tracks");

        match mode {
            LoadMode::Replace => self.sequencer.replace(tracks),
            LoadMode::Append => self.sequencer.append(tracks),
        }
        self.sequencer.reconcile_autoplay();
        Ok(count)
    }

    /// Append a single stream URL
    pub fn insert_link(&mut self, title: Option<&str>, url: &str) -> Result<TrackId> {
        self.link_error = None;

        let url = url.trim();
        if url.is_empty() {
            let e = PlaybackError::EmptyLink;
            self.link_error = Some(e.to_string());
            return Err(e);
        }

        let title = match title.map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => self.config.manual_link_title.clone(),
        };

        let id = self.ids.next_id();
        tracing::debug!(id = %id, url, "Inserting link");
        self.sequencer.append(vec![Track::new(id.clone(), title, url)]);
        self.sequencer.reconcile_autoplay();
        Ok(id)
    }

    // ===== Queue =====

    pub fn clear_queue(&mut self) {
        self.sequencer.clear();
    }

    pub fn remove_track(&mut self, id: &TrackId) -> Result<Track> {
        let removed = self.sequencer.remove(id)?;
        self.sequencer.reconcile_autoplay();
        Ok(removed)
    }

    pub fn select_track(&mut self, index: usize) -> Result<()> {
        self.sequencer.select_index(index)?;
        self.sequencer.reconcile_autoplay();
        Ok(())
    }

    /// Skip forward, continuing playback only if something is playing
    pub fn play_next(&mut self) {
        let resume = self.sequencer.is_playing();
        self.sequencer.next(resume);
        self.sequencer.reconcile_autoplay();
    }

    /// Skip back, continuing playback only if something is playing
    pub fn play_previous(&mut self) {
        let resume = self.sequencer.is_playing();
        self.sequencer.previous(resume);
        self.sequencer.reconcile_autoplay();
    }

    // ===== Playback =====

    pub fn toggle_playback(&mut self) {
        self.sequencer.toggle_playback();
        self.sequencer.reconcile_autoplay();
    }

    pub fn handle_device_event(&mut self, event: DeviceEvent) {
        self.sequencer.handle_device_event(event);
        self.sequencer.reconcile_autoplay();
    }

    /// Sample the device clock and update progress
    pub fn handle_time_update(&mut self) {
        let event = DeviceEvent::time_update_from(self.sequencer.device());
        self.handle_device_event(event);
    }

    /// Deliver the outcome of a play request issued earlier
    pub fn resolve_play(&mut self, ticket: u64, outcome: Result<()>) -> bool {
        let applied = self.sequencer.resolve_play(ticket, outcome);
        self.sequencer.reconcile_autoplay();
        applied
    }

    // ===== Export =====

    /// Current playlist as export JSON; empty string for an empty playlist
    pub fn export_json(&self) -> Result<String> {
        Ok(export_playlist_json(self.sequencer.tracks())?)
    }

    /// Copy the export JSON to the clipboard
    ///
    /// Does nothing for an empty playlist. Otherwise returns the timer
    /// after which [`expire_copy_feedback`](Self::expire_copy_feedback)
    /// should be called.
    pub fn copy_exported_playlist(
        &mut self,
        clipboard: &mut dyn ClipboardWriter,
    ) -> Option<FeedbackTimer> {
        if self.sequencer.tracks().is_empty() {
            return None;
        }

        let outcome = self
            .export_json()
            .and_then(|json| copy_with_fallback(clipboard, &json));

        let status = match outcome {
            Ok(()) => CopyStatus::Copied,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to copy playlist");
                CopyStatus::Failed
            }
        };
        Some(self.copy.show(status, self.config.copy_feedback()))
    }

    pub fn expire_copy_feedback(&mut self, timer: FeedbackTimer) {
        self.copy.expire(timer);
    }

    pub fn copy_status(&self) -> CopyStatus {
        self.copy.status()
    }

    // ===== Session =====

    /// Empty the queue, drop all advisory text and return the sample input
    pub fn reset_sample(&mut self) -> &'static str {
        self.sequencer.clear();
        self.error = None;
        self.link_error = None;
        SAMPLE_PLAYLIST
    }

    /// Queue size in words
    pub fn summary(&self) -> String {
        match self.sequencer.tracks().len() {
            0 => "No tracks loaded".to_string(),
            1 => "1 track ready".to_string(),
            n => format!("{} tracks ready", n),
        }
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        let status = self.sequencer.status();
        PlayerSnapshot {
            tracks: self.sequencer.tracks().to_vec(),
            cursor: self.sequencer.cursor(),
            current_track: self.sequencer.current_track().cloned(),
            is_playing: status.is_playing,
            progress_percent: status.progress_percent,
            is_loading: status.is_loading,
            phase: status.phase,
            hint: status.hint.clone(),
            error: self.error.clone(),
            link_error: self.link_error.clone(),
            can_go_previous: self.sequencer.can_go_previous(),
            can_go_next: self.sequencer.can_go_next(),
            copy_status: self.copy.status(),
            summary: self.summary(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn link_error(&self) -> Option<&str> {
        self.link_error.as_deref()
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn sequencer(&self) -> &Sequencer<D> {
        &self.sequencer
    }

    pub fn device(&self) -> &D {
        self.sequencer.device()
    }

    pub fn device_mut(&mut self) -> &mut D {
        self.sequencer.device_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MockClipboardWriter;
    use crate::device::HeadlessDevice;
    use tapedeck_core::SequentialIdGenerator;

    fn create_session() -> PlayerSession<HeadlessDevice> {
        PlayerSession::with_id_generator(
            HeadlessDevice::new(),
            PlayerConfig::default(),
            Box::new(SequentialIdGenerator::new("t")),
        )
    }

    #[test]
    fn summary_wording() {
        let mut session = create_session();
        assert_eq!(session.summary(), "No tracks loaded");

        session.insert_link(None, "https://a/1.mp3").unwrap();
        assert_eq!(session.summary(), "1 track ready");

        session.insert_link(None, "https://a/2.mp3").unwrap();
        assert_eq!(session.summary(), "2 tracks ready");
    }

    #[test]
    fn insert_link_defaults_title_and_trims() {
        let mut session = create_session();

        let id = session.insert_link(Some("   "), "  https://a/1.mp3 \n").unwrap();

        let track = &session.sequencer().tracks()[0];
        assert_eq!(track.id, id);
        assert_eq!(track.title, "Manual stream");
        assert_eq!(track.stream_url, "https://a/1.mp3");
    }

    #[test]
    fn insert_empty_link_sets_link_error() {
        let mut session = create_session();

        assert!(matches!(
            session.insert_link(Some("x"), "   "),
            Err(PlaybackError::EmptyLink)
        ));
        assert_eq!(session.link_error(), Some("Provide a direct stream URL."));

        session.insert_link(None, "https://a/1.mp3").unwrap();
        assert_eq!(session.link_error(), None);
    }

    #[test]
    fn first_link_autoplays() {
        let mut session = create_session();
        session.insert_link(Some("Live"), "https://a/1.mp3").unwrap();

        assert_eq!(session.device().requests().len(), 1);
        assert_eq!(session.device().source(), Some("https://a/1.mp3"));
    }

    #[test]
    fn copy_skipped_for_empty_queue() {
        let mut session = create_session();
        let mut clipboard = MockClipboardWriter::new();
        clipboard.expect_write_text().never();

        assert!(session.copy_exported_playlist(&mut clipboard).is_none());
        assert_eq!(session.copy_status(), CopyStatus::Idle);
    }

    #[test]
    fn copy_reports_status_and_expires() {
        let mut session = create_session();
        session.insert_link(Some("Live"), "https://a/1.mp3").unwrap();

        let mut clipboard = MockClipboardWriter::new();
        clipboard
            .expect_write_text()
            .withf(|text| text.contains("\"streamUrl\": \"https://a/1.mp3\""))
            .returning(|_| Ok(()));

        let timer = session.copy_exported_playlist(&mut clipboard).unwrap();
        assert_eq!(session.copy_status(), CopyStatus::Copied);
        assert_eq!(timer.after, std::time::Duration::from_millis(2500));

        session.expire_copy_feedback(timer);
        assert_eq!(session.copy_status(), CopyStatus::Idle);
    }

    #[test]
    fn copy_failure_is_reported() {
        let mut session = create_session();
        session.insert_link(None, "https://a/1.mp3").unwrap();

        let mut clipboard = MockClipboardWriter::new();
        clipboard
            .expect_write_text()
            .returning(|_| Err(PlaybackError::Clipboard("denied".to_string())));
        clipboard
            .expect_copy_via_selection()
            .returning(|_| Err(PlaybackError::Clipboard("denied".to_string())));

        session.copy_exported_playlist(&mut clipboard);
        assert_eq!(session.copy_status(), CopyStatus::Failed);
    }

    #[test]
    fn reset_sample_clears_everything() {
        let mut session = create_session();
        session.insert_link(None, "https://a/1.mp3").unwrap();
        let _ = session.load_from_text("{bad", LoadMode::Append);
        let _ = session.insert_link(None, "");

        let sample = session.reset_sample();

        assert_eq!(sample, SAMPLE_PLAYLIST);
        assert!(session.sequencer().tracks().is_empty());
        assert!(session.error().is_none());
        assert!(session.link_error().is_none());
        assert!(session.snapshot().hint.is_none());
    }
}
