//! Playback sequencer - queue, cursor and device orchestration
//!
//! The sequencer owns the playlist, the cursor and the playback device.
//! Commands mutate the queue and may leave an autoplay intent behind;
//! [`Sequencer::reconcile_autoplay`] turns that intent into a play request.
//! Device events flow back in through [`Sequencer::handle_device_event`]
//! and play outcomes through [`Sequencer::resolve_play`].

use crate::{
    autoplay::AutoplayIntent,
    device::{DeviceEvent, PlayOrigin, PlayRequest, PlaybackDevice},
    error::{PlaybackError, Result},
    queue::PlaylistQueue,
    state::{reduce, PlaybackStatus},
};
use tapedeck_core::{Track, TrackId};

/// Hint shown when the host refuses to start playback on its own
pub const AUTOPLAY_DENIED_HINT: &str = "Press play once to allow background audio.";

/// Hint shown when an explicit play request is refused
pub const PLAY_DENIED_HINT: &str = "Interaction required to resume playback.";

/// Playlist sequencer driving a single playback device
pub struct Sequencer<D: PlaybackDevice> {
    queue: PlaylistQueue,
    status: PlaybackStatus,
    intent: AutoplayIntent,
    device: D,

    // Track whose stream the device currently holds
    loaded: Option<TrackId>,
}

impl<D: PlaybackDevice> Sequencer<D> {
    /// Create a sequencer with an empty queue
    pub fn new(device: D) -> Self {
        Self {
            queue: PlaylistQueue::new(),
            status: PlaybackStatus::default(),
            intent: AutoplayIntent::new(),
            device,
            loaded: None,
        }
    }

    // ===== Queue Mutation =====

    /// Install a new playlist and rewind
    ///
    /// Stops the device and resets the status. A non-empty playlist queues
    /// autoplay for its first track.
    pub fn replace(&mut self, tracks: Vec<Track>) {
        if tracks.is_empty() {
            self.clear();
            return;
        }

        tracing::debug!(count = tracks.len(), "Replacing playlist");
        self.device.pause();
        self.status = PlaybackStatus::default();
        self.queue.replace(tracks);
        self.intent.request();
        self.sync_source();
    }

    /// Append tracks to the end of the playlist
    ///
    /// Appending to an empty playlist behaves like [`replace`](Self::replace);
    /// otherwise playback is left undisturbed.
    pub fn append(&mut self, tracks: Vec<Track>) {
        if tracks.is_empty() {
            return;
        }

        tracing::debug!(count = tracks.len(), "Appending to playlist");
        if self.queue.is_empty() {
            self.replace(tracks);
        } else {
            self.queue.append(tracks);
        }
    }

    /// Remove the track with the given id
    ///
    /// Removing the current track while playing queues autoplay so the
    /// following track takes over. Emptying the playlist resets everything.
    pub fn remove(&mut self, id: &TrackId) -> Result<Track> {
        let was_playing = self.status.is_playing;
        let removal = self
            .queue
            .remove(id)
            .ok_or_else(|| PlaybackError::TrackNotFound(id.to_string()))?;

        tracing::debug!(
            id = %id,
            index = removal.index,
            was_current = removal.was_current,
            "Removed track"
        );

        if self.queue.is_empty() {
            self.reset();
        } else if removal.was_current {
            self.sync_source();
            if was_playing {
                self.intent.request();
            }
        }

        Ok(removal.track)
    }

    /// Empty the playlist and reset playback
    pub fn clear(&mut self) {
        self.queue.clear();
        self.reset();
    }

    // ===== Navigation =====

    /// Make the track at `index` current
    ///
    /// Playback carries over to the new track only if it was playing.
    pub fn select_index(&mut self, index: usize) -> Result<()> {
        let was_playing = self.status.is_playing;
        self.queue.select(index)?;
        self.sync_source();
        if was_playing {
            self.intent.request();
        }
        Ok(())
    }

    /// Step to the following track
    ///
    /// At the last track the cursor stays put and playback is marked as
    /// stopped. With `resume` the new track starts playing.
    pub fn next(&mut self, resume: bool) {
        if !self.queue.advance() {
            self.status.is_playing = false;
            return;
        }
        self.sync_source();
        if resume {
            self.intent.request();
        }
    }

    /// Step to the preceding track; no-op at the first track
    pub fn previous(&mut self, resume: bool) {
        if !self.queue.retreat() {
            return;
        }
        self.sync_source();
        if resume {
            self.intent.request();
        }
    }

    // ===== Playback Control =====

    /// Play if the device is paused, pause otherwise
    pub fn toggle_playback(&mut self) {
        let Some(track_id) = self.queue.current().map(|track| track.id.clone()) else {
            return;
        };

        if self.device.is_paused() {
            let request = self.intent.issue(track_id, PlayOrigin::User);
            tracing::debug!(ticket = request.ticket, "Requesting playback");
            self.device.play(&request);
        } else {
            self.device.pause();
        }
    }

    /// Turn a queued autoplay intent into a play request
    ///
    /// Returns the issued request. The intent is consumed whether or not a
    /// current track exists.
    pub fn reconcile_autoplay(&mut self) -> Option<PlayRequest> {
        if !self.intent.is_queued() {
            return None;
        }

        self.intent.take();
        let track_id = self.queue.current()?.id.clone();
        let request = self.intent.issue(track_id, PlayOrigin::Autoplay);
        tracing::debug!(ticket = request.ticket, track = %request.track_id, "Autoplay");
        self.device.play(&request);
        Some(request)
    }

    /// Apply the outcome of an earlier play request
    ///
    /// Only the hint is touched. Outcomes for requests whose track is no
    /// longer current, or whose source has been replaced since, are
    /// ignored. Returns whether the outcome was applied.
    pub fn resolve_play(&mut self, ticket: u64, outcome: Result<()>) -> bool {
        let Some(request) = self.intent.settle(ticket) else {
            tracing::debug!(ticket, "Ignoring resolution of unknown play request");
            return false;
        };

        if self.queue.current().map(|track| &track.id) != Some(&request.track_id) {
            tracing::debug!(ticket, track = %request.track_id, "Ignoring stale play resolution");
            return false;
        }

        match outcome {
            Ok(()) => self.status.hint = None,
            Err(e) => {
                tracing::info!(ticket, error = %e, "Play request rejected");
                let hint = match request.origin {
                    PlayOrigin::Autoplay => AUTOPLAY_DENIED_HINT,
                    PlayOrigin::User => PLAY_DENIED_HINT,
                };
                self.status.hint = Some(hint.to_string());
            }
        }
        true
    }

    /// Fold a device event into the status
    ///
    /// End of track advances and resumes. Errors leave the current track
    /// selected.
    pub fn handle_device_event(&mut self, event: DeviceEvent) {
        if let DeviceEvent::Error { detail } = &event {
            tracing::warn!(
                track = ?self.loaded,
                detail = detail.as_deref().unwrap_or("unknown"),
                "Stream failed to load"
            );
        }

        self.status = reduce(std::mem::take(&mut self.status), &event);

        if event == DeviceEvent::Ended {
            self.next(true);
        }
    }

    // ===== State Queries =====

    pub fn status(&self) -> &PlaybackStatus {
        &self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status.is_playing
    }

    /// Clear the advisory hint
    pub fn clear_hint(&mut self) {
        self.status.hint = None;
    }

    pub fn tracks(&self) -> &[Track] {
        self.queue.tracks()
    }

    pub fn cursor(&self) -> usize {
        self.queue.cursor()
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.queue.current()
    }

    pub fn can_go_next(&self) -> bool {
        self.queue.has_next()
    }

    pub fn can_go_previous(&self) -> bool {
        self.queue.has_previous()
    }

    /// Whether an autoplay attempt is queued but not yet issued
    pub fn pending_autoplay(&self) -> bool {
        self.intent.is_queued()
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    // ===== Internal =====

    /// Point the device at the current track if it changed
    fn sync_source(&mut self) {
        let current = self.queue.current().map(|track| (track.id.clone(), track.stream_url.clone()));
        if current.as_ref().map(|(id, _)| id) == self.loaded.as_ref() {
            return;
        }

        self.device.load(current.as_ref().map(|(_, url)| url.as_str()));
        self.intent.invalidate_in_flight();
        self.status = std::mem::take(&mut self.status).track_changed();
        self.loaded = current.map(|(id, _)| id);
    }

    /// Stop the device and forget everything transient
    fn reset(&mut self) {
        tracing::debug!("Playlist empty, resetting playback");
        self.device.pause();
        self.intent.reset();
        self.status = PlaybackStatus::default();
        if self.loaded.take().is_some() {
            self.device.load(None);
        }
    }
}
