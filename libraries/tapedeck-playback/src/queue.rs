//! Ordered playlist with a cursor
//!
//! Insertion order is playback order. The cursor always satisfies
//! `cursor < len()` when the queue is non-empty and is `0` when empty.

use crate::error::{PlaybackError, Result};
use tapedeck_core::{Track, TrackId};

/// Outcome of removing a track
#[derive(Debug, Clone, PartialEq)]
pub struct Removal {
    pub track: Track,

    /// Position the track occupied before removal
    pub index: usize,

    /// Whether the removed track was the current one
    pub was_current: bool,
}

/// Playlist queue
#[derive(Debug, Clone, Default)]
pub struct PlaylistQueue {
    tracks: Vec<Track>,
    cursor: usize,
}

impl PlaylistQueue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new playlist and rewind to the first track
    pub fn replace(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
        self.cursor = 0;
    }

    /// Append tracks at the end
    ///
    /// Returns whether the queue was empty before the call. The cursor is
    /// left where it was.
    pub fn append(&mut self, tracks: Vec<Track>) -> bool {
        let was_empty = self.tracks.is_empty();
        self.tracks.extend(tracks);
        was_empty
    }

    /// Remove the track with the given id
    ///
    /// A removal before the cursor shifts it back by one so the same track
    /// stays current. Removing the current track keeps the cursor on the
    /// same position, clamped to the new end.
    pub fn remove(&mut self, id: &TrackId) -> Option<Removal> {
        let index = self.position_of(id)?;
        let was_current = index == self.cursor;
        let track = self.tracks.remove(index);

        if self.tracks.is_empty() {
            self.cursor = 0;
        } else if index < self.cursor {
            self.cursor -= 1;
        } else if was_current {
            self.cursor = index.min(self.tracks.len() - 1);
        }

        Some(Removal {
            track,
            index,
            was_current,
        })
    }

    /// Clear entire queue
    pub fn clear(&mut self) {
        self.tracks.clear();
        self.cursor = 0;
    }

    /// Move the cursor to `index`
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.tracks.len() {
            return Err(PlaybackError::IndexOutOfBounds(index));
        }
        self.cursor = index;
        Ok(())
    }

    /// Step forward; `false` at the last track
    pub fn advance(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Step back; `false` at the first track
    pub fn retreat(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.tracks.len()
    }

    pub fn has_previous(&self) -> bool {
        self.cursor > 0 && !self.tracks.is_empty()
    }

    /// Currently selected track
    pub fn current(&self) -> Option<&Track> {
        self.tracks.get(self.cursor)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get track at index
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Index of the track with the given id
    pub fn position_of(&self, id: &TrackId) -> Option<usize> {
        self.tracks.iter().position(|track| &track.id == id)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Total number of tracks in queue
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
