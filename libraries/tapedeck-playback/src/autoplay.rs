//! Deferred autoplay intent
//!
//! Queue mutations that should (re)start playback leave a one-shot intent
//! here instead of calling the device directly. Reconciliation turns the
//! intent into a play request once a current track exists. Only one intent
//! can be queued; requesting again while one is queued is a no-op, so the
//! latest mutation decides which track gets played.

use crate::device::{PlayOrigin, PlayRequest};
use tapedeck_core::TrackId;

/// Single-slot autoplay queue plus the play requests still awaiting resolution
#[derive(Debug, Default)]
pub struct AutoplayIntent {
    queued: bool,
    in_flight: Vec<PlayRequest>,
    next_ticket: u64,
}

impl AutoplayIntent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an autoplay attempt
    pub fn request(&mut self) {
        self.queued = true;
    }

    pub fn is_queued(&self) -> bool {
        self.queued
    }

    /// Consume the queued attempt
    ///
    /// The slot is empty afterwards whatever the outcome of the attempt, so
    /// a denied autoplay is never retried on its own.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.queued)
    }

    /// Allocate a ticket and remember the request until it resolves
    pub fn issue(&mut self, track_id: TrackId, origin: PlayOrigin) -> PlayRequest {
        self.next_ticket += 1;
        let request = PlayRequest {
            ticket: self.next_ticket,
            track_id,
            origin,
        };
        self.in_flight.push(request.clone());
        request
    }

    /// Remove and return the request with this ticket
    ///
    /// `None` means the ticket is unknown or was invalidated by a source
    /// change.
    pub fn settle(&mut self, ticket: u64) -> Option<PlayRequest> {
        let index = self.in_flight.iter().position(|r| r.ticket == ticket)?;
        Some(self.in_flight.remove(index))
    }

    /// Forget every in-flight request
    ///
    /// Called when the device switches source; the device drops those
    /// requests itself and any late answer is meaningless.
    pub fn invalidate_in_flight(&mut self) {
        self.in_flight.clear();
    }

    pub fn in_flight(&self) -> &[PlayRequest] {
        &self.in_flight
    }

    /// Drop both the queued intent and the in-flight requests
    pub fn reset(&mut self) {
        self.queued = false;
        self.in_flight.clear();
    }
}
