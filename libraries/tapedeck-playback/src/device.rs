//! Playback device seam
//!
//! The device is the host's media element: a black box that plays one
//! stream URL at a time. The sequencer is its only owner.

use std::time::Duration;
use tapedeck_core::TrackId;

/// Why a play request was issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOrigin {
    /// Issued by autoplay reconciliation after a queue mutation
    Autoplay,
    /// Issued by an explicit play/pause toggle
    User,
}

/// A play request handed to the device
///
/// The device reports the outcome later through
/// [`Sequencer::resolve_play`](crate::Sequencer::resolve_play), quoting the
/// ticket. The track id pins the request to the track that was current when
/// it was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayRequest {
    pub ticket: u64,
    pub track_id: TrackId,
    pub origin: PlayOrigin,
}

/// Platform playback device
///
/// Implementors wrap an audio element or player. All calls are made from
/// the single logical owner of the sequencer.
pub trait PlaybackDevice {
    /// Point the device at a new stream, or detach it with `None`
    ///
    /// Switching sources leaves the device paused and silently invalidates
    /// any play request still in flight.
    fn load(&mut self, url: Option<&str>);

    /// Begin playback without blocking
    ///
    /// Success or rejection is delivered later via `resolve_play`.
    fn play(&mut self, request: &PlayRequest);

    /// Pause playback
    fn pause(&mut self);

    /// Whether the device is currently paused
    fn is_paused(&self) -> bool;

    /// Current playback position
    fn position(&self) -> Duration;

    /// Stream duration, if known
    fn duration(&self) -> Option<Duration>;
}

/// Lifecycle events emitted by the device, delivered in emission order
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceEvent {
    TimeUpdate {
        position: Duration,
        duration: Option<Duration>,
    },
    LoadStart,
    CanPlay,
    Playing,
    Waiting,
    Stalled,
    Ended,
    Error {
        detail: Option<String>,
    },
    Play,
    Pause,
}

impl DeviceEvent {
    /// Sample the device's clock into a time-update event
    pub fn time_update_from(device: &dyn PlaybackDevice) -> Self {
        Self::TimeUpdate {
            position: device.position(),
            duration: device.duration(),
        }
    }

    /// Parse a DOM media event name (`timeupdate` is excluded; it needs a clock)
    pub fn from_dom_name(name: &str) -> Option<Self> {
        let event = match name {
            "loadstart" => Self::LoadStart,
            "canplay" => Self::CanPlay,
            "playing" => Self::Playing,
            "waiting" => Self::Waiting,
            "stalled" => Self::Stalled,
            "ended" => Self::Ended,
            "error" => Self::Error { detail: None },
            "play" => Self::Play,
            "pause" => Self::Pause,
            _ => return None,
        };
        Some(event)
    }
}

/// Device with no audio output
///
/// Records every instruction it receives and keeps play requests pending
/// until the driver settles them. Used by headless drivers and tests.
#[derive(Debug)]
pub struct HeadlessDevice {
    source: Option<String>,
    paused: bool,
    position: Duration,
    duration: Option<Duration>,
    requests: Vec<PlayRequest>,
    loads: Vec<Option<String>>,
    pause_calls: usize,
}

impl HeadlessDevice {
    pub fn new() -> Self {
        Self {
            source: None,
            paused: true,
            position: Duration::ZERO,
            duration: None,
            requests: Vec::new(),
            loads: Vec::new(),
            pause_calls: 0,
        }
    }

    /// Currently loaded stream URL
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Every play request received so far, oldest first
    pub fn requests(&self) -> &[PlayRequest] {
        &self.requests
    }

    /// Most recent play request
    pub fn last_request(&self) -> Option<&PlayRequest> {
        self.requests.last()
    }

    /// Every `load` call received so far
    pub fn loads(&self) -> &[Option<String>] {
        &self.loads
    }

    pub fn pause_calls(&self) -> usize {
        self.pause_calls
    }

    /// Simulate the clock advancing
    pub fn set_clock(&mut self, position: Duration, duration: Option<Duration>) {
        self.position = position;
        self.duration = duration;
    }

    /// Mark the device as actually playing or paused
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}

impl Default for HeadlessDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackDevice for HeadlessDevice {
    fn load(&mut self, url: Option<&str>) {
        self.source = url.map(str::to_string);
        self.loads.push(self.source.clone());
        self.paused = true;
        self.position = Duration::ZERO;
        self.duration = None;
    }

    fn play(&mut self, request: &PlayRequest) {
        // Like a media element, the device leaves the paused state as soon as
        // play is requested; a rejection puts it back via `set_paused`.
        self.paused = false;
        self.requests.push(request.clone());
    }

    fn pause(&mut self) {
        self.pause_calls += 1;
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }
}
