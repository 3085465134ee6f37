//! Property-based tests for the sequencer
//!
//! Uses proptest to run random command sequences and check the queue,
//! cursor and device stay consistent.

use proptest::prelude::*;
use tapedeck_core::{Track, TrackId};
use tapedeck_playback::{DeviceEvent, HeadlessDevice, PlaybackDevice, Sequencer};

// ===== Helpers =====

#[derive(Debug, Clone)]
enum Command {
    Replace(usize),
    Append(usize),
    Remove(usize),
    Select(usize),
    Next(bool),
    Previous(bool),
    Toggle,
    Ended,
    Playing,
    Pause,
    Reconcile,
}

fn arbitrary_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        (0usize..5).prop_map(Command::Replace),
        (0usize..4).prop_map(Command::Append),
        (0usize..8).prop_map(Command::Remove),
        (0usize..8).prop_map(Command::Select),
        any::<bool>().prop_map(Command::Next),
        any::<bool>().prop_map(Command::Previous),
        Just(Command::Toggle),
        Just(Command::Ended),
        Just(Command::Playing),
        Just(Command::Pause),
        Just(Command::Reconcile),
    ]
}

struct Harness {
    sequencer: Sequencer<HeadlessDevice>,
    next_id: usize,
}

impl Harness {
    fn new() -> Self {
        Self {
            sequencer: Sequencer::new(HeadlessDevice::new()),
            next_id: 0,
        }
    }

    fn tracks(&mut self, count: usize) -> Vec<Track> {
        (0..count)
            .map(|_| {
                self.next_id += 1;
                Track::new(
                    TrackId::new(format!("t-{}", self.next_id)),
                    format!("Track {}", self.next_id),
                    format!("https://streams.example/{}.mp3", self.next_id),
                )
            })
            .collect()
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Replace(count) => {
                let tracks = self.tracks(count);
                self.sequencer.replace(tracks);
            }
            Command::Append(count) => {
                let tracks = self.tracks(count);
                self.sequencer.append(tracks);
            }
            Command::Remove(index) => {
                if let Some(id) = self.sequencer.tracks().get(index).map(|t| t.id.clone()) {
                    self.sequencer.remove(&id).unwrap();
                }
            }
            Command::Select(index) => {
                let _ = self.sequencer.select_index(index);
            }
            Command::Next(resume) => self.sequencer.next(resume),
            Command::Previous(resume) => self.sequencer.previous(resume),
            Command::Toggle => self.sequencer.toggle_playback(),
            Command::Ended => self.sequencer.handle_device_event(DeviceEvent::Ended),
            Command::Playing => self.sequencer.handle_device_event(DeviceEvent::Playing),
            Command::Pause => self.sequencer.handle_device_event(DeviceEvent::Pause),
            Command::Reconcile => {
                self.sequencer.reconcile_autoplay();
            }
        }
    }
}

// ===== Property Tests =====

proptest! {
    /// Property: cursor is always a valid index, or 0 for an empty queue
    #[test]
    fn cursor_stays_in_bounds(commands in prop::collection::vec(arbitrary_command(), 1..60)) {
        let mut harness = Harness::new();

        for command in commands {
            harness.apply(command);

            let len = harness.sequencer.tracks().len();
            let cursor = harness.sequencer.cursor();
            if len == 0 {
                prop_assert_eq!(cursor, 0);
                prop_assert!(harness.sequencer.current_track().is_none());
            } else {
                prop_assert!(cursor < len);
                prop_assert!(harness.sequencer.current_track().is_some());
            }
        }
    }

    /// Property: the device always holds the current track's stream
    #[test]
    fn device_source_follows_current_track(commands in prop::collection::vec(arbitrary_command(), 1..60)) {
        let mut harness = Harness::new();

        for command in commands {
            harness.apply(command);

            let expected = harness.sequencer.current_track().map(|t| t.stream_url.clone());
            prop_assert_eq!(harness.sequencer.device().source().map(str::to_string), expected);
        }
    }

    /// Property: play requests always target the track current at issue time
    #[test]
    fn play_requests_target_current_track(commands in prop::collection::vec(arbitrary_command(), 1..60)) {
        let mut harness = Harness::new();

        for command in commands {
            let before = harness.sequencer.device().requests().len();
            harness.apply(command);
            let requests = harness.sequencer.device().requests();

            if requests.len() > before {
                let current = harness.sequencer.current_track().map(|t| t.id.clone());
                prop_assert_eq!(requests.last().map(|r| r.track_id.clone()), current);
            }
        }
    }

    /// Property: an empty queue leaves the device paused with nothing queued
    #[test]
    fn empty_queue_is_fully_reset(commands in prop::collection::vec(arbitrary_command(), 1..40)) {
        let mut harness = Harness::new();

        for command in commands {
            harness.apply(command);
        }
        harness.sequencer.clear();

        prop_assert!(harness.sequencer.device().is_paused());
        prop_assert!(!harness.sequencer.pending_autoplay());
        prop_assert!(!harness.sequencer.is_playing());
        prop_assert_eq!(harness.sequencer.status().progress_percent, 0.0);
    }
}
