/// ID types for Tapedeck tracks
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Track identifier
///
/// Unique within a playlist for the lifetime of the session. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Create a new track ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TrackId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Source of runtime track ids
///
/// Injected wherever tracks enter a playlist so tests can supply
/// deterministic ids.
pub trait IdGenerator {
    /// Produce the next id. Must never repeat within the generator's lifetime.
    fn next_id(&mut self) -> TrackId;
}

/// Process-lifetime id generator
///
/// Ids look like `track-{seed}-{counter}`: the seed is the wall-clock
/// time in milliseconds at construction and the counter increases on
/// every call, so repeated imports within one run never collide.
#[derive(Debug, Clone)]
pub struct SessionIdGenerator {
    prefix: String,
    seed: i64,
    counter: u64,
}

impl SessionIdGenerator {
    /// Create a generator seeded from the current time
    pub fn new() -> Self {
        Self::with_seed("track", Utc::now().timestamp_millis())
    }

    /// Create a generator with an explicit prefix and seed
    pub fn with_seed(prefix: impl Into<String>, seed: i64) -> Self {
        Self {
            prefix: prefix.into(),
            seed,
            counter: 0,
        }
    }
}

impl Default for SessionIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SessionIdGenerator {
    fn next_id(&mut self) -> TrackId {
        let id = TrackId(format!("{}-{}-{}", self.prefix, self.seed, self.counter));
        self.counter += 1;
        id
    }
}

/// Deterministic generator producing `{prefix}-1`, `{prefix}-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> TrackId {
        let id = TrackId(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}
