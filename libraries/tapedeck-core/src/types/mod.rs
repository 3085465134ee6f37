mod ids;
mod track;

pub use ids::{IdGenerator, SequentialIdGenerator, SessionIdGenerator, TrackId};
pub use track::{assign_runtime_ids, Track, TrackDraft};
