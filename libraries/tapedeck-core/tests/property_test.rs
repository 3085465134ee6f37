//! Property-based tests for id assignment and export
//!
//! Uses proptest to check that runtime ids never collide and that the
//! export keeps playlist order and display fields.

use proptest::prelude::*;
use std::collections::HashSet;
use tapedeck_core::{
    assign_runtime_ids, export_playlist, ExportedTrack, SessionIdGenerator, TrackDraft,
};

// ===== Helpers =====

fn arbitrary_draft() -> impl Strategy<Value = TrackDraft> {
    (
        "[0-9]{1,3}",
        "[A-Za-z ]{0,20}",
        "[a-z0-9]{1,12}",
        proptest::option::of("[A-Za-z ]{1,20}"),
        proptest::option::of("[a-z0-9]{1,12}"),
    )
        .prop_map(|(source_id, title, path, artist, artwork)| TrackDraft {
            source_id,
            title,
            artist,
            stream_url: format!("https://streams.example/{}.mp3", path),
            artwork: artwork.map(|a| format!("https://art.example/{}.jpg", a)),
        })
}

// ===== Property Tests =====

proptest! {
    /// Property: ids stay unique across any number of imports
    #[test]
    fn runtime_ids_never_collide(
        seed in any::<i64>(),
        batches in prop::collection::vec(prop::collection::vec(arbitrary_draft(), 0..10), 1..6)
    ) {
        let mut ids = SessionIdGenerator::with_seed("track", seed);
        let mut seen = HashSet::new();
        let mut total = 0;

        for drafts in batches {
            total += drafts.len();
            for track in assign_runtime_ids(drafts, &mut ids) {
                seen.insert(track.id);
            }
        }

        prop_assert_eq!(seen.len(), total);
    }

    /// Property: export is one entry per track, in playlist order
    #[test]
    fn export_preserves_order_and_fields(drafts in prop::collection::vec(arbitrary_draft(), 0..20)) {
        let mut ids = SessionIdGenerator::with_seed("track", 0);
        let tracks = assign_runtime_ids(drafts, &mut ids);

        let exported = export_playlist(&tracks);

        prop_assert_eq!(exported.len(), tracks.len());
        for (entry, track) in exported.iter().zip(&tracks) {
            let expected = ExportedTrack {
                title: track.title.clone(),
                stream_url: track.stream_url.clone(),
                artist: track.artist.clone(),
                artwork: track.artwork.clone(),
            };
            prop_assert_eq!(entry, &expected);
        }
    }
}
