//! Property-based tests for the normalizer
//!
//! Uses proptest to verify ordering, dropping and round-trip invariants.

use proptest::prelude::*;
use serde_json::{json, Value};
use tapedeck_core::{export_playlist_json, SequentialIdGenerator};
use tapedeck_importer::{normalize, normalize_with_ids, ImportError};

// ===== Helpers =====

fn arbitrary_url() -> impl Strategy<Value = String> {
    ("https?", "[a-z]{1,8}", "[a-z0-9]{1,8}")
        .prop_map(|(scheme, host, path)| format!("{}://{}.example/{}.mp3", scheme, host, path))
}

/// Display text, sometimes empty
fn arbitrary_display_field() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(prop_oneof![Just(String::new()), "[A-Za-z ]{1,20}"])
}

/// An entry carrying its URL under one of the accepted aliases
fn arbitrary_playable_entry() -> impl Strategy<Value = (Value, String)> {
    (
        arbitrary_url(),
        0usize..3,
        proptest::option::of("[A-Za-z ]{1,20}"),
        arbitrary_display_field(),
        arbitrary_display_field(),
    )
        .prop_map(|(url, alias, title, artist, artwork)| {
            let key = ["streamUrl", "url", "href"][alias];
            let mut entry = json!({ key: url });
            if let Some(title) = title {
                entry["title"] = json!(title);
            }
            if let Some(artist) = artist {
                entry["artist"] = json!(artist);
            }
            if let Some(artwork) = artwork {
                entry["cover"] = json!(artwork);
            }
            (entry, url)
        })
}

fn arbitrary_unplayable_entry() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<i64>().prop_map(|n| json!(n)),
        "[A-Za-z ]{1,20}".prop_map(|title| json!({ "title": title })),
        Just(json!({ "streamUrl": 3, "url": null })),
    ]
}

// ===== Property Tests =====

proptest! {
    /// Property: one track per playable entry, in source order
    #[test]
    fn playable_entries_preserve_order(entries in prop::collection::vec(arbitrary_playable_entry(), 1..30)) {
        let urls: Vec<String> = entries.iter().map(|(_, url)| url.clone()).collect();
        let raw = Value::Array(entries.into_iter().map(|(entry, _)| entry).collect()).to_string();

        let drafts = normalize(&raw).unwrap();

        prop_assert_eq!(drafts.len(), urls.len());
        for (draft, url) in drafts.iter().zip(&urls) {
            prop_assert_eq!(&draft.stream_url, url);
        }
    }

    /// Property: unplayable entries are dropped silently
    #[test]
    fn unplayable_entries_are_dropped(
        playable in prop::collection::vec(arbitrary_playable_entry(), 0..10),
        unplayable in prop::collection::vec(arbitrary_unplayable_entry(), 1..10)
    ) {
        let expected = playable.len();
        let mut entries: Vec<Value> = playable.into_iter().map(|(entry, _)| entry).collect();
        entries.extend(unplayable);
        let raw = Value::Array(entries).to_string();

        match normalize(&raw) {
            Ok(drafts) => prop_assert_eq!(drafts.len(), expected),
            Err(e) => {
                prop_assert_eq!(expected, 0);
                prop_assert_eq!(e, ImportError::NoPlayableEntries);
            }
        }
    }

    /// Property: export then re-import preserves display fields
    #[test]
    fn export_round_trip_preserves_fields(entries in prop::collection::vec(arbitrary_playable_entry(), 1..20)) {
        let raw = Value::Array(entries.into_iter().map(|(entry, _)| entry).collect()).to_string();
        let mut ids = SequentialIdGenerator::new("t");

        let tracks = normalize_with_ids(&raw, &mut ids).unwrap();
        let exported = export_playlist_json(&tracks).unwrap();
        let reimported = normalize_with_ids(&exported, &mut ids).unwrap();

        prop_assert_eq!(tracks.len(), reimported.len());
        for (before, after) in tracks.iter().zip(&reimported) {
            prop_assert_eq!(&before.title, &after.title);
            prop_assert_eq!(&before.stream_url, &after.stream_url);
            prop_assert_eq!(&before.artist, &after.artist);
            prop_assert_eq!(&before.artwork, &after.artwork);
        }
    }

    /// Property: plain text yields exactly the embedded URLs
    #[test]
    fn plain_text_urls_are_found(
        urls in prop::collection::vec(arbitrary_url(), 1..10),
        filler in "[a-z]{1,10}"
    ) {
        let raw = urls
            .iter()
            .map(|url| format!("{} {}", filler, url))
            .collect::<Vec<_>>()
            .join("\n");

        let drafts = normalize(&raw).unwrap();

        prop_assert_eq!(drafts.len(), urls.len());
        for (index, (draft, url)) in drafts.iter().zip(&urls).enumerate() {
            prop_assert_eq!(&draft.stream_url, url);
            prop_assert_eq!(&draft.title, &format!("Stream {}", index + 1));
        }
    }
}
