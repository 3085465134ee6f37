//! Structured extraction from parsed JSON

use crate::rules::{
    resolve_source_id, ARTIST_RULE, ARTWORK_RULE, PLAYLIST_FIELD, STREAM_URL_RULE, TITLE_RULE,
};
use serde_json::Value;
use tapedeck_core::TrackDraft;

/// Candidate entry list: the root array, or the root object's `tracks` array
fn candidate_entries(root: &Value) -> &[Value] {
    match root {
        Value::Array(entries) => entries,
        Value::Object(fields) => fields
            .get(PLAYLIST_FIELD)
            .and_then(Value::as_array)
            .map_or(&[][..], Vec::as_slice),
        _ => &[],
    }
}

fn positional_title(index: usize) -> String {
    format!("Track {}", index + 1)
}

/// Optional display fields treat an empty string as absent
fn optional_field(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Extract one draft, or `None` when the entry carries no stream URL
fn extract_entry(index: usize, entry: &Value) -> Option<TrackDraft> {
    match entry {
        Value::String(url) if !url.is_empty() => Some(TrackDraft::new(
            index.to_string(),
            positional_title(index),
            url.clone(),
        )),
        Value::Object(fields) => {
            let stream_url = STREAM_URL_RULE.resolve(fields).filter(|url| !url.is_empty())?;

            Some(TrackDraft {
                source_id: resolve_source_id(fields).unwrap_or_else(|| index.to_string()),
                title: TITLE_RULE
                    .resolve(fields)
                    .map_or_else(|| positional_title(index), str::to_string),
                artist: optional_field(ARTIST_RULE.resolve(fields)),
                stream_url: stream_url.to_string(),
                artwork: optional_field(ARTWORK_RULE.resolve(fields)),
            })
        }
        _ => None,
    }
}

/// Extract every playable entry in source order
pub(crate) fn extract_tracks(root: &Value) -> Vec<TrackDraft> {
    let entries = candidate_entries(root);
    let drafts: Vec<TrackDraft> = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let draft = extract_entry(index, entry);
            if draft.is_none() {
                tracing::debug!(index, "Dropping playlist entry without a stream URL");
            }
            draft
        })
        .collect();

    tracing::debug!(
        candidates = entries.len(),
        accepted = drafts.len(),
        "Extracted tracks from JSON playlist"
    );

    drafts
}
