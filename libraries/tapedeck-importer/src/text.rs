//! Free-text URL scanning

use once_cell::sync::Lazy;
use regex::Regex;
use tapedeck_core::TrackDraft;

static URL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());

/// Trailing noise left behind when links are pasted from prose or JSON-ish text
const TRAILING_NOISE: &[char] = &[')', '"', ','];

/// Every http(s) URL in the text, trailing noise removed, empties discarded
pub(crate) fn scan_urls(text: &str) -> Vec<&str> {
    URL_REGEX
        .find_iter(text)
        .map(|m| {
            m.as_str()
                .trim_end_matches(|c: char| c.is_whitespace() || TRAILING_NOISE.contains(&c))
        })
        .filter(|url| !url.is_empty())
        .collect()
}

/// One `Stream {n}` draft per URL found in the text
pub(crate) fn extract_streams(text: &str) -> Vec<TrackDraft> {
    let drafts: Vec<TrackDraft> = scan_urls(text)
        .into_iter()
        .enumerate()
        .map(|(index, url)| {
            TrackDraft::new(index.to_string(), format!("Stream {}", index + 1), url.trim())
        })
        .collect();

    tracing::debug!(count = drafts.len(), "Extracted stream URLs from plain text");
    drafts
}
