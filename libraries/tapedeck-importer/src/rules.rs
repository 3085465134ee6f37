//! Field accessor rules
//!
//! Each logical track field is read from an ordered list of accepted keys.
//! The first key holding a JSON string wins, even when that string is
//! empty; keys holding any other JSON type are skipped.

use serde_json::{Map, Value};

/// Array-valued key looked up when the root of a JSON document is an object
pub const PLAYLIST_FIELD: &str = "tracks";

/// Ordered accessor rule for one logical field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Logical field name, for logging
    pub name: &'static str,
    /// Accepted keys in priority order
    pub keys: &'static [&'static str],
}

impl FieldRule {
    pub const fn new(name: &'static str, keys: &'static [&'static str]) -> Self {
        Self { name, keys }
    }

    /// Resolve the rule against a JSON object
    pub fn resolve<'a>(&self, entry: &'a Map<String, Value>) -> Option<&'a str> {
        self.keys.iter().find_map(|key| match entry.get(*key)? {
            Value::String(value) => Some(value.as_str()),
            _ => {
                tracing::trace!(field = self.name, key = *key, "Skipping non-string value");
                None
            }
        })
    }
}

pub const STREAM_URL_RULE: FieldRule = FieldRule::new("streamUrl", &["streamUrl", "url", "href"]);
pub const TITLE_RULE: FieldRule = FieldRule::new("title", &["title", "name"]);
pub const ARTIST_RULE: FieldRule = FieldRule::new("artist", &["artist", "performer"]);
pub const ARTWORK_RULE: FieldRule = FieldRule::new("artwork", &["artwork", "cover"]);

/// Source id coerced to a string
///
/// Strings, numbers and booleans are accepted; anything else counts as absent.
pub fn resolve_source_id(entry: &Map<String, Value>) -> Option<String> {
    match entry.get("id")? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        Value::Bool(id) => Some(id.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn first_string_key_wins() {
        let entry = object(json!({ "url": "https://b", "href": "https://c" }));
        assert_eq!(STREAM_URL_RULE.resolve(&entry), Some("https://b"));
    }

    #[test]
    fn non_string_values_are_skipped() {
        let entry = object(json!({ "streamUrl": 42, "href": "https://c" }));
        assert_eq!(STREAM_URL_RULE.resolve(&entry), Some("https://c"));
    }

    #[test]
    fn empty_string_still_claims_the_field() {
        let entry = object(json!({ "streamUrl": "", "url": "https://b" }));
        assert_eq!(STREAM_URL_RULE.resolve(&entry), Some(""));
    }

    #[test]
    fn missing_keys_resolve_to_none() {
        let entry = object(json!({ "title": "Song" }));
        assert_eq!(ARTIST_RULE.resolve(&entry), None);
        assert_eq!(ARTWORK_RULE.resolve(&entry), None);
    }

    #[test]
    fn source_id_coercion() {
        assert_eq!(resolve_source_id(&object(json!({ "id": 7 }))), Some("7".to_string()));
        assert_eq!(resolve_source_id(&object(json!({ "id": "a" }))), Some("a".to_string()));
        assert_eq!(resolve_source_id(&object(json!({ "id": null }))), None);
        assert_eq!(resolve_source_id(&object(json!({}))), None);
    }
}
