use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::data::VersionTag;

/// Typed result of one poll, before version projection and encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Version the client asked for; decides the gated fields
    pub version: VersionTag,
    /// First dump line, verbatim (e.g. `[Playing]`)
    pub player_state: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Track length as written in the dump
    pub length: String,
    /// Reported position in seconds, chosen by the position tracker
    pub position: u32,
    /// Four-digit year, empty when the title carries none
    pub year: String,
    pub loved: bool,
    /// 0-100 in steps of 10
    pub rating: u8,
    pub art_url: String,
    pub lyrics: String,
    pub is_accurate: bool,
    pub can_sync: bool,
}

/// Ordered, percent-encoded key/value record handed to clients.
///
/// Keys keep insertion order on serialization so that consumers diffing
/// raw output see a stable layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedSummary {
    entries: Vec<(&'static str, String)>,
}

impl EncodedSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field; the value must already be encoded
    pub fn push(&mut self, key: &'static str, encoded_value: String) {
        self.entries.push((key, encoded_value));
    }

    /// Replace the value of an existing field, returning whether it was present
    pub fn replace(&mut self, key: &str, encoded_value: String) -> bool {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => {
                entry.1 = encoded_value;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for EncodedSummary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_keeps_insertion_order() {
        let mut encoded = EncodedSummary::new();
        encoded.push("Title", "Allegro".to_string());
        encoded.push("Artist", "Zaz".to_string());
        encoded.push("Album", "Paris".to_string());

        let json = serde_json::to_string(&encoded).unwrap();
        assert_eq!(json, r#"{"Title":"Allegro","Artist":"Zaz","Album":"Paris"}"#);
    }

    #[test]
    fn test_replace_existing_only() {
        let mut encoded = EncodedSummary::new();
        encoded.push("Position", "11".to_string());

        assert!(encoded.replace("Position", "xyzzy".to_string()));
        assert!(!encoded.replace("Length", "0".to_string()));
        assert_eq!(encoded.get("Position"), Some("xyzzy"));
        assert_eq!(encoded.len(), 1);
    }
}
