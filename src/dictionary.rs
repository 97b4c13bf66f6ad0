use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::warn;

const DEFAULT_DICTIONARY: &str = include_str!("../data/default.json");

/// Normalizes a dictionary key: trims, collapses whitespace runs to a single
/// space and case-folds.
///
/// ```
/// assert_eq!(lexmap::normalize_key("  Good \t Morning "), "good morning");
/// ```
pub fn normalize_key(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// A translation stored for a single word.
///
/// Files may hold either a bare string or an object carrying the translation
/// in its `translation` field (`primary` is accepted too) alongside free-form
/// annotations such as `pos` or `notes`. Anything else is kept as-is so it
/// survives a save, but never resolves to a translation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WordEntry {
    Plain(String),
    Structured(StructuredEntry),
    Other(Value),
}

/// An object entry holding its translation in `translation` or, failing
/// that, in `primary`. All other fields are kept untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StructuredEntry {
    fields: Map<String, Value>,
}

impl StructuredEntry {
    /// The first string among `translation` and `primary`
    pub fn translation(&self) -> Option<&str> {
        ["translation", "primary"]
            .iter()
            .find_map(|field| self.fields.get(*field).and_then(Value::as_str))
    }

    /// Part of speech annotation, when present
    pub fn pos(&self) -> Option<&str> {
        self.fields.get("pos").and_then(Value::as_str)
    }
}

impl WordEntry {
    /// The canonical translation of this entry, if it has one.
    pub fn translation(&self) -> Option<&str> {
        match self {
            WordEntry::Plain(text) => Some(text),
            WordEntry::Structured(entry) => entry.translation(),
            WordEntry::Other(_) => None,
        }
    }
}

impl From<&str> for WordEntry {
    fn from(text: &str) -> Self {
        WordEntry::Plain(text.to_string())
    }
}

impl From<Value> for WordEntry {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => WordEntry::Plain(text),
            Value::Object(fields) => {
                let entry = StructuredEntry { fields };
                if entry.translation().is_some() {
                    WordEntry::Structured(entry)
                } else {
                    WordEntry::Other(Value::Object(entry.fields))
                }
            }
            other => WordEntry::Other(other),
        }
    }
}

impl<'de> Deserialize<'de> for WordEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(WordEntry::from)
    }
}

/// Word and phrase mappings from English to the target language.
///
/// Keys are always stored normalized (see [`normalize_key`]); values keep
/// whatever casing they were given. Deserializing never fails on shape:
/// missing or malformed `meta`, `words` and `phrases` sections become empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Dictionary {
    meta: Map<String, Value>,
    words: BTreeMap<String, WordEntry>,
    phrases: BTreeMap<String, String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary::default()
    }

    /// The dictionary shipped with the crate, used when nothing has been
    /// stored yet and as the target of a reset.
    pub fn builtin() -> Self {
        serde_json::from_str(DEFAULT_DICTIONARY).unwrap_or_default()
    }

    pub fn meta(&self) -> &Map<String, Value> {
        &self.meta
    }

    pub fn words(&self) -> &BTreeMap<String, WordEntry> {
        &self.words
    }

    pub fn phrases(&self) -> &BTreeMap<String, String> {
        &self.phrases
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.phrases.is_empty()
    }

    /// Adds or replaces a word entry, returning the previous one.
    pub fn insert_word(&mut self, word: &str, entry: impl Into<WordEntry>) -> Option<WordEntry> {
        self.words.insert(normalize_key(word), entry.into())
    }

    /// Adds or replaces a phrase, returning the previous translation.
    pub fn insert_phrase(&mut self, phrase: &str, translation: &str) -> Option<String> {
        self.phrases
            .insert(normalize_key(phrase), translation.to_string())
    }

    /// Looks up a single word, case-insensitively.
    pub fn lookup_word(&self, word: &str) -> Option<&str> {
        self.words
            .get(&word.to_lowercase())
            .and_then(WordEntry::translation)
    }

    /// Looks up a whole phrase after normalizing it.
    pub fn lookup_phrase(&self, text: &str) -> Option<&str> {
        self.phrases.get(&normalize_key(text)).map(String::as_str)
    }

    /// Merges every entry of `other` into this dictionary, overwriting
    /// existing keys. Returns the number of word and phrase entries taken.
    pub fn merge(&mut self, other: Dictionary) -> usize {
        let count = other.words.len() + other.phrases.len();
        self.meta.extend(other.meta);
        self.words.extend(other.words);
        self.phrases.extend(other.phrases);
        count
    }
}

impl From<Value> for Dictionary {
    fn from(value: Value) -> Self {
        let Value::Object(mut root) = value else {
            warn!("Dictionary root is not an object, using an empty dictionary");
            return Dictionary::default();
        };

        let meta = match root.remove("meta") {
            Some(Value::Object(meta)) => meta,
            Some(Value::Null) | None => Map::new(),
            Some(_) => {
                warn!("Dictionary 'meta' is not an object, ignoring it");
                Map::new()
            }
        };

        let mut words = BTreeMap::new();
        for (key, value) in section(&mut root, "words") {
            let key = normalize_key(&key);
            if !key.is_empty() {
                words.insert(key, WordEntry::from(value));
            }
        }

        let mut phrases = BTreeMap::new();
        for (key, value) in section(&mut root, "phrases") {
            let key = normalize_key(&key);
            match value {
                Value::String(translation) => {
                    if !key.is_empty() {
                        phrases.insert(key, translation);
                    }
                }
                _ => warn!("Dropping phrase '{}': translation is not a string", key),
            }
        }

        Dictionary {
            meta,
            words,
            phrases,
        }
    }
}

fn section(root: &mut Map<String, Value>, name: &str) -> Map<String, Value> {
    match root.remove(name) {
        Some(Value::Object(entries)) => entries,
        Some(Value::Null) | None => Map::new(),
        Some(_) => {
            warn!("Dictionary '{}' is not an object, treating it as empty", name);
            Map::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Dictionary {
        Dictionary::from(json!({
            "meta": { "name": "test" },
            "words": {
                "hello": "ya",
                "Friend": { "translation": "kalo", "pos": "noun" },
                "old": { "primary": "veru" },
                "broken": 42,
                "hollow": { "pos": "adj" }
            },
            "phrases": {
                "  Good   Morning ": "yara muna",
                "bad": 7
            }
        }))
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("  Good \t Morning "), "good morning");
        assert_eq!(normalize_key("HELLO"), "hello");
        assert_eq!(normalize_key("   "), "");
    }

    #[test]
    fn test_lookup_plain_and_structured() {
        let dict = sample();
        assert_eq!(dict.lookup_word("hello"), Some("ya"));
        assert_eq!(dict.lookup_word("HeLLo"), Some("ya"));
        assert_eq!(dict.lookup_word("friend"), Some("kalo"));
        assert_eq!(dict.lookup_word("old"), Some("veru"));
    }

    #[test]
    fn test_unusable_entries_are_misses() {
        let dict = sample();
        assert_eq!(dict.lookup_word("broken"), None);
        assert_eq!(dict.lookup_word("hollow"), None);
        assert_eq!(dict.lookup_word("missing"), None);
        // Kept for persistence even though they never resolve.
        assert_eq!(dict.word_count(), 5);
    }

    #[test]
    fn test_structured_annotations() {
        let dict = sample();
        match dict.words().get("friend") {
            Some(WordEntry::Structured(entry)) => assert_eq!(entry.pos(), Some("noun")),
            other => panic!("unexpected entry: {:?}", other),
        }
    }

    #[test]
    fn test_phrase_keys_are_normalized() {
        let dict = sample();
        assert_eq!(dict.lookup_phrase("good morning"), Some("yara muna"));
        assert_eq!(dict.lookup_phrase("  GOOD\nmorning"), Some("yara muna"));
        assert_eq!(dict.lookup_phrase("bad"), None);
        assert_eq!(dict.phrase_count(), 1);
    }

    #[test]
    fn test_missing_sections_become_empty() {
        let dict = Dictionary::from(json!({ "words": "not a map", "phrases": null }));
        assert!(dict.is_empty());
        assert!(dict.meta().is_empty());

        let dict = Dictionary::from(json!(["not", "an", "object"]));
        assert!(dict.is_empty());
    }

    #[test]
    fn test_structured_entry_with_both_primary_fields() {
        let dict: Dictionary = serde_json::from_str(
            r#"{"words": {
                "a": {"primary": "p", "translation": "t"},
                "b": {"translation": 5, "primary": "p"},
                "c": {"translation": "t", "primary": 5}
            }}"#,
        )
        .unwrap();
        assert_eq!(dict.lookup_word("a"), Some("t"));
        assert_eq!(dict.lookup_word("b"), Some("p"));
        assert_eq!(dict.lookup_word("c"), Some("t"));
    }

    #[test]
    fn test_merge_overwrites_and_counts() {
        let mut dict = sample();
        let mut other = Dictionary::new();
        other.insert_word("Hello", "yo");
        other.insert_word("cat", "miri");
        other.insert_phrase("Thank  you", "danita");

        assert_eq!(dict.merge(other), 3);
        assert_eq!(dict.lookup_word("hello"), Some("yo"));
        assert_eq!(dict.lookup_word("cat"), Some("miri"));
        assert_eq!(dict.lookup_phrase("thank you"), Some("danita"));
    }

    #[test]
    fn test_serialized_shape_round_trips() {
        let dict = sample();
        let json = serde_json::to_value(&dict).unwrap();
        assert_eq!(json["words"]["hello"], json!("ya"));
        assert_eq!(json["words"]["friend"]["translation"], json!("kalo"));
        assert_eq!(json["phrases"]["good morning"], json!("yara muna"));

        let reloaded: Dictionary = serde_json::from_value(json).unwrap();
        assert_eq!(reloaded, dict);
    }

    #[test]
    fn test_builtin_dictionary() {
        let dict = Dictionary::builtin();
        assert_eq!(dict.lookup_word("hello"), Some("ya"));
        assert_eq!(dict.lookup_phrase("Good Morning"), Some("yara muna"));
    }
}
