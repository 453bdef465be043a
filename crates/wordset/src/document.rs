use std::collections::BTreeMap;

use serde::Deserialize;

use crate::entry::normalize_word;

/// One parsed data file: word key to raw record, ordered by key.
pub type Document = BTreeMap<String, WordRecord>;

/// A single word as it appears in the source data, before any filtering.
///
/// Wordset records carry more fields than these (ids, editor metadata);
/// everything not listed here is ignored during parsing.
#[derive(Debug, Deserialize)]
pub struct WordRecord {
    pub word: Option<String>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

/// One raw definition of a word record.
#[derive(Debug, Deserialize)]
pub struct Meaning {
    #[serde(default)]
    pub def: String,
    pub speech_part: Option<String>,
    pub example: Option<String>,
}

impl WordRecord {
    /// The word this record belongs under: the display form when present
    /// and non-empty, the source key otherwise, normalized either way.
    pub fn normalized_word(&self, key: &str) -> String {
        let raw = match self.word.as_deref() {
            Some(word) if !word.is_empty() => word,
            _ => key,
        };
        normalize_word(raw)
    }
}
