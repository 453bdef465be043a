use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use wordset::{DefinitionEntry, Document, WordRecord};

/// The merged dictionary being built up across documents.
///
/// Words are stored under their normalized form; every document merged in
/// appends its valid entries after the ones already collected, so entry
/// order follows document order then in-document order.
#[derive(Debug, Default)]
pub struct Aggregate {
    words: BTreeMap<String, Vec<DefinitionEntry>>,
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge every word record of one parsed document.
    pub fn merge_document(&mut self, document: &Document) {
        for (key, record) in document {
            self.merge_record(key, record);
        }
    }

    /// Merge one word record, keyed by its source key.
    ///
    /// Records without a single usable definition and words that normalize
    /// to an empty string contribute nothing.
    pub fn merge_record(&mut self, key: &str, record: &WordRecord) {
        let word = record.normalized_word(key);
        if word.is_empty() {
            return;
        }
        let entries = record.definition_entries();
        if entries.is_empty() {
            return;
        }
        self.words.entry(word).or_default().extend(entries);
    }

    /// Number of unique words collected so far.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Write the compact JSON artifact; returns its size in bytes.
    pub fn write_to(&self, path: &Path) -> anyhow::Result<u64> {
        let encoded = serde_json::to_string(&self.words).context("could not encode dictionary")?;
        fs::write(path, &encoded)
            .with_context(|| format!("could not write {}", path.display()))?;
        Ok(encoded.len() as u64)
    }
}
