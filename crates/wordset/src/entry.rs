use serde::Serialize;

use crate::document::{Meaning, WordRecord};

/// Part of speech recorded when the source does not provide one.
pub const UNKNOWN_POS: &str = "unknown";

/// The compact output unit stored per word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionEntry {
    pub pos: String,
    pub def: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ex: Option<String>,
}

/// Trim surrounding whitespace and lowercase.
pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl DefinitionEntry {
    /// Filter one raw meaning down to an output entry.
    ///
    /// A blank definition produces nothing. A missing or blank part of
    /// speech becomes [`UNKNOWN_POS`], a blank example is dropped.
    pub fn from_meaning(meaning: &Meaning) -> Option<Self> {
        let def = meaning.def.trim();
        if def.is_empty() {
            return None;
        }
        let pos = match meaning.speech_part.as_deref().map(str::trim) {
            Some(part) if !part.is_empty() => part.to_owned(),
            _ => UNKNOWN_POS.to_owned(),
        };
        let ex = meaning
            .example
            .as_deref()
            .map(str::trim)
            .filter(|example| !example.is_empty())
            .map(str::to_owned);
        Some(DefinitionEntry {
            pos,
            def: def.to_owned(),
            ex,
        })
    }
}

impl WordRecord {
    /// All valid definition entries of this record, in source order.
    pub fn definition_entries(&self) -> Vec<DefinitionEntry> {
        self.meanings
            .iter()
            .filter_map(DefinitionEntry::from_meaning)
            .collect()
    }
}
