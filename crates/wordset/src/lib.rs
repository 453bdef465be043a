use std::fs;
use std::path::Path;

mod document;
mod entry;

pub use document::{Document, Meaning, WordRecord};
pub use entry::{normalize_word, DefinitionEntry};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("could not read file: {0}")]
    Read(#[from] std::io::Error),
    #[error("not a valid wordset document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load and parse one wordset data file.
pub fn load_document(path: &Path) -> Result<Document, DocumentError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
