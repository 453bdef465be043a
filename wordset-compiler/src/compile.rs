use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use wordset::load_document;

use crate::aggregate::Aggregate;

/// Outcome of one compilation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub files: usize,
    pub words: usize,
    pub bytes: u64,
}

/// Scan `input_dir`, merge every parsable document and write the compact
/// artifact to `output`.
///
/// A file that fails to parse is reported and skipped; a missing input
/// directory or one without any `*.json` files aborts the run before the
/// output file is touched.
pub fn run(input_dir: &Path, output: &Path) -> anyhow::Result<Summary> {
    let files = find_document_files(input_dir)?;
    println!("Found {} JSON files to process...", files.len());

    let mut aggregate = Aggregate::new();
    for path in &files {
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        println!("Processing {name}...");
        match load_document(path) {
            Ok(document) => aggregate.merge_document(&document),
            Err(error) => println!("  Warning: Could not parse {name}: {error}"),
        }
    }

    println!();
    println!("Processed {} unique words", aggregate.word_count());
    println!("Writing to {}...", output.display());
    let bytes = aggregate.write_to(output)?;
    println!("Done! Output file size: {:.1} MB", bytes as f64 / 1024.0 / 1024.0);

    Ok(Summary {
        files: files.len(),
        words: aggregate.word_count(),
        bytes,
    })
}

/// All `*.json` files directly inside `dir`, sorted by file name so that
/// repeated runs visit documents in the same order.
fn find_document_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("directory not found: {}", dir.display());
    }

    let entries =
        fs::read_dir(dir).with_context(|| format!("could not read {}", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        bail!("no JSON files found in {}", dir.display());
    }
    Ok(files)
}
