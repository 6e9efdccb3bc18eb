//! Seed word collection from the command line and from word files.

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::WordforgeError;

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub fn parse_word_list(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read one seed word per line, trimming lines and dropping blank ones.
pub fn read_seed_file(path: &Path) -> Result<Vec<String>, WordforgeError> {
    let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => WordforgeError::SeedFileNotFound {
            path: path.to_path_buf(),
        },
        _ => WordforgeError::SeedFileRead {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();

    if words.is_empty() {
        warn!("Seed file {} contains no words", path.display());
    } else {
        debug!("Read {} seed words from {}", words.len(), path.display());
    }
    Ok(words)
}

/// Seed words from `-w` followed by those from `-f`.
pub fn collect_seeds(
    words: Option<&str>,
    file: Option<&Path>,
) -> Result<Vec<String>, WordforgeError> {
    let mut seeds = words.map(parse_word_list).unwrap_or_default();
    if let Some(path) = file {
        seeds.extend(read_seed_file(path)?);
    }
    Ok(seeds)
}
