//! Word list loading utilities
//!
//! Lists are plain text (one word per line, `#` comments allowed) or JSON in
//! the `{"words": [...]}` shape, picked by the `.json` extension.

use super::WordList;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON word list {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("word list {} contains no valid words", .0.display())]
    Empty(PathBuf),
}

#[derive(Deserialize)]
struct WordFile {
    words: Vec<String>,
}

/// Load a word list from a file
///
/// Invalid entries are skipped; a file without a single valid word is an error.
///
/// # Errors
///
/// Returns `WordListError` if the file cannot be read, is malformed JSON, or
/// holds no valid words.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let list = load_from_file("static/words.json").unwrap();
/// println!("Loaded {} words", list.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let list = if is_json {
        parse_json(&content).map_err(|source| WordListError::Json {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        parse_text(&content)
    };

    if list.is_empty() {
        return Err(WordListError::Empty(path.to_path_buf()));
    }

    info!(
        path = %path.display(),
        words = list.len(),
        skipped = list.skipped(),
        "loaded word list"
    );
    Ok(list)
}

/// Parse a plain-text list: one word per line, blank lines and `#` comments ignored
#[must_use]
pub fn parse_text(content: &str) -> WordList {
    WordList::from_strs(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    )
}

/// Parse a JSON list of the form `{"words": ["apple", ...]}`
///
/// # Errors
///
/// Returns the `serde_json` error if the document does not have that shape.
pub fn parse_json(content: &str) -> Result<WordList, serde_json::Error> {
    let file: WordFile = serde_json::from_str(content)?;
    Ok(WordList::from_strs(file.words))
}
