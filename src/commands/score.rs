//! One-off scoring of a guess against a target

use crate::core::{ScoreRow, Word, WordError, score};

/// Score two raw words
///
/// # Errors
///
/// Returns `WordError` if either word is not a valid five-letter word.
pub fn score_words(guess: &str, target: &str) -> Result<ScoreRow, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    Ok(score(&guess, &target))
}
