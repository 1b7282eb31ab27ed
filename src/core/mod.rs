//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types and the scoring function.
//! Everything here is pure: no I/O, no shared state, no randomness.

mod mark;
mod score;
mod word;

pub use mark::LetterMark;
pub use score::{ScoreRow, score};
pub use word::{WORD_LENGTH, Word, WordError};
