//! Per-letter keyboard aggregate
//!
//! Tracks the best mark each letter has earned across all guesses of a game.

use crate::core::{LetterMark, ScoreRow, Word};

/// Keyboard rows in QWERTY order, for front ends that draw a keyboard
pub const QWERTY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

const ALPHABET_LEN: usize = 26;

/// Best-known mark for every letter `a`-`z`
///
/// Marks only move upwards (`Miss` → `Present` → `Hit`); a letter that has
/// been a hit stays a hit whatever later guesses say about it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    marks: [Option<LetterMark>; ALPHABET_LEN],
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the mark of `letter` to at least `mark`
    ///
    /// Returns `true` if the stored mark changed. Bytes outside `a`-`z` are ignored.
    pub fn upgrade(&mut self, letter: u8, mark: LetterMark) -> bool {
        let Some(index) = slot_index(letter) else {
            return false;
        };
        let slot = &mut self.marks[index];

        let upgraded = slot.map_or(mark, |current| current.upgrade(mark));
        let changed = *slot != Some(upgraded);
        *slot = Some(upgraded);
        changed
    }

    /// Fold a scored guess into the aggregate
    pub fn record(&mut self, guess: &Word, row: &ScoreRow) {
        for (&letter, mark) in guess.letters().iter().zip(row.iter()) {
            self.upgrade(letter, mark);
        }
    }

    /// Best mark seen so far for `letter`, `None` if never guessed
    #[must_use]
    pub fn mark(&self, letter: u8) -> Option<LetterMark> {
        slot_index(letter).and_then(|i| self.marks[i])
    }

    /// Letters `a`-`z` in order with their marks
    pub fn iter(&self) -> impl Iterator<Item = (char, Option<LetterMark>)> + '_ {
        (b'a'..=b'z')
            .zip(self.marks.iter().copied())
            .map(|(letter, mark)| (char::from(letter), mark))
    }

    /// Keyboard rows in QWERTY order with their marks
    #[must_use]
    pub fn qwerty_rows(&self) -> Vec<Vec<(char, Option<LetterMark>)>> {
        QWERTY_ROWS
            .iter()
            .map(|row| row.bytes().map(|b| (char::from(b), self.mark(b))).collect())
            .collect()
    }
}

fn slot_index(letter: u8) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| usize::from(letter - b'a'))
}
