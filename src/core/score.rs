//! Guess scoring
//!
//! A score row holds one [`LetterMark`] per position of a guess. Rows are
//! produced once per submitted guess and never change afterwards.

use super::{LetterMark, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use std::fmt;
use std::ops::Index;

/// Feedback for a whole guess, one mark per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreRow([LetterMark; WORD_LENGTH]);

impl ScoreRow {
    /// All hits (exact match)
    pub const PERFECT: Self = Self([LetterMark::Hit; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(marks: [LetterMark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[LetterMark; WORD_LENGTH] {
        &self.0
    }

    /// Check if this row is all hits
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count positions carrying the given mark
    #[must_use]
    pub fn count(&self, mark: LetterMark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = LetterMark> + '_ {
        self.0.iter().copied()
    }

    /// Parse a row from a string like "gbbyy", "G--YY" or "🟩⬜⬜🟨🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::ScoreRow;
    ///
    /// let r1 = ScoreRow::from_str("gbbyy").unwrap();
    /// let r2 = ScoreRow::from_str("🟩⬜⬜🟨🟨").unwrap();
    /// assert_eq!(r1, r2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let mut marks = [LetterMark::Miss; WORD_LENGTH];
        let mut chars = s.chars();

        for slot in &mut marks {
            *slot = LetterMark::from_char(chars.next()?)?;
        }

        if chars.next().is_some() {
            return None;
        }

        Some(Self(marks))
    }

    /// Convert the row to an emoji string like "🟩⬜⬜🟨🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.iter().map(LetterMark::to_emoji).collect()
    }
}

impl Index<usize> for ScoreRow {
    type Output = LetterMark;

    fn index(&self, position: usize) -> &Self::Output {
        &self.0[position]
    }
}

impl std::str::FromStr for ScoreRow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid score row: {s}"))
    }
}

impl fmt::Display for ScoreRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: String = self.iter().map(LetterMark::code).collect();
        f.write_str(&codes)
    }
}

/// Score `guess` against `target`
///
/// Implements Wordle's feedback rules including duplicate letters.
///
/// # Algorithm
/// 1. First pass: mark exact position matches as hits and consume those letters
/// 2. Second pass, left to right: a remaining letter is present while the target
///    still holds an unconsumed occurrence of it, otherwise a miss
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterMark::*, ScoreRow, Word, score};
///
/// let guess = Word::new("angel").unwrap();
/// let target = Word::new("apple").unwrap();
///
/// assert_eq!(
///     score(&guess, &target),
///     ScoreRow::new([Hit, Miss, Miss, Present, Present])
/// );
/// ```
#[must_use]
pub fn score(guess: &Word, target: &Word) -> ScoreRow {
    let mut marks = [LetterMark::Miss; WORD_LENGTH];
    let totals = target.letter_counts();
    let mut consumed: FxHashMap<u8, u8> = FxHashMap::default();

    // First pass: hits
    for (mark, (&g, &t)) in marks
        .iter_mut()
        .zip(guess.letters().iter().zip(target.letters()))
    {
        if g == t {
            *mark = LetterMark::Hit;
            *consumed.entry(g).or_insert(0) += 1;
        }
    }

    // Second pass: presents, sharing the consumed counter left to right
    for (mark, &letter) in marks.iter_mut().zip(guess.letters()) {
        if *mark == LetterMark::Hit {
            continue;
        }

        let total = totals.get(&letter).copied().unwrap_or(0);
        let used = consumed.entry(letter).or_insert(0);
        if *used < total {
            *mark = LetterMark::Present;
            *used += 1;
        }
    }

    ScoreRow(marks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterMark::{Hit, Miss, Present};

    fn score_str(guess: &str, target: &str) -> ScoreRow {
        score(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn score_repeated_letters_in_target() {
        assert_eq!(
            score_str("angel", "apple"),
            ScoreRow::new([Hit, Miss, Miss, Present, Present])
        );
    }

    #[test]
    fn score_exact_match() {
        assert_eq!(score_str("apple", "apple"), ScoreRow::PERFECT);
        assert!(score_str("apple", "apple").is_perfect());
    }

    #[test]
    fn score_no_overlap() {
        assert_eq!(score_str("zzzzz", "apple"), ScoreRow::new([Miss; WORD_LENGTH]));
    }

    #[test]
    fn score_duplicate_letters_both_present() {
        // Both E's are present: ERASE has E at 0 and 4, SPEED has them at 2 and 3
        let row = score_str("speed", "erase");
        assert_eq!(row, ScoreRow::new([Present, Miss, Present, Present, Miss]));
        assert_eq!(row.count(Hit), 0);
        assert_eq!(row.count(Present), 3);
    }

    #[test]
    fn score_duplicate_letters_hit_consumes_first() {
        // Second O is a hit; first O still finds the other O in FLOOR
        let row = score_str("robot", "floor");
        assert_eq!(row, ScoreRow::new([Present, Present, Miss, Hit, Miss]));
    }

    #[test]
    fn score_extra_duplicates_become_misses() {
        // Only one P left after the hit at position 2
        let row = score_str("puppy", "apple");
        assert_eq!(row, ScoreRow::new([Present, Miss, Hit, Miss, Miss]));
    }

    #[test]
    fn score_later_hit_takes_precedence_over_earlier_present() {
        // The only L in WORLD belongs to position 3; the earlier L is a miss
        let row = score_str("hello", "world");
        assert_eq!(row, ScoreRow::new([Miss, Miss, Miss, Hit, Present]));
    }

    #[test]
    fn score_presents_assigned_left_to_right() {
        // One L and one A in ANGEL: the first occurrence of each gets the present
        let row = score_str("llama", "angel");
        assert_eq!(row, ScoreRow::new([Present, Miss, Present, Miss, Miss]));
    }

    #[test]
    fn score_is_deterministic() {
        assert_eq!(score_str("crane", "slate"), score_str("crane", "slate"));
        assert_eq!(
            score_str("crane", "slate"),
            ScoreRow::new([Miss, Miss, Hit, Miss, Hit])
        );
    }

    #[test]
    fn row_from_str_valid() {
        let r1 = ScoreRow::from_str("gyb--").unwrap();
        let r2 = ScoreRow::from_str("🟩🟨⬜⬜⬜").unwrap();
        let r3 = ScoreRow::from_str("GY_b-").unwrap();
        assert_eq!(r1, r2);
        assert_eq!(r1, r3);
        assert_eq!(r1, ScoreRow::new([Hit, Present, Miss, Miss, Miss]));
    }

    #[test]
    fn row_from_str_invalid() {
        assert!(ScoreRow::from_str("gybbyy").is_none()); // Too long
        assert!(ScoreRow::from_str("gyb").is_none()); // Too short
        assert!(ScoreRow::from_str("gxbby").is_none()); // Invalid char
        assert!(ScoreRow::from_str("").is_none());
    }

    #[test]
    fn row_display_and_emoji() {
        let row = score_str("angel", "apple");
        assert_eq!(row.to_string(), "gbbyy");
        assert_eq!(row.to_emoji(), "🟩⬜⬜🟨🟨");
    }
}
