//! Game outcomes and end-of-game classification

use super::GameRules;
use crate::core::{LetterMark, ScoreRow, WORD_LENGTH};
use std::fmt;

/// Hit columns a lost game needs to count as a near miss
pub const NEAR_MISS_HIT_COLUMNS: usize = 4;

/// State of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    /// `Won` and `Lost` are terminal; no guesses are accepted afterwards
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// Finer classification of a finished game, used to pick an end-of-game message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeCategory {
    /// Solved on the first guess
    FlawlessWin,
    /// Solved on the last allowed guess
    NarrowWin,
    NormalWin,
    /// Lost without a single hit or present in any column
    TotalMiss,
    /// Lost with every column present at some point but never a hit
    AllPresent,
    /// Lost with at least [`NEAR_MISS_HIT_COLUMNS`] columns solved at some point
    NearMiss,
    Fail,
}

impl OutcomeCategory {
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::FlawlessWin | Self::NarrowWin | Self::NormalWin)
    }
}

/// Per-column summary of a game's history
///
/// A column counts as a hit column if any row hit it; otherwise it counts as a
/// present column if any row marked it present. No column counts twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnSummary {
    pub hit_columns: usize,
    pub present_columns: usize,
}

impl ColumnSummary {
    /// Scan every row for every column
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a ScoreRow>,
    {
        let mut best = [None::<LetterMark>; WORD_LENGTH];
        for row in rows {
            for (slot, mark) in best.iter_mut().zip(row.iter()) {
                *slot = Some(slot.map_or(mark, |current| current.upgrade(mark)));
            }
        }

        let count = |wanted| best.iter().filter(|&&mark| mark == Some(wanted)).count();
        Self {
            hit_columns: count(LetterMark::Hit),
            present_columns: count(LetterMark::Present),
        }
    }
}

/// Classify a game from its outcome, length and column summary
///
/// Returns `None` while the game is still in progress.
#[must_use]
pub fn classify(
    outcome: Outcome,
    turns_used: usize,
    rules: GameRules,
    columns: ColumnSummary,
) -> Option<OutcomeCategory> {
    let category = match outcome {
        Outcome::InProgress => return None,
        Outcome::Won if turns_used == 1 => OutcomeCategory::FlawlessWin,
        Outcome::Won if turns_used == rules.max_guesses() => OutcomeCategory::NarrowWin,
        Outcome::Won => OutcomeCategory::NormalWin,
        Outcome::Lost => match columns {
            ColumnSummary {
                hit_columns: 0,
                present_columns: 0,
            } => OutcomeCategory::TotalMiss,
            // An all-present loss keeps its own category instead of folding into `Fail`
            ColumnSummary {
                hit_columns: 0,
                present_columns,
            } if present_columns == rules.answer_length() => OutcomeCategory::AllPresent,
            ColumnSummary { hit_columns, .. } if hit_columns >= NEAR_MISS_HIT_COLUMNS => {
                OutcomeCategory::NearMiss
            }
            ColumnSummary { .. } => OutcomeCategory::Fail,
        },
    };
    Some(category)
}
