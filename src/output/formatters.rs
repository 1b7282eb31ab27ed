//! Formatting utilities shared by the front ends

use crate::core::ScoreRow;
use crate::game::{OutcomeCategory, Rejection};

/// Format a score row as an emoji string
#[must_use]
pub fn row_to_emoji(row: &ScoreRow) -> String {
    row.to_emoji()
}

/// End-of-game message for a category
#[must_use]
pub const fn category_message(category: OutcomeCategory) -> &'static str {
    match category {
        OutcomeCategory::FlawlessWin => "First try?! Unbelievable!",
        OutcomeCategory::NarrowWin => "On the very last guess! Pop the champagne!",
        OutcomeCategory::NormalWin => "Solved it. Nicely done!",
        OutcomeCategory::TotalMiss => "Not a single letter?",
        OutcomeCategory::AllPresent => "All the right letters, none in the right place.",
        OutcomeCategory::NearMiss => "So close! Just one step away.",
        OutcomeCategory::Fail => "GG",
    }
}

/// Short alert for a rejected guess
#[must_use]
pub fn rejection_message(rejection: &Rejection) -> String {
    match rejection {
        Rejection::SessionTerminated => "Game over - start a new game".to_string(),
        Rejection::WrongLength { expected, actual } if actual < expected => {
            "Not enough letters".to_string()
        }
        Rejection::WrongLength { .. } => "Too many letters".to_string(),
        Rejection::NotInWordList(_) => "Not in word list".to_string(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        (((value / max) * width as f64) as usize).min(width)
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
