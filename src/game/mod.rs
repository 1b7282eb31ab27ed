//! Game session state machine
//!
//! A [`Session`] owns one game: the target, the guess history, the keyboard
//! aggregate and the outcome. Front ends drive it through
//! [`Session::submit_guess`] and render whatever it reports back.

mod dictionary;
mod error;
mod keyboard;
mod outcome;
mod rules;
mod session;
mod stats;

pub use dictionary::Dictionary;
pub use error::{GameError, Rejection};
pub use keyboard::{KeyboardState, QWERTY_ROWS};
pub use outcome::{ColumnSummary, NEAR_MISS_HIT_COLUMNS, Outcome, OutcomeCategory, classify};
pub use rules::{DEFAULT_MAX_GUESSES, GameRules};
pub use session::{GuessRecord, Session, Turn};
pub use stats::Statistics;
