//! The turn-by-turn game state machine

use super::{
    ColumnSummary, Dictionary, GameError, GameRules, KeyboardState, Outcome, OutcomeCategory,
    Rejection, classify,
};
use crate::core::{ScoreRow, WORD_LENGTH, Word, score};
use crate::wordlists::WordList;
use rand::Rng;
use tracing::{debug, info, trace};

/// One accepted guess and its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub row: ScoreRow,
}

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub row: ScoreRow,
    /// Guesses accepted so far, including this one
    pub turns_used: usize,
    pub outcome: Outcome,
}

/// A single game against a hidden target
///
/// The session borrows its dictionary and owns everything else. Starting a new
/// game means constructing a new session.
#[derive(Debug, Clone)]
pub struct Session<'a, D: Dictionary + ?Sized = WordList> {
    dictionary: &'a D,
    target: Word,
    rules: GameRules,
    history: Vec<GuessRecord>,
    keyboard: KeyboardState,
    outcome: Outcome,
}

impl<'a> Session<'a, WordList> {
    /// Start a game with a target drawn uniformly from `list`
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if the list has no words.
    pub fn start<R: Rng + ?Sized>(
        list: &'a WordList,
        rng: &mut R,
        rules: GameRules,
    ) -> Result<Self, GameError> {
        let target = list.draw(rng).ok_or(GameError::EmptyWordList)?.clone();
        Ok(Self::new(target, list, rules))
    }
}

impl<'a, D: Dictionary + ?Sized> Session<'a, D> {
    /// Start a game against a known target
    ///
    /// The target does not have to be in the dictionary.
    #[must_use]
    pub fn new(target: Word, dictionary: &'a D, rules: GameRules) -> Self {
        debug!(max_guesses = rules.max_guesses(), "new session");
        trace!(target = %target, "session target");

        Self {
            dictionary,
            target,
            rules,
            history: Vec::with_capacity(rules.max_guesses()),
            keyboard: KeyboardState::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// Submit a guess
    ///
    /// Input is trimmed and lowercased before validation. Checks run in order
    /// and the first failure is returned:
    /// 1. the game must still be in progress
    /// 2. the input must have exactly five characters
    /// 3. the input must be in the dictionary
    ///
    /// # Errors
    /// Returns a [`Rejection`] describing the failed check. A rejected guess
    /// leaves the session unchanged.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{LetterMark::*, ScoreRow, Word};
    /// use wordle_game::game::{GameRules, Outcome, Session};
    ///
    /// let words: &[&str] = &["angel", "apple"];
    /// let target = Word::new("apple").unwrap();
    /// let mut session = Session::new(target, words, GameRules::default());
    ///
    /// let turn = session.submit_guess("ANGEL").unwrap();
    /// assert_eq!(turn.row, ScoreRow::new([Hit, Miss, Miss, Present, Present]));
    /// assert_eq!(turn.outcome, Outcome::InProgress);
    /// ```
    pub fn submit_guess(&mut self, raw_input: &str) -> Result<Turn, Rejection> {
        let result = self.accept(raw_input);
        match &result {
            Ok(turn) => debug!(turn = turn.turns_used, row = %turn.row, "guess accepted"),
            Err(rejection) => debug!(%rejection, "guess rejected"),
        }
        result
    }

    fn accept(&mut self, raw_input: &str) -> Result<Turn, Rejection> {
        if self.outcome.is_terminal() {
            return Err(Rejection::SessionTerminated);
        }

        let normalized = raw_input.trim().to_lowercase();
        let length = normalized.chars().count();
        if length != WORD_LENGTH {
            return Err(Rejection::WrongLength {
                expected: WORD_LENGTH,
                actual: length,
            });
        }

        let guess = Word::new(normalized.as_str())
            .ok()
            .filter(|word| self.dictionary.contains(word.text()))
            .ok_or(Rejection::NotInWordList(normalized))?;

        let row = score(&guess, &self.target);
        self.keyboard.record(&guess, &row);

        let solved = guess == self.target;
        self.history.push(GuessRecord { guess, row });

        self.outcome = if solved {
            Outcome::Won
        } else if self.turns_used() >= self.rules.max_guesses() {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };

        if self.outcome.is_terminal() {
            info!(outcome = %self.outcome, turns = self.turns_used(), "game over");
        }

        Ok(Turn {
            row,
            turns_used: self.turns_used(),
            outcome: self.outcome,
        })
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn rules(&self) -> GameRules {
        self.rules
    }

    /// Accepted guesses in submission order
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub fn turns_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        if self.outcome.is_terminal() {
            0
        } else {
            self.rules.max_guesses() - self.turns_used()
        }
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Per-column summary of the whole history
    #[must_use]
    pub fn column_summary(&self) -> ColumnSummary {
        ColumnSummary::from_rows(self.history.iter().map(|record| &record.row))
    }

    /// End-of-game category, `None` while the game is in progress
    #[must_use]
    pub fn category(&self) -> Option<OutcomeCategory> {
        classify(
            self.outcome,
            self.turns_used(),
            self.rules,
            self.column_summary(),
        )
    }
}
