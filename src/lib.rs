//! Wordle Game
//!
//! The rules of Wordle as a library: guess scoring, the turn-by-turn session
//! state machine and end-of-game classification, plus word lists,
//! configuration and two terminal front ends built on top.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{LetterMark::*, ScoreRow, Word};
//! use wordle_game::game::{GameRules, Outcome, OutcomeCategory, Session};
//! use wordle_game::wordlists::WordList;
//!
//! let list = WordList::from_strs(["apple", "angel"]);
//! let target = Word::new("apple").unwrap();
//! let mut session = Session::new(target, &list, GameRules::default());
//!
//! let turn = session.submit_guess("angel").unwrap();
//! assert_eq!(turn.row, ScoreRow::new([Hit, Miss, Miss, Present, Present]));
//!
//! let turn = session.submit_guess("apple").unwrap();
//! assert_eq!(turn.outcome, Outcome::Won);
//! assert_eq!(session.category(), Some(OutcomeCategory::NormalWin));
//! ```

// Core domain types
pub mod core;

// Session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Configuration file
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
