use thiserror::Error;

/// Reason a guess was not accepted
///
/// Every rejection leaves the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("the game is already over")]
    SessionTerminated,

    #[error("expected {expected} letters, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("'{0}' is not in the word list")]
    NotInWordList(String),
}

/// Errors raised while setting up a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("max guesses must be at least 1")]
    InvalidRules,

    #[error("cannot draw an answer from an empty word list")]
    EmptyWordList,
}
