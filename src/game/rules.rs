use super::GameError;
use crate::core::WORD_LENGTH;

/// Guesses allowed per game unless configured otherwise
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Fixed parameters of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    max_guesses: usize,
}

impl GameRules {
    /// # Errors
    /// Returns `GameError::InvalidRules` if `max_guesses` is zero.
    pub const fn new(max_guesses: usize) -> Result<Self, GameError> {
        if max_guesses == 0 {
            return Err(GameError::InvalidRules);
        }
        Ok(Self { max_guesses })
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(self) -> usize {
        self.max_guesses
    }

    #[inline]
    #[must_use]
    pub const fn answer_length(self) -> usize {
        WORD_LENGTH
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules() {
        let rules = GameRules::default();
        assert_eq!(rules.max_guesses(), 6);
        assert_eq!(rules.answer_length(), 5);
    }

    #[test]
    fn zero_guesses_rejected() {
        assert_eq!(GameRules::new(0), Err(GameError::InvalidRules));
        assert_eq!(GameRules::new(3).map(GameRules::max_guesses), Ok(3));
    }
}
