use super::{Dictionary, Outcome, Session};

/// Running totals across finished games
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// `guess_distribution[n]` counts wins in exactly `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished session
    ///
    /// Returns `false` (and records nothing) if the session is still in progress.
    pub fn record<D: Dictionary + ?Sized>(&mut self, session: &Session<'_, D>) -> bool {
        match session.outcome() {
            Outcome::InProgress => return false,
            Outcome::Won => {
                let turns = session.turns_used();
                if self.guess_distribution.len() <= turns {
                    self.guess_distribution.resize(turns + 1, 0);
                }
                self.guess_distribution[turns] += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
            }
            Outcome::Lost => self.current_streak = 0,
        }
        self.games_played += 1;
        true
    }

    /// Record a session given up before it finished
    ///
    /// An abandoned game with at least one guess counts as a loss, so
    /// restarting cannot save a streak. Untouched or finished sessions are
    /// ignored and `false` is returned.
    pub fn record_abandoned<D: Dictionary + ?Sized>(&mut self, session: &Session<'_, D>) -> bool {
        if session.is_over() || session.turns_used() == 0 {
            return false;
        }
        self.games_played += 1;
        self.current_streak = 0;
        true
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
