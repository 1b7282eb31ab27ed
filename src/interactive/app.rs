//! TUI application state and logic

use crate::core::Word;
use crate::game::{GameError, GameRules, Session, Statistics};
use crate::output::{category_message, rejection_message};
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// How long a rejected row shakes
const SHAKE_DURATION: Duration = Duration::from_millis(600);

/// Event poll interval, also the granularity of alert expiry
const TICK: Duration = Duration::from_millis(50);

/// Message shown above the keyboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub text: String,
    pub style: MessageStyle,
    /// `None` keeps the alert until it is replaced
    expires_at: Option<Instant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<'a> {
    pub list: &'a WordList,
    pub rules: GameRules,
    pub session: Session<'a>,
    pub input: String,
    pub alert: Option<Alert>,
    pub stats: Statistics,
    pub should_quit: bool,
    shake_until: Option<Instant>,
    alert_duration: Duration,
    rng: StdRng,
}

impl<'a> App<'a> {
    /// Create the app and its first game
    ///
    /// `first_answer` fixes the target of the first game only.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyWordList` if no answer can be drawn.
    pub fn new(
        list: &'a WordList,
        rules: GameRules,
        mut rng: StdRng,
        first_answer: Option<Word>,
        alert_duration: Duration,
    ) -> Result<Self, GameError> {
        let session = match first_answer {
            Some(target) => Session::new(target, list, rules),
            None => Session::start(list, &mut rng, rules)?,
        };

        Ok(Self {
            list,
            rules,
            session,
            input: String::new(),
            alert: None,
            stats: Statistics::new(),
            should_quit: false,
            shake_until: None,
            alert_duration,
            rng,
        })
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            _ if self.session.is_over() => match key.code {
                KeyCode::Enter | KeyCode::Char('n' | 'N') => self.new_game(),
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                _ => {}
            },
            KeyCode::Char(c) => self.push_letter(c),
            KeyCode::Backspace => self.pop_letter(),
            KeyCode::Enter => self.submit(now),
            _ => {}
        }
    }

    pub fn push_letter(&mut self, c: char) {
        if self.input.len() < self.rules.answer_length() && c.is_ascii_alphabetic() {
            self.input.push(c.to_ascii_lowercase());
        }
    }

    pub fn pop_letter(&mut self) {
        self.input.pop();
    }

    /// Submit the typed letters as a guess
    pub fn submit(&mut self, now: Instant) {
        match self.session.submit_guess(&self.input) {
            Ok(turn) => {
                self.input.clear();
                self.alert = None;
                if turn.outcome.is_terminal() {
                    self.finish_game();
                }
            }
            Err(rejection) => {
                self.shake_until = Some(now + SHAKE_DURATION);
                self.alert = Some(Alert {
                    text: rejection_message(&rejection),
                    style: MessageStyle::Error,
                    expires_at: Some(now + self.alert_duration),
                });
            }
        }
    }

    fn finish_game(&mut self) {
        self.stats.record(&self.session);
        info!(
            outcome = %self.session.outcome(),
            turns = self.session.turns_used(),
            "tui game finished"
        );

        let Some(category) = self.session.category() else {
            return;
        };
        let (text, style) = if category.is_win() {
            (
                format!("Congratulations! {}", category_message(category)),
                MessageStyle::Success,
            )
        } else {
            (
                format!(
                    "Answer: {}. {}",
                    self.session.target().text().to_uppercase(),
                    category_message(category)
                ),
                MessageStyle::Error,
            )
        };
        self.alert = Some(Alert {
            text,
            style,
            expires_at: None,
        });
    }

    /// Replace the session with a fresh game
    ///
    /// A game abandoned after at least one guess is recorded as a loss.
    pub fn new_game(&mut self) {
        if self.stats.record_abandoned(&self.session) {
            info!(turns = self.session.turns_used(), "tui game abandoned");
        }
        match Session::start(self.list, &mut self.rng, self.rules) {
            Ok(session) => {
                self.session = session;
                self.input.clear();
                self.shake_until = None;
                self.alert = Some(Alert {
                    text: "New game started!".to_string(),
                    style: MessageStyle::Info,
                    expires_at: None,
                });
            }
            Err(err) => {
                error!(%err, "failed to start a new game");
                self.alert = Some(Alert {
                    text: err.to_string(),
                    style: MessageStyle::Error,
                    expires_at: None,
                });
            }
        }
    }

    /// Expire transient alerts and animations
    pub fn tick(&mut self, now: Instant) {
        if self
            .alert
            .as_ref()
            .and_then(|alert| alert.expires_at)
            .is_some_and(|deadline| now >= deadline)
        {
            self.alert = None;
        }
        if self.shake_until.is_some_and(|deadline| now >= deadline) {
            self.shake_until = None;
        }
    }

    #[must_use]
    pub const fn is_shaking(&self) -> bool {
        self.shake_until.is_some()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key, Instant::now());
        }
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Outcome;
    use rand::SeedableRng;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn new_app(list: &WordList) -> App<'_> {
        App::new(
            list,
            GameRules::default(),
            StdRng::seed_from_u64(5),
            Some(Word::new("apple").unwrap()),
            Duration::from_millis(1000),
        )
        .unwrap()
    }

    fn type_word(app: &mut App, word: &str, now: Instant) {
        for c in word.chars() {
            app.handle_key(key(KeyCode::Char(c)), now);
        }
        app.handle_key(key(KeyCode::Enter), now);
    }

    #[test]
    fn typing_is_capped_at_word_length() {
        let list = WordList::from_strs(["apple", "angel"]);
        let mut app = new_app(&list);
        let now = Instant::now();
        for c in "ANGELS1".chars() {
            app.handle_key(key(KeyCode::Char(c)), now);
        }
        assert_eq!(app.input, "angel");
        app.handle_key(key(KeyCode::Backspace), now);
        assert_eq!(app.input, "ange");
    }

    #[test]
    fn rejected_guess_shows_transient_alert() {
        let list = WordList::from_strs(["apple", "angel"]);
        let mut app = new_app(&list);
        let now = Instant::now();

        type_word(&mut app, "app", now);
        assert_eq!(app.alert.as_ref().map(|a| a.text.as_str()), Some("Not enough letters"));
        assert!(app.is_shaking());
        assert_eq!(app.input, "app");
        assert_eq!(app.session.turns_used(), 0);

        app.tick(now + Duration::from_millis(700));
        assert!(!app.is_shaking());
        assert!(app.alert.is_some());

        app.tick(now + Duration::from_millis(1000));
        assert!(app.alert.is_none());
    }

    #[test]
    fn unknown_word_alert() {
        let list = WordList::from_strs(["apple", "angel"]);
        let mut app = new_app(&list);
        type_word(&mut app, "zzzzz", Instant::now());
        assert_eq!(app.alert.as_ref().map(|a| a.text.as_str()), Some("Not in word list"));
    }

    #[test]
    fn winning_records_stats_and_keeps_message() {
        let list = WordList::from_strs(["apple", "angel"]);
        let mut app = new_app(&list);
        let now = Instant::now();

        type_word(&mut app, "angel", now);
        assert!(app.input.is_empty());
        type_word(&mut app, "apple", now);

        assert_eq!(app.session.outcome(), Outcome::Won);
        assert_eq!(app.stats.games_won, 1);
        let alert = app.alert.clone().unwrap();
        assert_eq!(alert.style, MessageStyle::Success);

        app.tick(now + Duration::from_secs(60));
        assert!(app.alert.is_some());
    }

    #[test]
    fn letters_ignored_after_game_over_and_enter_restarts() {
        let list = WordList::from_strs(["apple", "angel"]);
        let mut app = new_app(&list);
        let now = Instant::now();
        type_word(&mut app, "apple", now);

        app.handle_key(key(KeyCode::Char('a')), now);
        assert!(app.input.is_empty());

        app.handle_key(key(KeyCode::Enter), now);
        assert_eq!(app.session.outcome(), Outcome::InProgress);
        assert_eq!(app.session.turns_used(), 0);
        assert!(list.contains(app.session.target().text()));
    }

    #[test]
    fn restarting_mid_game_counts_as_loss() {
        let list = WordList::from_strs(["apple", "angel"]);
        let mut app = new_app(&list);
        let now = Instant::now();

        let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);

        type_word(&mut app, "angel", now);
        app.handle_key(ctrl_n, now);
        assert_eq!(app.stats.games_played, 1);
        assert_eq!(app.stats.games_won, 0);
        assert_eq!(app.stats.current_streak, 0);
        assert_eq!(app.session.turns_used(), 0);

        // Restarting a game with no guesses is free
        app.handle_key(ctrl_n, now);
        assert_eq!(app.stats.games_played, 1);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let list = WordList::from_strs(["apple"]);
        let mut app = new_app(&list);
        app.handle_key(key(KeyCode::Esc), Instant::now());
        assert!(app.should_quit);

        let mut app2 = new_app(&list);
        app2.handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Instant::now(),
        );
        assert!(app2.should_quit);
    }
}
