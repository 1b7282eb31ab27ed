//! Simple interactive CLI mode
//!
//! Line-based game without the full-screen interface

use crate::core::Word;
use crate::game::{GameRules, Session, Statistics};
use crate::output::{
    print_board, print_game_over, print_keyboard, print_statistics, rejection_message,
};
use crate::wordlists::WordList;
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{self, Write};
use tracing::info;

/// A line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    NewGame,
    Guess(String),
}

/// Interpret a line typed at the guess prompt
#[must_use]
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "quit" | "q" | "exit" | ":q" => Command::Quit,
        "new" | "n" | "restart" => Command::NewGame,
        _ => Command::Guess(input.to_string()),
    }
}

/// Run the simple interactive CLI mode
///
/// `first_answer`, when given, is the target of the first game only; later
/// games draw from `list`.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the list
/// is empty.
pub fn run_simple<R: Rng + ?Sized>(
    list: &WordList,
    rules: GameRules,
    rng: &mut R,
    first_answer: Option<Word>,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════╗");
    println!("║                W O R D L E                   ║");
    println!("╚══════════════════════════════════════════════╝\n");
    println!(
        "Guess the {}-letter word in {} tries.",
        rules.answer_length(),
        rules.max_guesses()
    );
    println!("Commands: 'new' for a new game, 'quit' to exit");
    println!("Starting over after a guess counts as a loss\n");

    let mut stats = Statistics::new();
    let mut first_answer = first_answer;

    'games: loop {
        let mut session = match first_answer.take() {
            Some(target) => Session::new(target, list, rules),
            None => Session::start(list, rng, rules).context("cannot start a game")?,
        };
        print_board(&session);

        while !session.is_over() {
            let prompt = format!(
                "Guess {}/{}",
                session.turns_used() + 1,
                rules.max_guesses()
            );
            let Some(input) = get_user_input(&prompt)? else {
                break 'games;
            };

            match parse_command(&input) {
                Command::Quit => break 'games,
                Command::NewGame => {
                    if stats.record_abandoned(&session) {
                        info!(turns = session.turns_used(), "simple game abandoned");
                    }
                    println!(
                        "\n🔄 New game! The last answer was {}\n",
                        session.target().text().to_uppercase()
                    );
                    continue 'games;
                }
                Command::Guess(guess) => match session.submit_guess(&guess) {
                    Ok(_) => {
                        print_board(&session);
                        if !session.is_over() {
                            print_keyboard(session.keyboard());
                        }
                    }
                    Err(rejection) => println!("❌ {}\n", rejection_message(&rejection)),
                },
            }
        }

        stats.record(&session);
        info!(
            outcome = %session.outcome(),
            turns = session.turns_used(),
            "simple game finished"
        );
        print_game_over(&session);
        print_statistics(&stats);
        println!();

        match get_user_input("Play again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                println!("\n🔄 New game started!\n");
            }
            _ => break,
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit_and_new() {
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command(" Q "), Command::Quit);
        assert_eq!(parse_command("new"), Command::NewGame);
        assert_eq!(parse_command("RESTART"), Command::NewGame);
    }

    #[test]
    fn parse_guess_keeps_trimmed_text() {
        assert_eq!(
            parse_command("  Apple \n"),
            Command::Guess("Apple".to_string())
        );
    }
}
