//! Colored printing for the line-based front end

use super::formatters::{category_message, create_progress_bar, row_to_emoji};
use crate::core::{LetterMark, ScoreRow, Word};
use crate::game::{Dictionary, KeyboardState, Outcome, Session, Statistics};
use colored::{ColoredString, Colorize};

fn tile(letter: char, mark: Option<LetterMark>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match mark {
        Some(LetterMark::Hit) => text.black().on_green().bold(),
        Some(LetterMark::Present) => text.black().on_yellow().bold(),
        Some(LetterMark::Miss) => text.white().on_bright_black(),
        None => text.bright_white(),
    }
}

fn row_line(guess: &Word, row: &ScoreRow) -> String {
    guess
        .letters()
        .iter()
        .zip(row.iter())
        .map(|(&letter, mark)| tile(char::from(letter), Some(mark)).to_string())
        .collect()
}

/// Print every guess so far plus empty rows for the guesses left
pub fn print_board<D: Dictionary + ?Sized>(session: &Session<'_, D>) {
    println!();
    for record in session.history() {
        println!("  {}  {}", row_line(&record.guess, &record.row), row_to_emoji(&record.row));
    }
    let empty: String = " · ".repeat(session.rules().answer_length());
    for _ in 0..session.remaining_guesses() {
        println!("  {}", empty.bright_black());
    }
    println!();
}

/// Print the keyboard with each letter colored by its best mark
pub fn print_keyboard(keyboard: &KeyboardState) {
    for (indent, row) in keyboard.qwerty_rows().iter().enumerate() {
        let keys: String = row
            .iter()
            .map(|&(letter, mark)| tile(letter, mark).to_string())
            .collect();
        println!("  {}{keys}", " ".repeat(indent * 2));
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_game_over<D: Dictionary + ?Sized>(session: &Session<'_, D>) {
    let Some(category) = session.category() else {
        return;
    };

    println!("{}", "═".repeat(50).bright_cyan());
    match session.outcome() {
        Outcome::Won => {
            println!("  {}", "🎉 Congratulations! 🎉".bright_green().bold());
            println!(
                "  Solved in {} {}",
                session.turns_used().to_string().bright_cyan().bold(),
                if session.turns_used() == 1 { "guess" } else { "guesses" }
            );
        }
        Outcome::Lost | Outcome::InProgress => {
            println!(
                "  Answer: {}",
                session.target().text().to_uppercase().bright_yellow().bold()
            );
        }
    }
    println!("  {}", category_message(category).bright_white());

    println!("\n  Guess history:");
    for (i, record) in session.history().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            record.guess.text().to_uppercase().bright_white().bold(),
            row_to_emoji(&record.row)
        );
    }
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print accumulated statistics
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:          {}", stats.games_played);
    println!(
        "   Win rate:        {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    if most == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count as f64, most as f64, 30);
        println!("   {guesses}: {} {count:4}", bar.green());
    }
}
