//! End-to-end game scenarios against the embedded word list.

use wordle_game::core::{LetterMark::*, ScoreRow, Word};
use wordle_game::game::{GameRules, Outcome, OutcomeCategory, Rejection, Session, Statistics};
use wordle_game::output::{category_message, rejection_message};
use wordle_game::wordlists::WordList;

fn embedded_session<'a>(list: &'a WordList, target: &str) -> Session<'a> {
    Session::new(Word::new(target).unwrap(), list, GameRules::default())
}

#[test]
fn apple_in_two() {
    let list = WordList::embedded();
    let mut session = embedded_session(&list, "apple");

    let first = session.submit_guess("angel").unwrap();
    assert_eq!(first.row, ScoreRow::new([Hit, Miss, Miss, Present, Present]));
    assert_eq!(first.turns_used, 1);
    assert_eq!(first.outcome, Outcome::InProgress);

    let second = session.submit_guess("apple").unwrap();
    assert_eq!(second.row, ScoreRow::new([Hit; 5]));
    assert_eq!(second.turns_used, 2);
    assert_eq!(second.outcome, Outcome::Won);
    assert_eq!(session.category(), Some(OutcomeCategory::NormalWin));
}

#[test]
fn seventh_guess_is_rejected() {
    let list = WordList::embedded();
    let mut session = embedded_session(&list, "apple");

    for guess in ["crane", "slate", "robot", "floor", "speed", "erase"] {
        session.submit_guess(guess).unwrap();
    }
    assert_eq!(session.outcome(), Outcome::Lost);

    let rejection = session.submit_guess("apple").unwrap_err();
    assert_eq!(rejection, Rejection::SessionTerminated);
    assert_eq!(session.turns_used(), 6);
    assert!(!rejection_message(&rejection).is_empty());
}

#[test]
fn rejections_in_order() {
    let list = WordList::embedded();
    let mut session = embedded_session(&list, "apple");

    assert!(matches!(
        session.submit_guess("ap"),
        Err(Rejection::WrongLength { actual: 2, .. })
    ));
    assert_eq!(
        session.submit_guess("qwxzv"),
        Err(Rejection::NotInWordList("qwxzv".to_string()))
    );
    assert_eq!(session.turns_used(), 0);

    // Accepted in any case
    assert!(session.submit_guess("ANGEL").is_ok());
}

#[test]
fn independent_sessions_do_not_interfere() {
    let list = WordList::embedded();
    let mut a = embedded_session(&list, "apple");
    let mut b = embedded_session(&list, "crane");

    a.submit_guess("apple").unwrap();
    b.submit_guess("slate").unwrap();

    assert_eq!(a.outcome(), Outcome::Won);
    assert_eq!(b.outcome(), Outcome::InProgress);
    assert_eq!(b.turns_used(), 1);
}

#[test]
fn statistics_over_several_games() {
    let list = WordList::embedded();
    let mut stats = Statistics::new();

    let mut won = embedded_session(&list, "apple");
    won.submit_guess("apple").unwrap();
    assert_eq!(won.category(), Some(OutcomeCategory::FlawlessWin));
    stats.record(&won);

    let mut lost = embedded_session(&list, "apple");
    for _ in 0..6 {
        lost.submit_guess("robot").unwrap();
    }
    assert_eq!(lost.category(), Some(OutcomeCategory::TotalMiss));
    assert!(!category_message(OutcomeCategory::TotalMiss).is_empty());
    stats.record(&lost);

    assert_eq!(stats.games_played, 2);
    assert_eq!(stats.games_won, 1);
    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.max_streak, 1);
}
