//! Word lists for Wordle games
//!
//! Provides the embedded default list, file loading and the [`WordList`]
//! container sessions use for membership checks and answer draws.

mod embedded;
mod list;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use list::WordList;
pub use loader::WordListError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_list_has_no_duplicates() {
        let list = WordList::embedded();
        assert_eq!(list.len(), WORDS_COUNT);
        assert_eq!(list.skipped(), 0);
    }
}
