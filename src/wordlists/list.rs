use crate::core::Word;
use crate::game::Dictionary;
use rand::Rng;
use rustc_hash::FxHashMap;
use tracing::warn;

/// Ordered list of accepted words with a text-to-position index
///
/// Invalid entries are skipped and duplicates keep their first position, so
/// the order stays that of the source while lookups are O(1).
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
    skipped: usize,
}

impl WordList {
    /// Build a list from raw strings, skipping invalid words
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::WordList;
    ///
    /// let list = WordList::from_strs(["apple", "ANGEL", "toolong", "apple"]);
    /// assert_eq!(list.len(), 2);
    /// assert!(list.contains("angel"));
    /// assert_eq!(list.skipped(), 1);
    /// ```
    pub fn from_strs<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();

        for raw in words {
            let raw = raw.as_ref().trim();
            match Word::new(raw) {
                Ok(word) => {
                    if !list.index.contains_key(word.text()) {
                        list.index.insert(word.text().to_string(), list.words.len());
                        list.words.push(word);
                    }
                }
                Err(err) => {
                    warn!(entry = raw, %err, "skipping word list entry");
                    list.skipped += 1;
                }
            }
        }

        list
    }

    /// The list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_strs(super::WORDS)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of entries rejected while building the list
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Check membership of an already lowercased word
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Look up the stored word for `text`, case-insensitively
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        let position = *self.index.get(text.to_lowercase().as_str())?;
        self.words.get(position)
    }

    /// Pick a word uniformly at random
    ///
    /// Returns `None` if the list is empty.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        if self.words.is_empty() {
            return None;
        }
        self.words.get(rng.random_range(0..self.words.len()))
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        Self::contains(self, word)
    }
}
