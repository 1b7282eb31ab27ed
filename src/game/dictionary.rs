use std::collections::HashSet;
use std::hash::BuildHasher;

/// Membership lookup for accepted guesses
///
/// Sessions borrow a dictionary for their whole lifetime and never mutate it.
/// Words are passed already lowercased.
pub trait Dictionary {
    fn contains(&self, word: &str) -> bool;
}

impl<S: BuildHasher> Dictionary for HashSet<String, S> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl Dictionary for [&str] {
    fn contains(&self, word: &str) -> bool {
        self.iter().any(|&w| w == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn hash_set_dictionary() {
        let words: FxHashSet<String> = ["apple", "angel"].iter().map(ToString::to_string).collect();
        assert!(Dictionary::contains(&words, "apple"));
        assert!(!Dictionary::contains(&words, "zzzzz"));
    }

    #[test]
    fn slice_dictionary() {
        let words: &[&str] = &["apple", "angel"];
        assert!(Dictionary::contains(words, "angel"));
        assert!(!Dictionary::contains(words, "Angel"));
    }
}
