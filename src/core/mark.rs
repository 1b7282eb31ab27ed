//! Per-letter feedback marks

use std::fmt;

/// Feedback for a single letter of a guess
///
/// Variants are declared in ascending priority, so the derived `Ord` gives
/// `Hit > Present > Miss`. Keyboard aggregation relies on this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterMark {
    /// Letter matches no unconsumed occurrence in the target (grey)
    Miss,
    /// Letter occurs in the target at a different position (yellow)
    Present,
    /// Letter is in the correct position (green)
    Hit,
}

impl LetterMark {
    /// All marks in ascending priority
    pub const ALL: [Self; 3] = [Self::Miss, Self::Present, Self::Hit];

    /// Parse a single feedback character
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for hit
    /// - 'Y'/'y'/🟨 for present
    /// - 'B'/'b'/'-'/'_'/⬜ for miss
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Hit),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            'B' | 'b' | '-' | '_' | '⬜' => Some(Self::Miss),
            _ => None,
        }
    }

    /// Single-letter code: `g`, `y` or `b`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Hit => 'g',
            Self::Present => 'y',
            Self::Miss => 'b',
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Hit => '🟩',
            Self::Present => '🟨',
            Self::Miss => '⬜',
        }
    }

    /// Keep whichever of the two marks carries more information
    #[inline]
    #[must_use]
    pub fn upgrade(self, other: Self) -> Self {
        self.max(other)
    }
}

impl fmt::Display for LetterMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hit => "hit",
            Self::Present => "present",
            Self::Miss => "miss",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_order() {
        assert!(LetterMark::Hit > LetterMark::Present);
        assert!(LetterMark::Present > LetterMark::Miss);
        assert_eq!(LetterMark::ALL.iter().max(), Some(&LetterMark::Hit));
    }

    #[test]
    fn upgrade_never_downgrades() {
        assert_eq!(LetterMark::Hit.upgrade(LetterMark::Miss), LetterMark::Hit);
        assert_eq!(LetterMark::Hit.upgrade(LetterMark::Present), LetterMark::Hit);
        assert_eq!(LetterMark::Present.upgrade(LetterMark::Miss), LetterMark::Present);
        assert_eq!(LetterMark::Miss.upgrade(LetterMark::Present), LetterMark::Present);
    }

    #[test]
    fn from_char_accepts_codes_and_emoji() {
        assert_eq!(LetterMark::from_char('g'), Some(LetterMark::Hit));
        assert_eq!(LetterMark::from_char('🟨'), Some(LetterMark::Present));
        assert_eq!(LetterMark::from_char('-'), Some(LetterMark::Miss));
        assert_eq!(LetterMark::from_char('x'), None);
    }

    #[test]
    fn code_round_trips() {
        for mark in LetterMark::ALL {
            assert_eq!(LetterMark::from_char(mark.code()), Some(mark));
        }
    }
}
