//! Set of letters still available for guessing

use std::fmt;

/// Hangman convention: the sixth wrong guess ends the game
pub const MAX_WRONG: usize = 6;

/// A subset of `a`-`z`, stored as a 26-bit mask
///
/// Iteration is always alphabetical, which makes it the tie-break order for letter
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// All 26 lowercase letters
    pub const ALPHABET: Self = Self((1 << 26) - 1);

    /// No letters
    pub const EMPTY: Self = Self(0);

    const fn bit(letter: char) -> Option<u32> {
        if letter.is_ascii_lowercase() {
            Some(1 << (letter as u32 - 'a' as u32))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn contains(self, letter: char) -> bool {
        match Self::bit(letter) {
            Some(bit) => self.0 & bit != 0,
            None => false,
        }
    }

    /// This set minus `letter`
    #[must_use]
    pub const fn without(self, letter: char) -> Self {
        match Self::bit(letter) {
            Some(bit) => Self(self.0 & !bit),
            None => self,
        }
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = char> {
        ('a'..='z').filter(move |&letter| self.contains(letter))
    }
}

impl Default for LetterSet {
    fn default() -> Self {
        Self::ALPHABET
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .filter_map(Self::bit)
                .fold(0, |mask, bit| mask | bit),
        )
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|letter| write!(f, "{letter}"))
    }
}
