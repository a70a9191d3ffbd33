//! Revealed-letter pattern calculation and representation
//!
//! A pattern is a string the same length as the word it describes. Each position is
//! either a revealed character or the placeholder `_`:
//! - Letters `a`-`z` are revealed only once they have been guessed
//! - Any other character (space, hyphen, apostrophe) is always revealed
//!
//! Revelation is monotonic: merging patterns never hides a known position.

use super::{PLACEHOLDER, Word};
use serde::Serialize;
use std::fmt;

/// Current knowledge of a word, e.g. `_a__a_`
///
/// Patterns order lexicographically by their text. Since the placeholder sorts before
/// every letter, a pattern always sorts before any pattern that reveals more letters
/// of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Pattern(String);

/// Error type for invalid pattern operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    LengthMismatch { known: usize, revealed: usize },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { known, revealed } => write!(
                f,
                "Cannot merge patterns of different lengths ({known} and {revealed})"
            ),
        }
    }
}

impl std::error::Error for PatternError {}

/// Whether a character takes part in guessing (otherwise it is always shown)
#[inline]
#[must_use]
pub const fn is_guessable(ch: char) -> bool {
    ch.is_ascii_lowercase()
}

impl Pattern {
    /// The fully hidden pattern for words of `len` characters
    #[must_use]
    pub fn blank(len: usize) -> Self {
        Self(std::iter::repeat_n(PLACEHOLDER, len).collect())
    }

    /// Calculate the pattern shown for `word` when only `letter` has been guessed
    ///
    /// # Examples
    /// ```
    /// use hangman_book::core::{Pattern, Word};
    ///
    /// let word = Word::new("banana", 1).unwrap();
    /// assert_eq!(Pattern::reveal(&word, 'a').as_str(), "_a_a_a");
    ///
    /// let word = Word::new("ice cream", 1).unwrap();
    /// assert_eq!(Pattern::reveal(&word, 'e').as_str(), "__e __e__");
    /// ```
    #[must_use]
    pub fn reveal(word: &Word, letter: char) -> Self {
        Self(
            word.chars()
                .map(|ch| {
                    if ch == letter || !is_guessable(ch) {
                        ch
                    } else {
                        PLACEHOLDER
                    }
                })
                .collect(),
        )
    }

    /// Combine previously known positions with newly revealed ones
    ///
    /// Positions already known keep their character; every other position takes the
    /// character of `revealed`.
    ///
    /// # Errors
    /// Returns `PatternError::LengthMismatch` if the patterns differ in length.
    ///
    /// # Examples
    /// ```
    /// use hangman_book::core::{Pattern, Word};
    ///
    /// let word = Word::new("banana", 1).unwrap();
    /// let known = Pattern::reveal(&word, 'n');
    /// let merged = known.merge(&Pattern::reveal(&word, 'a')).unwrap();
    /// assert_eq!(merged.as_str(), "_anana");
    ///
    /// assert!(merged.merge(&Pattern::blank(3)).is_err());
    /// ```
    pub fn merge(&self, revealed: &Self) -> Result<Self, PatternError> {
        let (known_len, revealed_len) = (self.len(), revealed.len());
        if known_len != revealed_len {
            return Err(PatternError::LengthMismatch {
                known: known_len,
                revealed: revealed_len,
            });
        }
        Ok(self.overlay(revealed))
    }

    /// `merge` for patterns already known to describe the same word length
    pub(crate) fn overlay(&self, revealed: &Self) -> Self {
        debug_assert_eq!(self.len(), revealed.len(), "overlay of unequal patterns");
        Self(
            self.0
                .chars()
                .zip(revealed.0.chars())
                .map(|(known, new)| if known == PLACEHOLDER { new } else { known })
                .collect(),
        )
    }

    /// Number of positions (characters)
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of placeholder positions
    #[must_use]
    pub fn hidden(&self) -> usize {
        self.0.chars().filter(|&ch| ch == PLACEHOLDER).count()
    }

    /// Number of revealed positions
    #[must_use]
    pub fn revealed(&self) -> usize {
        self.len() - self.hidden()
    }

    /// Number of revealed letter positions, not counting punctuation
    #[must_use]
    pub fn letters(&self) -> usize {
        self.0.chars().filter(|&ch| is_guessable(ch)).count()
    }

    /// True when this outcome of a guess made at `before` shows no new letter
    ///
    /// Punctuation shown by the guess does not count, so a first guess that only
    /// uncovers a space or hyphen is still a wrong guess.
    ///
    /// # Examples
    /// ```
    /// use hangman_book::core::Pattern;
    ///
    /// let blank = Pattern::blank(3);
    /// assert!(Pattern::from("_ _").is_miss_from(&blank));
    /// assert!(!Pattern::from("a _").is_miss_from(&blank));
    /// ```
    #[must_use]
    pub fn is_miss_from(&self, before: &Self) -> bool {
        self.letters() == before.letters()
    }

    /// True once no placeholder remains
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.contains(PLACEHOLDER)
    }

    /// Check whether `word` is consistent with this pattern
    ///
    /// Every revealed position must match and every hidden position must hold a letter
    /// that does not appear revealed elsewhere.
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        word.len() == self.len()
            && self.0.chars().zip(word.chars()).all(|(shown, ch)| {
                if shown == PLACEHOLDER {
                    is_guessable(ch) && !self.0.contains(ch)
                } else {
                    shown == ch
                }
            })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Pattern {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
