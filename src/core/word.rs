//! Weighted dictionary word
//!
//! A Word stores its normalized text, its popularity weight and its length in characters.

use super::PLACEHOLDER;
use serde::Serialize;
use std::fmt;

/// A lowercase dictionary word with a popularity weight
///
/// Words are immutable once created. Ordering and equality consider the text first,
/// so sorted collections of words are alphabetical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Word {
    text: String,
    weight: u64,
    #[serde(skip)]
    len: usize,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    ContainsPlaceholder,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::ContainsPlaceholder => {
                write!(f, "Word must not contain the placeholder '{PLACEHOLDER}'")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string and a popularity weight
    ///
    /// The text is trimmed and lowercased. Characters other than `a`-`z` are kept and
    /// treated as always revealed by patterns.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - The text contains the placeholder symbol
    ///
    /// # Examples
    /// ```
    /// use hangman_book::core::Word;
    ///
    /// let word = Word::new(" Cat ", 5).unwrap();
    /// assert_eq!(word.text(), "cat");
    /// assert_eq!(word.weight(), 5);
    ///
    /// assert!(Word::new("   ", 1).is_err());
    /// ```
    pub fn new(text: impl AsRef<str>, weight: u64) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if text.contains(PLACEHOLDER) {
            return Err(WordError::ContainsPlaceholder);
        }

        let len = text.chars().count();
        Ok(Self { text, weight, len })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Popularity weight (corpus count)
    #[inline]
    #[must_use]
    pub const fn weight(&self) -> u64 {
        self.weight
    }

    /// Length in characters
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over the characters of the word
    #[inline]
    pub fn chars(&self) -> std::str::Chars<'_> {
        self.text.chars()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.text.contains(letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Total weight of a group of words
#[must_use]
pub fn total_weight<'a>(words: impl IntoIterator<Item = &'a Word>) -> u64 {
    words.into_iter().map(Word::weight).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("cat", 5).unwrap();
        assert_eq!(word.text(), "cat");
        assert_eq!(word.weight(), 5);
        assert_eq!(word.len(), 3);
    }

    #[test]
    fn word_creation_normalized() {
        let word = Word::new("  CaT\n", 1).unwrap();
        assert_eq!(word.text(), "cat");
    }

    #[test]
    fn word_creation_keeps_punctuation() {
        let word = Word::new("ice cream", 1).unwrap();
        assert_eq!(word.len(), 9);
        assert!(word.has_letter('i'));
        assert!(!word.has_letter('z'));
    }

    #[test]
    fn word_length_counts_characters() {
        let word = Word::new("café", 1).unwrap();
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new("", 1), Err(WordError::Empty));
        assert_eq!(Word::new(" \t", 1), Err(WordError::Empty));
        assert_eq!(Word::new("c_t", 1), Err(WordError::ContainsPlaceholder));
    }

    #[test]
    fn word_ordering_is_alphabetical() {
        let mut words = vec![
            Word::new("dog", 1).unwrap(),
            Word::new("cat", 9).unwrap(),
            Word::new("cab", 2).unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["cab", "cat", "dog"]);
    }

    #[test]
    fn total_weight_sums() {
        let words = [Word::new("cat", 5).unwrap(), Word::new("car", 3).unwrap()];
        assert_eq!(total_weight(&words), 8);
        assert_eq!(total_weight(std::iter::empty()), 0);
    }

    #[test]
    fn word_display() {
        let word = Word::new("cat", 1).unwrap();
        assert_eq!(format!("{word}"), "cat");
    }
}
