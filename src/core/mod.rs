//! Core domain types for hangman
//!
//! This module contains the fundamental domain types: weighted words, revealed-letter
//! patterns and the set of letters still available for guessing.
//! All types here are pure, testable, and have clear mathematical properties.

mod letters;
mod pattern;
mod word;

pub use letters::{LetterSet, MAX_WRONG};
pub use pattern::{Pattern, PatternError, is_guessable};
pub use word::{Word, WordError, total_weight};

/// Symbol standing for a position that has not been revealed yet
pub const PLACEHOLDER: char = '_';
