//! Decision tree construction
//!
//! This module contains the greedy hangman tree builder and everything it relies on:
//! outcome partitioning, letter scoring, the tree representation and augmentation
//! with additional words.

pub mod augment;
mod builder;
pub mod node;
pub mod partition;
pub mod scorer;

pub use augment::augment;
pub use builder::{Branch, Build, BuildConfig, Exhaustion, TreeBuilder};
pub use node::{Forest, Guess, Leaf, Node, State};
pub use scorer::{Choice, Score, select_letter};
