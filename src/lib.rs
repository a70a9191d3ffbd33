//! Hangman Book
//!
//! Builds greedy hangman decision trees from a weighted dictionary and flattens them
//! into a numbered choose-your-path book.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_book::book::{SectionOrder, project};
//! use hangman_book::core::Word;
//! use hangman_book::solver::TreeBuilder;
//!
//! let words = vec![
//!     Word::new("cat", 5).unwrap(),
//!     Word::new("car", 3).unwrap(),
//!     Word::new("can", 2).unwrap(),
//! ];
//!
//! let build = TreeBuilder::default().build_forest(&words);
//! let book = project(&build.forest, SectionOrder::Sorted);
//! println!("{} sections", book.sections.len());
//! ```

// Core domain types
pub mod core;

// Tree building
pub mod solver;

// Book projection
pub mod book;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
