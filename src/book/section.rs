//! Book-facing data: numbered sections and their entries

use crate::core::Pattern;
use serde::Serialize;
use std::collections::BTreeMap;

/// What the reader does after seeing an outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    /// Turn to another section
    Section(usize),
    /// Guess this whole word
    Guess(String),
    /// The board shows the whole word
    Revealed(String),
    /// No word left to guess
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Section(_))
    }
}

/// One possible outcome of a section's guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Pattern the reader sees after the guess
    pub pattern: Pattern,
    /// The guessed letter was not in the word
    pub miss: bool,
    pub outcome: Outcome,
}

/// A numbered page of the book
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: usize,
    pub pattern: Pattern,
    pub wrong: usize,
    /// Letter to guess here, `None` for a root that is already a final guess
    pub letter: Option<char>,
    pub entries: Vec<Entry>,
}

/// The flattened book: sections in reading order plus where each word length starts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Book {
    pub sections: Vec<Section>,
    /// Word length to the id of its first section
    pub lengths: BTreeMap<usize, usize>,
}

impl Book {
    /// Look up a section by id
    #[must_use]
    pub fn section(&self, id: usize) -> Option<&Section> {
        id.checked_sub(1)
            .and_then(|index| self.sections.get(index))
            .filter(|section| section.id == id)
    }

    /// Number of terminal entries across all sections
    #[must_use]
    pub fn terminal_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|section| &section.entries)
            .filter(|entry| entry.outcome.is_terminal())
            .count()
    }
}
