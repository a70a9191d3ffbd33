//! Dictionary loading utilities
//!
//! Dictionaries are plain text with one `word<TAB>count` record per line. Repeated words
//! have their counts summed, and the result is ranked by popularity.

use crate::core::Word;
use log::debug;
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::Path;

/// A weighted word list ranked by descending weight, ties by ascending text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// Parse `word<TAB>count` records
    ///
    /// A line without a tab is a word of weight 1. Blank lines are ignored; lines with
    /// an unparsable count or an unusable word are skipped.
    ///
    /// # Examples
    /// ```
    /// use hangman_book::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::parse("Cat\t5\ndog\t9\ncat\t7\n");
    /// let ranked: Vec<_> = dictionary.words().iter().map(|w| (w.text(), w.weight())).collect();
    ///
    /// assert_eq!(ranked, [("cat", 12), ("dog", 9)]);
    /// ```
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let records = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(index, line)| {
                let record = parse_record(line);
                if record.is_none() {
                    debug!("skipping dictionary line {}: {line:?}", index + 1);
                }
                record
            });

        Self::from_words(records)
    }

    /// Merge and rank arbitrary words
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut merged: FxHashMap<String, u64> = FxHashMap::default();
        for word in words {
            let weight = merged.entry(word.text().to_string()).or_default();
            *weight = weight.saturating_add(word.weight());
        }

        let mut words: Vec<Word> = merged
            .into_iter()
            .filter_map(|(text, weight)| Word::new(text, weight).ok())
            .collect();
        words.sort_by(|a, b| {
            b.weight()
                .cmp(&a.weight())
                .then_with(|| a.text().cmp(b.text()))
        });

        Self { words }
    }

    /// Words in rank order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Split into the `count` most popular words and the remainder
    #[must_use]
    pub fn split_top(&self, count: usize) -> (Vec<Word>, Vec<Word>) {
        let cut = count.min(self.words.len());
        (self.words[..cut].to_vec(), self.words[cut..].to_vec())
    }
}

fn parse_record(line: &str) -> Option<Word> {
    let (text, weight) = match line.split_once('\t') {
        Some((text, count)) => (text, count.trim().parse().ok()?),
        None => (line, 1),
    };
    Word::new(text, weight).ok()
}

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use hangman_book::wordlists::load_from_file;
///
/// let dictionary = load_from_file("data/nouns.tsv").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(Dictionary::parse(&content))
}
