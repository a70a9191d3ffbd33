//! Weighted dictionaries for tree building
//!
//! Provides a small noun dictionary compiled into the binary and loading of larger
//! dictionaries from `word<TAB>count` files.

mod embedded;
pub mod loader;

use crate::core::Word;
pub use embedded::{SAMPLE, SAMPLE_COUNT};
pub use loader::{Dictionary, load_from_file};

/// The embedded sample dictionary, merged and ranked
#[must_use]
pub fn sample() -> Dictionary {
    Dictionary::from_words(
        SAMPLE
            .iter()
            .filter_map(|&(text, weight)| Word::new(text, weight).ok()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_matches_const() {
        assert_eq!(SAMPLE.len(), SAMPLE_COUNT);
    }

    #[test]
    fn sample_merges_repeated_words() {
        let dictionary = sample();

        // "Time" and "Dog" appear twice with different case
        assert_eq!(dictionary.len(), SAMPLE_COUNT - 2);
        let time = dictionary.words().iter().find(|w| w.text() == "time").unwrap();
        assert_eq!(time.weight(), 3_215_847 + 104_331);
    }

    #[test]
    fn sample_is_ranked() {
        let dictionary = sample();
        let words = dictionary.words();

        assert_eq!(words[0].text(), "time");
        assert!(words.windows(2).all(|pair| pair[0].weight() >= pair[1].weight()));
    }

    #[test]
    fn sample_words_are_lowercase() {
        for word in sample().words() {
            assert_eq!(word.text(), word.text().to_lowercase(), "'{word}' is not normalized");
        }
    }
}
