//! Grouping of words by the pattern a guess would produce

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Words grouped by the pattern they would show after a guess
pub type Partition<'a> = FxHashMap<Pattern, Vec<&'a Word>>;

/// Group `words` by the pattern each would show after guessing `letter`
///
/// `known` is the pattern all words currently share; the returned keys are already
/// merged with it. Groups whose key shows no new letter are wrong-guess outcomes.
/// There is usually one, keyed by `known` itself, but before the first guess words
/// with spaces or hyphens in different places miss into separate groups.
#[must_use]
pub fn partition<'a>(known: &Pattern, words: &[&'a Word], letter: char) -> Partition<'a> {
    let mut groups: Partition<'a> = FxHashMap::default();

    for &word in words {
        let pattern = known.overlay(&Pattern::reveal(word, letter));
        groups.entry(pattern).or_default().push(word);
    }

    groups
}
