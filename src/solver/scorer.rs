//! Greedy letter selection
//!
//! Every letter still available is scored against the current word group and the
//! minimum score wins. The score is a lexicographic tuple:
//!
//! 1. `stalled`: the letter yields a single outcome and discriminates nothing
//! 2. `misses`: words for which the letter would be a wrong guess
//! 3. `miss_weight`: popularity of those words
//! 4. `largest`: size of the biggest outcome group
//! 5. `branches`: number of distinct outcomes (more is better)
//!
//! Wrong guesses are the scarce resource, so the wrong-guess branch is minimized
//! before discrimination is maximized. Remaining ties go to the alphabetically
//! earlier letter.

use super::partition::{Partition, partition};
use crate::core::{LetterSet, Pattern, Word, total_weight};
use rayon::prelude::*;
use std::cmp::Reverse;

/// Composite score of one candidate letter (lower is better)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score {
    pub stalled: bool,
    pub misses: usize,
    pub miss_weight: u64,
    pub largest: usize,
    pub branches: Reverse<usize>,
}

/// The winning letter together with the partition it produces
#[derive(Debug)]
pub struct Choice<'a> {
    pub letter: char,
    pub score: Score,
    pub groups: Partition<'a>,
}

/// Score a partition computed against the `known` pattern
#[must_use]
pub fn score_partition(known: &Pattern, groups: &Partition<'_>) -> Score {
    let missed: Vec<&Word> = groups
        .iter()
        .filter(|(outcome, _)| outcome.is_miss_from(known))
        .flat_map(|(_, group)| group.iter().copied())
        .collect();

    Score {
        stalled: groups.len() < 2,
        misses: missed.len(),
        miss_weight: total_weight(missed),
        largest: groups.values().map(Vec::len).max().unwrap_or(0),
        branches: Reverse(groups.len()),
    }
}

/// Select the best letter to guess next
///
/// Returns the winning letter with its score and partition, or `None` if no letters
/// remain.
///
/// # Examples
/// ```
/// use hangman_book::core::{LetterSet, Pattern, Word};
/// use hangman_book::solver::select_letter;
///
/// let words = vec![
///     Word::new("cat", 5).unwrap(),
///     Word::new("car", 3).unwrap(),
///     Word::new("can", 2).unwrap(),
/// ];
/// let refs: Vec<&Word> = words.iter().collect();
///
/// let choice = select_letter(&Pattern::blank(3), &refs, LetterSet::ALPHABET).unwrap();
/// // 'a' reveals the same position in every word and tells nothing apart
/// assert_eq!(choice.letter, 't');
/// assert_eq!(choice.groups.len(), 2);
/// ```
#[must_use]
pub fn select_letter<'a>(
    known: &Pattern,
    words: &[&'a Word],
    letters: LetterSet,
) -> Option<Choice<'a>> {
    letters
        .iter()
        .collect::<Vec<char>>()
        .into_par_iter()
        .map(|letter| {
            let groups = partition(known, words, letter);
            let score = score_partition(known, &groups);
            Choice {
                letter,
                score,
                groups,
            }
        })
        .min_by_key(|choice| (choice.score, choice.letter))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(entries: &[(&str, u64)]) -> Vec<Word> {
        entries
            .iter()
            .map(|&(text, weight)| Word::new(text, weight).unwrap())
            .collect()
    }

    #[test]
    fn rejects_non_discriminating_letter() {
        let list = words(&[("cat", 5), ("car", 3), ("can", 2)]);
        let refs: Vec<&Word> = list.iter().collect();
        let known = Pattern::blank(3);

        let a = score_partition(&known, &partition(&known, &refs, 'a'));
        assert!(a.stalled);
        assert_eq!(a.misses, 0);

        let choice = select_letter(&known, &refs, LetterSet::ALPHABET).unwrap();
        assert_ne!(choice.letter, 'a');
        assert_ne!(choice.letter, 'c');
        assert!(!choice.score.stalled);
    }

    #[test]
    fn lighter_miss_branch_wins() {
        // t misses car+can (5), r misses cat+can (7), n misses cat+car (8)
        let list = words(&[("cat", 5), ("car", 3), ("can", 2)]);
        let refs: Vec<&Word> = list.iter().collect();

        let choice = select_letter(&Pattern::blank(3), &refs, LetterSet::ALPHABET).unwrap();

        assert_eq!(choice.letter, 't');
        assert_eq!(choice.score.misses, 2);
        assert_eq!(choice.score.miss_weight, 5);
        assert_eq!(choice.score.largest, 2);
        assert_eq!(choice.score.branches, Reverse(2));
    }

    #[test]
    fn fewer_misses_beats_better_balance() {
        // e appears in every word: no wrong guess possible, although the split is poor
        let list = words(&[("bee", 1), ("eel", 1), ("elk", 1), ("ewe", 1)]);
        let refs: Vec<&Word> = list.iter().collect();

        let choice = select_letter(&Pattern::blank(3), &refs, LetterSet::ALPHABET).unwrap();

        assert_eq!(choice.letter, 'e');
        assert_eq!(choice.score.misses, 0);
    }

    #[test]
    fn ties_go_to_earlier_letter() {
        let list = words(&[("ab", 1), ("cd", 1)]);
        let refs: Vec<&Word> = list.iter().collect();

        // a, b, c and d all split 1/1 with a single-word miss branch of weight 1
        let choice = select_letter(&Pattern::blank(2), &refs, LetterSet::ALPHABET).unwrap();
        assert_eq!(choice.letter, 'a');

        let restricted: LetterSet = "dc".chars().collect();
        let choice = select_letter(&Pattern::blank(2), &refs, restricted).unwrap();
        assert_eq!(choice.letter, 'c');
    }

    #[test]
    fn selection_is_deterministic() {
        let list = words(&[("able", 4), ("acid", 4), ("aged", 4), ("also", 4), ("area", 4)]);
        let refs: Vec<&Word> = list.iter().collect();

        let first = select_letter(&Pattern::blank(4), &refs, LetterSet::ALPHABET).unwrap();
        for _ in 0..10 {
            let again = select_letter(&Pattern::blank(4), &refs, LetterSet::ALPHABET).unwrap();
            assert_eq!(again.letter, first.letter);
            assert_eq!(again.score, first.score);
        }
    }

    #[test]
    fn returns_none_without_letters() {
        let list = words(&[("cat", 1), ("dog", 1)]);
        let refs: Vec<&Word> = list.iter().collect();

        assert!(select_letter(&Pattern::blank(3), &refs, LetterSet::EMPTY).is_none());
    }

    #[test]
    fn winning_partition_is_returned() {
        let list = words(&[("cat", 5), ("car", 3), ("can", 2)]);
        let refs: Vec<&Word> = list.iter().collect();
        let known = Pattern::blank(3);

        let choice = select_letter(&known, &refs, LetterSet::ALPHABET).unwrap();
        let expected = partition(&known, &refs, choice.letter);

        assert_eq!(choice.groups, expected);
    }
}
