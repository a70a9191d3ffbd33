//! Word tracing command
//!
//! Replays a decision tree against a known target word, the way a reader would follow
//! the book.

use crate::core::{LetterSet, PLACEHOLDER, Pattern, Word};
use crate::solver::{Forest, Guess, Node};

/// A single letter guess on the way down the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceStep {
    pub letter: char,
    /// The letter occurs in the target
    pub hit: bool,
    /// Pattern shown after the guess
    pub pattern: Pattern,
    /// Wrong guesses so far, including this one
    pub wrong: usize,
}

/// How a traced game ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceOutcome {
    /// The board shows the whole word
    Revealed,
    /// A whole-word guess, correct only if it equals the target
    Guessed(String),
    /// The tree gave up on this branch
    Lost,
    /// The tree has no branch for this pattern
    Uncovered(Pattern),
}

/// Result of tracing one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceResult {
    pub target: String,
    pub steps: Vec<TraceStep>,
    pub outcome: TraceOutcome,
}

impl TraceResult {
    /// The tree found the target
    #[must_use]
    pub fn success(&self) -> bool {
        match &self.outcome {
            TraceOutcome::Revealed => true,
            TraceOutcome::Guessed(word) => *word == self.target,
            TraceOutcome::Lost | TraceOutcome::Uncovered(_) => false,
        }
    }

    /// Wrong letter guesses made
    #[must_use]
    pub fn wrong(&self) -> usize {
        self.steps.last().map_or(0, |step| step.wrong)
    }
}

/// Trace `target` through the tree for its length
///
/// # Errors
///
/// Returns an error if the target is not a valid word or no tree exists for its length.
///
/// # Examples
/// ```
/// use hangman_book::commands::trace_word;
/// use hangman_book::core::Word;
/// use hangman_book::solver::TreeBuilder;
///
/// let words = vec![Word::new("cat", 5).unwrap(), Word::new("dog", 3).unwrap()];
/// let forest = TreeBuilder::default().build_forest(&words).forest;
///
/// let result = trace_word(&forest, "dog").unwrap();
/// assert!(result.success());
/// assert!(trace_word(&forest, "horse").is_err());
/// ```
pub fn trace_word(forest: &Forest, target: &str) -> Result<TraceResult, String> {
    let word = Word::new(target, 0).map_err(|e| format!("Invalid word: {e}"))?;
    let root = forest
        .root(word.len())
        .ok_or_else(|| format!("No tree for words of length {}", word.len()))?;

    Ok(trace(root, &word))
}

/// Follow `word` down from `root`
#[must_use]
pub fn trace(root: &Node, word: &Word) -> TraceResult {
    let mut pattern = Pattern::blank(word.len());
    let mut node = root;
    let mut unguessed = LetterSet::ALPHABET;
    let mut steps = Vec::new();
    let mut wrong = 0;

    let outcome = loop {
        let guess = match node {
            Node::Guess(guess) => guess,
            Node::Leaf(leaf) => {
                break leaf.word().map_or(TraceOutcome::Lost, |found| {
                    if pattern.is_solved() {
                        TraceOutcome::Revealed
                    } else {
                        TraceOutcome::Guessed(found.text().to_string())
                    }
                });
            }
            Node::Empty => break TraceOutcome::Revealed,
        };

        let hit = word.has_letter(guess.letter);
        wrong += usize::from(!hit);
        unguessed = unguessed.without(guess.letter);

        let Some((next, child)) = follow(guess, word, unguessed) else {
            let shown = pattern.overlay(&Pattern::reveal(word, guess.letter));
            steps.push(TraceStep {
                letter: guess.letter,
                hit,
                pattern: shown.clone(),
                wrong,
            });
            break TraceOutcome::Uncovered(shown);
        };

        steps.push(TraceStep {
            letter: guess.letter,
            hit,
            pattern: next.clone(),
            wrong,
        });
        pattern = next.clone();
        node = child;
    };

    TraceResult {
        target: word.text().to_string(),
        steps,
        outcome,
    }
}

/// The outcome branch `word` belongs to
///
/// Its pattern must agree with `word` and may only hide letters nobody has guessed yet.
fn follow<'a>(
    guess: &'a Guess,
    word: &Word,
    unguessed: LetterSet,
) -> Option<(&'a Pattern, &'a Node)> {
    guess.children.iter().find(|(pattern, _)| {
        pattern.admits(word)
            && pattern
                .as_str()
                .chars()
                .zip(word.chars())
                .all(|(shown, ch)| shown != PLACEHOLDER || unguessed.contains(ch))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_WRONG;
    use crate::solver::{BuildConfig, Exhaustion, Leaf, TreeBuilder};
    use std::collections::BTreeMap;

    fn words(entries: &[(&str, u64)]) -> Vec<Word> {
        entries
            .iter()
            .map(|&(text, weight)| Word::new(text, weight).unwrap())
            .collect()
    }

    fn forest(entries: &[(&str, u64)]) -> Forest {
        TreeBuilder::default().build_forest(&words(entries)).forest
    }

    #[test]
    fn trace_follows_guesses() {
        let forest = forest(&[("cat", 5), ("car", 3), ("can", 2)]);
        let result = trace_word(&forest, "can").unwrap();

        let letters: Vec<(char, bool, usize)> =
            result.steps.iter().map(|s| (s.letter, s.hit, s.wrong)).collect();
        assert_eq!(letters, [('t', false, 1), ('r', false, 2)]);
        assert_eq!(result.outcome, TraceOutcome::Guessed("can".to_string()));
        assert!(result.success());
        assert_eq!(result.wrong(), 2);
    }

    #[test]
    fn trace_records_patterns() {
        let forest = forest(&[("cat", 5), ("car", 3), ("can", 2)]);
        let result = trace_word(&forest, "CAT").unwrap();

        assert_eq!(result.target, "cat");
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.steps[0].pattern, Pattern::from("__t"));
        assert_eq!(result.wrong(), 0);
        assert!(result.success());
    }

    #[test]
    fn unknown_word_takes_a_wrong_turn() {
        let forest = forest(&[("cat", 5), ("car", 3), ("can", 2)]);

        // follows the "__t" branch and guesses cat
        let result = trace_word(&forest, "pit").unwrap();
        assert_eq!(result.outcome, TraceOutcome::Guessed("cat".to_string()));
        assert!(!result.success());
    }

    #[test]
    fn uncovered_pattern() {
        let forest = forest(&[("cat", 5), ("car", 3), ("can", 2)]);

        // "tot" shows "t_t" which no dictionary word produced
        let result = trace_word(&forest, "tot").unwrap();
        assert_eq!(result.outcome, TraceOutcome::Uncovered(Pattern::from("t_t")));
        assert!(!result.success());
    }

    #[test]
    fn revealed_by_guessing() {
        let mut forest = Forest::new();
        forest.insert(
            2,
            Node::Guess(Guess {
                letter: 'o',
                children: BTreeMap::from([
                    (Pattern::from("__"), Node::Leaf(Leaf::Abandoned)),
                    (Pattern::from("oo"), Node::Empty),
                ]),
            }),
        );

        let result = trace_word(&forest, "oo").unwrap();
        assert_eq!(result.outcome, TraceOutcome::Revealed);
        assert!(result.success());

        let lost = trace_word(&forest, "hi").unwrap();
        assert_eq!(lost.outcome, TraceOutcome::Lost);
        assert!(!lost.success());
    }

    #[test]
    fn every_kept_word_is_found() {
        let list = words(&[
            ("xa", 1),
            ("xb", 1),
            ("xc", 1),
            ("xd", 1),
            ("xe", 1),
            ("xf", 1),
            ("xg", 1),
            ("xh", 1),
            ("xi", 1),
            ("xj", 1),
        ]);

        for exhaustion in [Exhaustion::Forced, Exhaustion::Abandon] {
            let build = TreeBuilder::new(BuildConfig::new(6, exhaustion)).build_forest(&list);
            for word in &list {
                let result = trace_word(&build.forest, word.text()).unwrap();
                let pruned = build.pruned.contains(word);
                assert_eq!(result.success(), !pruned, "{word}");
                assert!(result.wrong() <= 6);
            }
        }
    }

    #[test]
    fn spaced_words_stay_within_the_ceiling() {
        let list: Vec<Word> = ('a'..='j')
            .map(|ch| Word::new(format!("x {ch}"), 1).unwrap())
            .chain(words(&[("x-k", 1), ("xlm", 1), ("n o", 1)]))
            .collect();

        for exhaustion in [Exhaustion::Forced, Exhaustion::Abandon] {
            let builder = TreeBuilder::new(BuildConfig::new(MAX_WRONG, exhaustion));
            let build = builder.build_forest(&list);
            for word in &list {
                let result = trace(build.forest.root(word.len()).unwrap(), word);
                let pruned = build.pruned.contains(word);
                assert_eq!(result.success(), !pruned, "{word}");
                if !pruned {
                    assert!(result.wrong() <= MAX_WRONG, "{word} needs {}", result.wrong());
                }
            }
        }
    }

    #[test]
    fn first_miss_on_spaced_word_is_counted() {
        let list: Vec<Word> = ('a'..='j')
            .map(|ch| Word::new(format!("x {ch}"), 1).unwrap())
            .collect();
        let forest = TreeBuilder::default().build_forest(&list).forest;

        let result = trace_word(&forest, "x g").unwrap();
        assert_eq!(result.outcome, TraceOutcome::Guessed("x g".to_string()));
        assert_eq!(result.wrong(), MAX_WRONG);
        assert_eq!(result.steps[0].pattern, Pattern::from("_ _"));
        assert_eq!(result.steps[0].wrong, 1);

        let pruned = trace_word(&forest, "x h").unwrap();
        assert_eq!(pruned.wrong(), MAX_WRONG);
        assert!(!pruned.success());
    }

    #[test]
    fn invalid_targets() {
        let forest = forest(&[("cat", 5)]);
        assert!(trace_word(&forest, "   ").is_err());
        assert!(trace_word(&forest, "c_t").is_err());
        assert!(trace_word(&forest, "horse").is_err());
    }
}
