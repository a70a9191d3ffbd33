//! Recursive decision tree construction
//!
//! Builds one tree per word length by greedy letter selection. Each call either
//! terminates (budget exhausted, single word left, pattern complete) or guesses the
//! best letter and recurses into every outcome group. Words that cannot be told apart
//! within the wrong-guess budget are pruned and returned alongside the tree.

use super::node::{Forest, Guess, Leaf, Node};
use super::scorer::select_letter;
use crate::core::{LetterSet, MAX_WRONG, Pattern, Word, total_weight};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// What to do when the wrong-guess budget runs out with several words left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Exhaustion {
    /// Guess the most popular remaining word, prune the others
    #[default]
    Forced,
    /// Give up on the whole group
    Abandon,
}

/// Configuration for building decision trees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildConfig {
    pub max_wrong: usize,
    pub exhaustion: Exhaustion,
}

impl BuildConfig {
    #[must_use]
    pub const fn new(max_wrong: usize, exhaustion: Exhaustion) -> Self {
        Self {
            max_wrong,
            exhaustion,
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::new(MAX_WRONG, Exhaustion::Forced)
    }
}

/// A subtree with the words pruned while building it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub node: Node,
    pub pruned: Vec<Word>,
}

impl Branch {
    const fn leaf(node: Node) -> Self {
        Self {
            node,
            pruned: Vec::new(),
        }
    }
}

/// Result of building trees for a whole dictionary
#[derive(Debug, Clone, Default)]
pub struct Build {
    pub forest: Forest,
    pub pruned: Vec<Word>,
}

impl Build {
    /// Aggregate popularity of the pruned words
    #[must_use]
    pub fn pruned_weight(&self) -> u64 {
        total_weight(&self.pruned)
    }
}

/// Greedy decision tree builder
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder {
    config: BuildConfig,
}

impl TreeBuilder {
    #[must_use]
    pub const fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> BuildConfig {
        self.config
    }

    /// Build one tree per distinct word length
    ///
    /// # Examples
    /// ```
    /// use hangman_book::core::Word;
    /// use hangman_book::solver::TreeBuilder;
    ///
    /// let words = vec![
    ///     Word::new("cat", 5).unwrap(),
    ///     Word::new("car", 3).unwrap(),
    ///     Word::new("dove", 1).unwrap(),
    /// ];
    ///
    /// let build = TreeBuilder::default().build_forest(&words);
    /// assert_eq!(build.forest.lengths().collect::<Vec<_>>(), [3, 4]);
    /// assert!(build.pruned.is_empty());
    /// ```
    #[must_use]
    pub fn build_forest(&self, words: &[Word]) -> Build {
        self.build_forest_with(words, |_| {})
    }

    /// Build one tree per distinct word length, calling `progress` as each finishes
    ///
    /// Lengths are built in parallel; the result does not depend on scheduling.
    pub fn build_forest_with<F>(&self, words: &[Word], progress: F) -> Build
    where
        F: Fn(usize) + Sync,
    {
        let mut by_length: BTreeMap<usize, Vec<&Word>> = BTreeMap::new();
        for word in words {
            by_length.entry(word.len()).or_default().push(word);
        }

        let branches: Vec<(usize, Branch)> = by_length
            .into_par_iter()
            .map(|(length, group)| {
                let branch = self.build_length(length, group);
                progress(length);
                (length, branch)
            })
            .collect();

        let mut build = Build::default();
        for (length, branch) in branches {
            build.forest.insert(length, branch.node);
            build.pruned.extend(branch.pruned);
        }
        build
    }

    /// Build the tree for words of a single length
    #[must_use]
    pub fn build_length(&self, length: usize, words: Vec<&Word>) -> Branch {
        debug_assert!(words.iter().all(|w| w.len() == length));
        self.grow(&Pattern::blank(length), words, LetterSet::ALPHABET, 0)
    }

    /// Build the subtree for `words`, all of which currently show `pattern`
    #[must_use]
    pub fn grow(
        &self,
        pattern: &Pattern,
        words: Vec<&Word>,
        letters: LetterSet,
        wrong: usize,
    ) -> Branch {
        if wrong >= self.config.max_wrong {
            return self.exhaust(words);
        }

        if let [word] = words.as_slice() {
            return Branch::leaf(Node::Leaf(Leaf::Solved((*word).clone())));
        }

        if pattern.is_solved() {
            return Branch {
                node: Node::Empty,
                pruned: words.into_iter().skip(1).cloned().collect(),
            };
        }

        debug_assert!(!words.is_empty(), "empty group at {pattern}");

        let choice = match select_letter(pattern, &words, letters) {
            Some(choice) if !choice.score.stalled => choice,
            _ => return self.exhaust(words),
        };

        let remaining = letters.without(choice.letter);
        let mut children = BTreeMap::new();
        let mut pruned = Vec::new();

        let groups: BTreeMap<Pattern, Vec<&Word>> = choice.groups.into_iter().collect();
        for (outcome, group) in groups {
            let branch = if outcome.is_solved() {
                Branch {
                    node: Node::Empty,
                    pruned: group.into_iter().skip(1).cloned().collect(),
                }
            } else {
                let wrong = wrong + usize::from(outcome.is_miss_from(pattern));
                self.grow(&outcome, group, remaining, wrong)
            };
            pruned.extend(branch.pruned);
            children.insert(outcome, branch.node);
        }

        Branch {
            node: compact(pattern, choice.letter, children),
            pruned,
        }
    }

    /// Terminate a group once no further letter guess is allowed
    fn exhaust(&self, words: Vec<&Word>) -> Branch {
        match self.config.exhaustion {
            Exhaustion::Forced => {
                let Some(best) = words.iter().copied().min_by(|a, b| {
                    b.weight()
                        .cmp(&a.weight())
                        .then_with(|| a.text().cmp(b.text()))
                }) else {
                    return Branch::leaf(Node::Leaf(Leaf::Abandoned));
                };
                Branch {
                    node: Node::Leaf(Leaf::Forced(best.clone())),
                    pruned: words
                        .into_iter()
                        .filter(|&w| !std::ptr::eq(w, best))
                        .cloned()
                        .collect(),
                }
            }
            Exhaustion::Abandon => Branch {
                node: Node::Leaf(Leaf::Abandoned),
                pruned: words.into_iter().cloned().collect(),
            },
        }
    }
}

/// Drop guess nodes that no longer discriminate
///
/// A guess with a single outcome is replaced by that outcome's subtree. A guess with
/// two outcomes, a dead wrong-guess leaf and a leaf naming a word, is replaced by that
/// word leaf. A deeper subtree keeps its guess: its patterns show the guessed letter.
fn compact(pattern: &Pattern, letter: char, mut children: BTreeMap<Pattern, Node>) -> Node {
    if children.len() == 1
        && let Some((_, only)) = children.pop_first()
    {
        return only;
    }

    if children.len() == 2 && has_dead_miss(pattern, &children) {
        let word_key = children
            .iter()
            .find(|(_, node)| node.word().is_some())
            .map(|(outcome, _)| outcome.clone());
        if let Some(leaf) = word_key.and_then(|key| children.remove(&key)) {
            return leaf;
        }
    }

    Node::Guess(Guess { letter, children })
}

fn has_dead_miss(pattern: &Pattern, children: &BTreeMap<Pattern, Node>) -> bool {
    children
        .iter()
        .any(|(outcome, node)| node.is_dead() && outcome.is_miss_from(pattern))
}
