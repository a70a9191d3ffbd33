//! Decision tree representation
//!
//! A tree is owned top-down: each guess node owns its children, keyed by the
//! pattern the player sees after the guess. A node does not store its own pattern or
//! wrong-guess count; both are implied by the path from the root and recovered by
//! [`Forest::states`].

use crate::core::{Pattern, Word};
use std::collections::BTreeMap;

/// A node of a per-length decision tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Guess a letter and branch on the outcome
    Guess(Guess),
    /// Stop guessing letters and name a word (or give up)
    Leaf(Leaf),
    /// The pattern is complete, the player has won
    Empty,
}

/// Guess node: the chosen letter and one child per observed outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub letter: char,
    pub children: BTreeMap<Pattern, Node>,
}

/// Terminal decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Leaf {
    /// Exactly one word remains
    Solved(Word),
    /// The wrong-guess budget ran out; a representative word is guessed
    Forced(Word),
    /// The wrong-guess budget ran out and nothing is guessed
    Abandoned,
}

impl Leaf {
    /// The word this leaf guesses, if any
    #[must_use]
    pub const fn word(&self) -> Option<&Word> {
        match self {
            Self::Solved(word) | Self::Forced(word) => Some(word),
            Self::Abandoned => None,
        }
    }
}

impl Node {
    /// The guessed letter, `None` for leaves
    #[must_use]
    pub const fn letter(&self) -> Option<char> {
        match self {
            Self::Guess(guess) => Some(guess.letter),
            Self::Leaf(_) | Self::Empty => None,
        }
    }

    #[must_use]
    pub const fn is_guess(&self) -> bool {
        matches!(self, Self::Guess(_))
    }

    /// A leaf that carries no usable word
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        matches!(self, Self::Leaf(Leaf::Abandoned))
    }

    /// The word a leaf names
    #[must_use]
    pub const fn word(&self) -> Option<&Word> {
        match self {
            Self::Leaf(leaf) => leaf.word(),
            Self::Guess(_) | Self::Empty => None,
        }
    }

    /// Number of guess nodes in this subtree
    #[must_use]
    pub fn guess_count(&self) -> usize {
        match self {
            Self::Guess(guess) => {
                1 + guess.children.values().map(Self::guess_count).sum::<usize>()
            }
            Self::Leaf(_) | Self::Empty => 0,
        }
    }

    /// Number of terminal nodes in this subtree
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Guess(guess) => guess.children.values().map(Self::leaf_count).sum(),
            Self::Leaf(_) | Self::Empty => 1,
        }
    }

    /// Longest chain of guess nodes from this node down
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Guess(guess) => {
                1 + guess.children.values().map(Self::depth).max().unwrap_or(0)
            }
            Self::Leaf(_) | Self::Empty => 0,
        }
    }
}

/// One visited node with the state implied by its path
#[derive(Debug, Clone)]
pub struct State<'a> {
    pub length: usize,
    pub pattern: Pattern,
    pub wrong: usize,
    pub depth: usize,
    pub node: &'a Node,
}

/// One decision tree per word length, keyed by length
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    trees: BTreeMap<usize, Node>,
}

impl Forest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, length: usize, root: Node) {
        self.trees.insert(length, root);
    }

    /// Root of the tree for words of `length` characters
    #[must_use]
    pub fn root(&self, length: usize) -> Option<&Node> {
        self.trees.get(&length)
    }

    pub fn root_mut(&mut self, length: usize) -> Option<&mut Node> {
        self.trees.get_mut(&length)
    }

    /// Word lengths present, ascending
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.trees.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Node)> {
        self.trees.iter().map(|(&length, node)| (length, node))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.trees.values().map(Node::guess_count).sum()
    }

    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.trees.values().map(Node::leaf_count).sum()
    }

    /// Every node of every tree, depth-first, with its pattern and wrong-guess count
    ///
    /// A child's wrong-guess count is its parent's plus one when its key shows no
    /// letter beyond the parent's pattern.
    #[must_use]
    pub fn states(&self) -> Vec<State<'_>> {
        let mut states = Vec::new();
        let mut stack: Vec<State<'_>> = self
            .trees
            .iter()
            .rev()
            .map(|(&length, node)| State {
                length,
                pattern: Pattern::blank(length),
                wrong: 0,
                depth: 0,
                node,
            })
            .collect();

        while let Some(state) = stack.pop() {
            if let Node::Guess(guess) = state.node {
                for (pattern, child) in guess.children.iter().rev() {
                    let miss = pattern.is_miss_from(&state.pattern);
                    stack.push(State {
                        length: state.length,
                        wrong: state.wrong + usize::from(miss),
                        pattern: pattern.clone(),
                        depth: state.depth + 1,
                        node: child,
                    });
                }
            }
            states.push(state);
        }

        states
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(text: &str) -> Node {
        Node::Leaf(Leaf::Solved(Word::new(text, 1).unwrap()))
    }

    fn pattern(text: &str) -> Pattern {
        Pattern::from(text)
    }

    fn sample_forest() -> Forest {
        // root guesses t: "__t" -> cat, "___" -> guess r
        let inner = Node::Guess(Guess {
            letter: 'r',
            children: BTreeMap::from([
                (pattern("__r"), leaf("car")),
                (pattern("___"), leaf("can")),
            ]),
        });
        let root = Node::Guess(Guess {
            letter: 't',
            children: BTreeMap::from([
                (pattern("__t"), leaf("cat")),
                (pattern("___"), inner),
            ]),
        });

        let mut forest = Forest::new();
        forest.insert(3, root);
        forest.insert(4, leaf("cats"));
        forest
    }

    #[test]
    fn counts_nodes() {
        let forest = sample_forest();
        assert_eq!(forest.len(), 2);
        assert_eq!(forest.guess_count(), 2);
        assert_eq!(forest.leaf_count(), 4);
        assert_eq!(forest.root(3).unwrap().depth(), 2);
        assert_eq!(forest.root(4).unwrap().depth(), 0);
        assert_eq!(forest.lengths().collect::<Vec<_>>(), [3, 4]);
    }

    #[test]
    fn states_track_wrong_guesses() {
        let forest = sample_forest();
        let states = forest.states();

        assert_eq!(states.len(), 6);

        let can = states
            .iter()
            .find(|s| matches!(s.node, Node::Leaf(Leaf::Solved(w)) if w.text() == "can"))
            .unwrap();
        assert_eq!(can.wrong, 2);
        assert_eq!(can.depth, 2);
        assert_eq!(can.pattern.as_str(), "___");

        let cat = states
            .iter()
            .find(|s| matches!(s.node, Node::Leaf(Leaf::Solved(w)) if w.text() == "cat"))
            .unwrap();
        assert_eq!(cat.wrong, 0);
        assert_eq!(cat.pattern.as_str(), "__t");
    }

    #[test]
    fn states_are_depth_first_by_length() {
        let forest = sample_forest();
        let states = forest.states();

        assert_eq!(states[0].length, 3);
        assert_eq!(states[0].depth, 0);
        assert_eq!(states.last().unwrap().length, 4);
    }

    #[test]
    fn node_accessors() {
        let forest = sample_forest();
        let root = forest.root(3).unwrap();
        assert_eq!(root.letter(), Some('t'));
        assert!(root.is_guess());
        assert!(!root.is_dead());
        assert!(Node::Leaf(Leaf::Abandoned).is_dead());
        assert_eq!(Node::Empty.letter(), None);
        assert_eq!(Leaf::Abandoned.word(), None);
        assert_eq!(root.word(), None);
        assert_eq!(forest.root(4).unwrap().word().map(Word::text), Some("cats"));
    }

    #[test]
    fn punctuation_miss_counts_as_wrong() {
        // "x a" and "x b": guessing a shows the space either way
        let root = Node::Guess(Guess {
            letter: 'a',
            children: BTreeMap::from([
                (pattern("_ a"), leaf("x a")),
                (pattern("_ _"), leaf("x b")),
            ]),
        });
        let mut forest = Forest::new();
        forest.insert(3, root);

        let states = forest.states();
        let xb = states
            .iter()
            .find(|s| s.node.word().is_some_and(|w| w.text() == "x b"))
            .unwrap();
        assert_eq!(xb.wrong, 1);
        let xa = states
            .iter()
            .find(|s| s.node.word().is_some_and(|w| w.text() == "x a"))
            .unwrap();
        assert_eq!(xa.wrong, 0);
    }
}
