//! Flattening of decision trees into numbered book sections
//!
//! Every guess node becomes a section, as does the root of each length even when it
//! is a leaf. Sections are numbered from 1 in an order where every reference points
//! forward: ascending wrong-guess count, then ascending number of revealed positions.
//! A child either costs a wrong guess or reveals at least one more position, so it
//! always sorts after its parent.

use super::section::{Book, Entry, Outcome, Section};
use crate::core::Pattern;
use crate::solver::{Forest, Node, State};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashMap;

/// How sections with the same wrong-guess count and revealed positions are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionOrder {
    /// Fully deterministic: ties broken by pattern
    #[default]
    Sorted,
    /// Ties shuffled with a seeded random source
    Shuffled(u64),
}

/// Flatten `forest` into a book
///
/// # Examples
/// ```
/// use hangman_book::book::{Outcome, SectionOrder, project};
/// use hangman_book::core::Word;
/// use hangman_book::solver::TreeBuilder;
///
/// let words = vec![
///     Word::new("cat", 5).unwrap(),
///     Word::new("car", 3).unwrap(),
///     Word::new("can", 2).unwrap(),
/// ];
/// let build = TreeBuilder::default().build_forest(&words);
/// let book = project(&build.forest, SectionOrder::Sorted);
///
/// assert_eq!(book.lengths[&3], 1);
/// assert_eq!(book.sections[0].letter, Some('t'));
/// // the wrong-guess outcome is listed first
/// assert_eq!(book.sections[0].entries[0].outcome, Outcome::Section(2));
/// ```
#[must_use]
pub fn project(forest: &Forest, order: SectionOrder) -> Book {
    let mut slots: Vec<State<'_>> = forest
        .states()
        .into_iter()
        .filter(|state| state.node.is_guess() || state.depth == 0)
        .collect();

    match order {
        SectionOrder::Sorted => slots.sort_by(|a, b| {
            (a.wrong, a.pattern.revealed(), &a.pattern).cmp(&(
                b.wrong,
                b.pattern.revealed(),
                &b.pattern,
            ))
        }),
        SectionOrder::Shuffled(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            slots.shuffle(&mut rng);
            slots.sort_by_key(|state| (state.wrong, state.pattern.revealed()));
        }
    }

    let ids: FxHashMap<*const Node, usize> = slots
        .iter()
        .enumerate()
        .map(|(index, state)| (std::ptr::from_ref(state.node), index + 1))
        .collect();

    let sections = slots
        .iter()
        .enumerate()
        .map(|(index, state)| Section {
            id: index + 1,
            pattern: state.pattern.clone(),
            wrong: state.wrong,
            letter: state.node.letter(),
            entries: entries(state, &ids),
        })
        .collect();

    let lengths = slots
        .iter()
        .enumerate()
        .filter(|(_, state)| state.depth == 0)
        .map(|(index, state)| (state.length, index + 1))
        .collect();

    Book { sections, lengths }
}

/// Entries of one section: the wrong-guess outcome first, then by pattern
fn entries(state: &State<'_>, ids: &FxHashMap<*const Node, usize>) -> Vec<Entry> {
    let Node::Guess(guess) = state.node else {
        return vec![Entry {
            pattern: state.pattern.clone(),
            miss: false,
            outcome: outcome(&state.pattern, state.node, ids),
        }];
    };

    let mut entries: Vec<Entry> = guess
        .children
        .iter()
        .map(|(pattern, child)| Entry {
            pattern: pattern.clone(),
            miss: pattern.is_miss_from(&state.pattern),
            outcome: outcome(pattern, child, ids),
        })
        .collect();

    entries.sort_by(|a, b| b.miss.cmp(&a.miss).then_with(|| a.pattern.cmp(&b.pattern)));
    entries
}

fn outcome(pattern: &Pattern, node: &Node, ids: &FxHashMap<*const Node, usize>) -> Outcome {
    match node {
        Node::Guess(_) => {
            let id = ids.get(&std::ptr::from_ref(node)).copied();
            debug_assert!(id.is_some(), "guess node at {pattern} has no section");
            id.map_or(Outcome::Lost, Outcome::Section)
        }
        Node::Leaf(leaf) => match leaf.word() {
            Some(word) if pattern.is_solved() => Outcome::Revealed(word.text().to_string()),
            Some(word) => Outcome::Guess(word.text().to_string()),
            None => Outcome::Lost,
        },
        Node::Empty => Outcome::Revealed(pattern.as_str().to_string()),
    }
}
