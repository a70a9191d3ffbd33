//! Coverage augmentation with a secondary word pool
//!
//! Extra words are walked down an existing tree following its guessed letters. A word
//! whose outcome at some guess node has no branch yet becomes a new leaf there. No
//! guess node is ever created, so the book gains entries but never sections.

use super::node::{Forest, Leaf, Node};
use crate::core::{Pattern, Word};
use std::collections::btree_map::Entry;

/// Insert every placeable word of `pool` into `forest`
///
/// Returns the number of words added. Words whose length has no tree, or whose walk
/// ends at an existing leaf, are skipped. Existing leaves are never replaced, so the
/// first word to claim an outcome keeps it and a second pass with the same pool adds
/// nothing.
pub fn augment(forest: &mut Forest, pool: &[Word]) -> usize {
    pool.iter()
        .filter(|word| {
            forest
                .root_mut(word.len())
                .is_some_and(|root| place(root, word))
        })
        .count()
}

/// Walk `word` down from `root`; true if a new leaf was inserted
fn place(root: &mut Node, word: &Word) -> bool {
    let mut pattern = Pattern::blank(word.len());
    let mut node = root;

    loop {
        let Node::Guess(guess) = node else {
            return false;
        };

        let outcome = pattern.overlay(&Pattern::reveal(word, guess.letter));
        match guess.children.entry(outcome) {
            Entry::Vacant(slot) => {
                let leaf = if slot.key().is_solved() {
                    Node::Empty
                } else {
                    Node::Leaf(Leaf::Solved(word.clone()))
                };
                slot.insert(leaf);
                return true;
            }
            Entry::Occupied(slot) => {
                pattern = slot.key().clone();
                node = slot.into_mut();
            }
        }
    }
}
