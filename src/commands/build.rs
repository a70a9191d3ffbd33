//! Forest building command
//!
//! Builds the decision trees for a primary dictionary, augments them with a secondary
//! pool and reports what was pruned.

use crate::core::{Word, total_weight};
use crate::output::formatters::progress_bar;
use crate::solver::{BuildConfig, Forest, TreeBuilder, augment};
use log::{debug, info, warn};
use std::time::{Duration, Instant};

/// Result of building a forest
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub forest: Forest,
    pub config: BuildConfig,
    pub primary: usize,
    pub pruned: Vec<Word>,
    pub augmented: usize,
    pub duration: Duration,
}

impl BuildResult {
    #[must_use]
    pub fn pruned_weight(&self) -> u64 {
        total_weight(&self.pruned)
    }
}

/// Build trees for `primary`, then place the words of `pool` where they fit
///
/// # Examples
/// ```
/// use hangman_book::commands::run_build;
/// use hangman_book::core::Word;
/// use hangman_book::solver::BuildConfig;
///
/// let primary = vec![Word::new("cat", 5).unwrap(), Word::new("dog", 3).unwrap()];
/// let pool = vec![Word::new("cow", 1).unwrap()];
///
/// let result = run_build(&primary, &pool, BuildConfig::default());
/// assert!(result.pruned.is_empty());
/// assert_eq!(result.forest.lengths().collect::<Vec<_>>(), [3]);
/// ```
#[must_use]
pub fn run_build(primary: &[Word], pool: &[Word], config: BuildConfig) -> BuildResult {
    let start = Instant::now();
    let builder = TreeBuilder::new(config);

    let lengths = primary
        .iter()
        .map(Word::len)
        .collect::<std::collections::BTreeSet<_>>()
        .len();
    let pb = progress_bar(lengths as u64, "lengths");
    let build = builder.build_forest_with(primary, |length| {
        pb.set_message(format!("length {length}"));
        pb.inc(1);
    });
    pb.finish_and_clear();

    let pruned_weight = build.pruned_weight();
    let mut forest = build.forest;
    if !build.pruned.is_empty() {
        warn!(
            "Pruned {} words (total weight {pruned_weight}) due to too many wrong guesses",
            build.pruned.len()
        );
        for word in &build.pruned {
            debug!("pruned {word} (weight {})", word.weight());
        }
    }

    let augmented = augment(&mut forest, pool);
    if !pool.is_empty() {
        info!("Augmented with {augmented} of {} extra words", pool.len());
    }

    info!(
        "Built {} trees: {} guess nodes, {} leaves",
        forest.len(),
        forest.guess_count(),
        forest.leaf_count()
    );

    BuildResult {
        forest,
        config,
        primary: primary.len(),
        pruned: build.pruned,
        augmented,
        duration: start.elapsed(),
    }
}
