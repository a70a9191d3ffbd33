//! Coverage command - traces every dictionary word through the forest
//!
//! Reports how many words the book finds, how much popularity weight that covers and
//! how many wrong guesses it takes.

use super::trace::{TraceResult, trace};
use crate::core::Word;
use crate::output::formatters::progress_bar;
use crate::solver::Forest;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Statistics from tracing a word list
#[derive(Debug, Clone, Default)]
pub struct CoverageStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Words whose length has no tree
    pub missing_length: usize,
    pub total_weight: u64,
    pub solved_weight: u64,
    /// Wrong guesses to number of solved words
    pub wrong_distribution: BTreeMap<usize, usize>,
    /// Letters guessed per solved word
    pub average_letters: f64,
    /// Solved words needing the most wrong guesses
    pub hardest_words: Vec<(String, usize)>,
    /// Words the book does not find
    pub failed_words: Vec<String>,
    pub total_time: Duration,
}

impl CoverageStatistics {
    /// Share of the word list found, in percent
    #[must_use]
    pub fn solved_percent(&self) -> f64 {
        percent(self.solved as f64, self.total_words as f64)
    }

    /// Share of the popularity weight found, in percent
    #[must_use]
    pub fn weight_percent(&self) -> f64 {
        percent(self.solved_weight as f64, self.total_weight as f64)
    }

    fn solved_percent_of(&self, traced: usize) -> f64 {
        percent(self.solved as f64, traced as f64)
    }
}

fn percent(part: f64, whole: f64) -> f64 {
    if whole > 0.0 { part / whole * 100.0 } else { 0.0 }
}

/// Trace every word of `words` (or the first `limit`) through `forest`
#[must_use]
pub fn run_coverage(forest: &Forest, words: &[Word], limit: Option<usize>) -> CoverageStatistics {
    let targets = &words[..limit.map_or(words.len(), |n| n.min(words.len()))];
    let start = Instant::now();

    let pb = progress_bar(targets.len() as u64, "words");
    let mut stats = CoverageStatistics {
        total_words: targets.len(),
        ..CoverageStatistics::default()
    };
    let mut letters = 0;

    for (idx, word) in targets.iter().enumerate() {
        stats.total_weight += word.weight();

        let result: Option<TraceResult> = forest.root(word.len()).map(|root| trace(root, word));
        match result {
            Some(result) if result.success() => {
                let wrong = result.wrong();
                stats.solved += 1;
                stats.solved_weight += word.weight();
                letters += result.steps.len();
                *stats.wrong_distribution.entry(wrong).or_default() += 1;
                stats.hardest_words.push((result.target, wrong));
            }
            Some(result) => {
                stats.failed += 1;
                stats.failed_words.push(result.target);
            }
            None => {
                stats.failed += 1;
                stats.missing_length += 1;
                stats.failed_words.push(word.text().to_string());
            }
        }

        if idx % 50 == 0 {
            pb.set_message(format!("{:.1}% found", stats.solved_percent_of(idx + 1)));
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    stats.average_letters = if stats.solved > 0 {
        letters as f64 / stats.solved as f64
    } else {
        0.0
    };

    stats
        .hardest_words
        .sort_by_key(|(word, wrong)| (Reverse(*wrong), word.clone()));
    stats.hardest_words.truncate(10);
    stats.total_time = start.elapsed();

    stats
}
