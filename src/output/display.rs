//! Display functions for command results

use super::formatters::{create_progress_bar, spaced_pattern};
use crate::commands::{BuildResult, CoverageStatistics, TraceOutcome, TraceResult};
use colored::Colorize;

/// Print the summary of a forest build
pub fn print_build_result(result: &BuildResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DECISION TREES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📚 {}", "Dictionary:".bright_cyan().bold());
    println!("   Primary words:    {}", result.primary);
    println!("   Word lengths:     {}", result.forest.len());
    println!(
        "   Wrong guesses:    at most {}",
        result.config.max_wrong.to_string().bright_yellow()
    );

    println!("\n🌳 {}", "Trees:".bright_cyan().bold());
    println!("   Guess nodes:      {}", result.forest.guess_count());
    println!("   Endings:          {}", result.forest.leaf_count());
    let deepest = result
        .forest
        .iter()
        .map(|(length, root)| (root.depth(), length))
        .max();
    if let Some((depth, length)) = deepest {
        println!("   Longest path:     {depth} letters ({length}-letter words)");
    }
    println!(
        "   Augmented:        {}",
        format!("+{}", result.augmented).green()
    );
    if result.pruned.is_empty() {
        println!("   Pruned:           {}", "none".green());
    } else {
        println!(
            "   Pruned:           {} (weight {})",
            result.pruned.len().to_string().red(),
            result.pruned_weight()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
}

/// Print the path taken by a traced word
pub fn print_trace_result(result: &TraceResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Tracing: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let letter = step.letter.to_ascii_uppercase().to_string();
        let mark = if step.hit {
            letter.green().bold()
        } else {
            letter.red().bold()
        };
        println!(
            "  {:>2}. {}  {}  {}",
            i + 1,
            mark,
            spaced_pattern(&step.pattern),
            format!("({} wrong)", step.wrong).bright_black()
        );
    }

    println!();
    let ending = match &result.outcome {
        TraceOutcome::Revealed => "Board completed".to_string(),
        TraceOutcome::Guessed(word) => format!("Guessed {}", word.to_uppercase()),
        TraceOutcome::Lost => "The book gave up".to_string(),
        TraceOutcome::Uncovered(pattern) => format!("No branch for {pattern}"),
    };
    if result.success() {
        println!(
            "{}",
            format!("✅ {ending} after {} wrong guesses", result.wrong())
                .green()
                .bold()
        );
    } else {
        println!("{}", format!("❌ {ending}").red().bold());
    }
}

/// Print coverage statistics
pub fn print_coverage_statistics(stats: &CoverageStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Coverage Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Coverage".bright_cyan().bold());
    println!("  Words traced:        {}", stats.total_words);
    println!(
        "  Found by the book:   {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved_percent()).green()
    );
    if stats.failed > 0 {
        println!(
            "  Not found:           {} {}",
            stats.failed,
            format!("({:.1}%)", 100.0 - stats.solved_percent()).red()
        );
    }
    if stats.missing_length > 0 {
        println!("  No tree for length:  {}", stats.missing_length);
    }
    println!(
        "  Weight covered:      {}",
        format!("{:.2}%", stats.weight_percent()).bright_yellow().bold()
    );
    println!("  Letters per word:    {:.2}", stats.average_letters);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Wrong Guess Distribution".bright_cyan().bold());
    let max_count = stats.wrong_distribution.values().copied().max().unwrap_or(1);
    for (wrong, count) in &stats.wrong_distribution {
        let percentage = *count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar = create_progress_bar(*count as f64, max_count as f64, 40);
        println!("  {wrong} wrong: {} {count:5} ({percentage:5.1}%)", bar.green());
    }

    if !stats.hardest_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, wrong) in stats.hardest_words.iter().take(5) {
            println!("  {} ({wrong} wrong)", word.to_uppercase().yellow());
        }
    }

    if !stats.failed_words.is_empty() {
        println!("\n❌ {}", "Missed Words".red().bold());
        for word in stats.failed_words.iter().take(10) {
            println!("  {}", word.to_uppercase().red());
        }
        if stats.failed_words.len() > 10 {
            println!("  ... and {} more", stats.failed_words.len() - 10);
        }
    }
}
