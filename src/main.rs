//! Hangman Book - CLI
//!
//! Builds greedy hangman decision trees and prints them as a choose-your-path book.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman_book::{
    book::SectionOrder,
    commands::{
        BookFormat, BuildResult, run_build, run_coverage, run_play, trace_word, write_book,
    },
    core::{MAX_WRONG, Word},
    output::{print_build_result, print_coverage_statistics, print_trace_result},
    solver::{BuildConfig, Exhaustion},
    wordlists::{Dictionary, load_from_file, sample},
};
use log::info;

#[derive(Parser)]
#[command(
    name = "hangman_book",
    about = "Builds hangman decision trees and prints them as a choose-your-path book",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'sample' (default, embedded nouns) or path to a word<TAB>count file
    #[arg(short = 'w', long, global = true, default_value = "sample")]
    wordlist: String,

    /// Keep only the N most popular words for building the trees
    #[arg(short = 't', long, global = true, default_value_t = 10_000)]
    top: usize,

    /// Maximum number of wrong guesses
    #[arg(long, global = true, default_value_t = MAX_WRONG)]
    max_wrong: usize,

    /// Give up on indistinguishable words instead of guessing the most popular one
    #[arg(long, global = true)]
    abandon: bool,

    /// Augmentation pool: 'rest' (words beyond --top) or path to a second dictionary
    #[arg(short = 'a', long, global = true)]
    augment: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the trees and report coverage (default)
    Build,

    /// Print the book
    Book {
        /// Output format: text (default) or json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Shuffle sections of equal rank with this seed
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Follow a word through the book
    Trace {
        /// The word to trace
        word: String,
    },

    /// Trace every dictionary word and report statistics
    Coverage {
        /// Limit number of words to trace
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Play: think of a word and let the book guess it
    Play,
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "sample" => Ok(sample()),
        path => {
            let dictionary = load_from_file(path)
                .map_err(|e| anyhow::anyhow!("Failed to read dictionary {path}: {e}"))?;
            info!("Loaded {} words from {path}", dictionary.len());
            Ok(dictionary)
        }
    }
}

/// Split the dictionary and resolve the augmentation pool
///
/// Returns (`primary`, `pool`)
fn select_words(
    dictionary: &Dictionary,
    top: usize,
    augment: Option<&str>,
) -> Result<(Vec<Word>, Vec<Word>)> {
    let (primary, rest) = dictionary.split_top(top);
    let pool = match augment {
        None => Vec::new(),
        Some("rest") => rest,
        Some(path) => load_dictionary(path)?.words().to_vec(),
    };
    Ok((primary, pool))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;
    if dictionary.is_empty() {
        anyhow::bail!("Dictionary {} has no usable words", cli.wordlist);
    }
    let (primary, pool) = select_words(&dictionary, cli.top, cli.augment.as_deref())?;

    let exhaustion = if cli.abandon {
        Exhaustion::Abandon
    } else {
        Exhaustion::Forced
    };
    let config = BuildConfig::new(cli.max_wrong, exhaustion);
    let result = run_build(&primary, &pool, config);

    // Default to Build mode if no command given
    let command = cli.command.unwrap_or(Commands::Build);

    match command {
        Commands::Build => {
            print_build_result(&result);
            Ok(())
        }
        Commands::Book { format, seed } => run_book_command(&result, &format, seed),
        Commands::Trace { word } => {
            let traced = trace_word(&result.forest, &word).map_err(|e| anyhow::anyhow!(e))?;
            print_trace_result(&traced);
            Ok(())
        }
        Commands::Coverage { limit } => {
            let stats = run_coverage(&result.forest, dictionary.words(), limit);
            print_coverage_statistics(&stats);
            Ok(())
        }
        Commands::Play => run_play(&result.forest).map_err(|e| anyhow::anyhow!(e)),
    }
}

fn run_book_command(result: &BuildResult, format: &str, seed: Option<u64>) -> Result<()> {
    let format = BookFormat::from_name(format).map_err(|e| anyhow::anyhow!(e))?;
    let order = seed.map_or(SectionOrder::Sorted, SectionOrder::Shuffled);

    let text = write_book(&result.forest, order, format).map_err(|e| anyhow::anyhow!(e))?;
    println!("{text}");
    Ok(())
}
