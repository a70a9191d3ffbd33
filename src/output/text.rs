//! Plain-text book rendering

use crate::book::{Book, Entry, Outcome, Section};
use crate::core::Pattern;
use std::fmt;

/// Render the whole book as plain text
///
/// # Examples
/// ```
/// use hangman_book::book::{SectionOrder, project};
/// use hangman_book::core::Word;
/// use hangman_book::output::render_book;
/// use hangman_book::solver::TreeBuilder;
///
/// let words = vec![Word::new("cat", 5).unwrap(), Word::new("dog", 3).unwrap()];
/// let forest = TreeBuilder::default().build_forest(&words).forest;
/// let text = render_book(&project(&forest, SectionOrder::Sorted));
///
/// assert!(text.contains("Does your word contain the letter A?"));
/// assert!(text.contains("I guess \"dog\"!"));
/// ```
#[must_use]
pub fn render_book(book: &Book) -> String {
    book.to_string()
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_book(f, self)
    }
}

fn write_book(out: &mut fmt::Formatter<'_>, book: &Book) -> fmt::Result {
    writeln!(out, "HANGMAN")?;
    writeln!(
        out,
        "Think of a word and count its letters, then turn to the section for that length."
    )?;
    writeln!(out)?;
    for (length, id) in &book.lengths {
        writeln!(out, "  {length} letters: turn to {id}")?;
    }

    for section in &book.sections {
        writeln!(out)?;
        write_section(out, section)?;
    }
    Ok(())
}

fn write_section(out: &mut fmt::Formatter<'_>, section: &Section) -> fmt::Result {
    writeln!(out, "[{}] {}  ({} wrong)", section.id, section.pattern, section.wrong)?;

    let Some(letter) = section.letter else {
        for entry in &section.entries {
            writeln!(out, "  {}", outcome_text(&entry.outcome))?;
        }
        return Ok(());
    };

    let letter = letter.to_ascii_uppercase();
    writeln!(out, "Does your word contain the letter {letter}?")?;

    let width = section.pattern.len().max(4) + 2;
    for entry in &section.entries {
        let label = entry_label(entry, &section.pattern, letter);
        writeln!(out, "  {label:<width$} {}", outcome_text(&entry.outcome))?;
    }
    Ok(())
}

/// Misses that only uncovered punctuation keep the pattern to tell them apart
fn entry_label(entry: &Entry, shown: &Pattern, letter: char) -> String {
    if !entry.miss {
        entry.pattern.to_string()
    } else if entry.pattern == *shown {
        format!("No {letter}")
    } else {
        format!("No {letter}, {}", entry.pattern)
    }
}

fn outcome_text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Section(id) => format!("turn to {id}"),
        Outcome::Guess(word) => format!("I guess \"{word}\"!"),
        Outcome::Revealed(word) => format!("\"{word}\": I win!"),
        Outcome::Lost => "You win, I give up!".to_string(),
    }
}
