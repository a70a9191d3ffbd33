//! Book rendering command

use crate::book::{Book, SectionOrder, project};
use crate::output::render_book;
use crate::solver::Forest;
use log::info;

/// Output format for the book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookFormat {
    #[default]
    Text,
    Json,
}

impl BookFormat {
    /// Parse a format name
    ///
    /// # Errors
    ///
    /// Returns an error for names other than `text` and `json`.
    pub fn from_name(name: &str) -> Result<Self, String> {
        match name.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("Unknown book format '{other}' (expected text or json)")),
        }
    }
}

/// Project `forest` into a book and render it
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn write_book(
    forest: &Forest,
    order: SectionOrder,
    format: BookFormat,
) -> Result<String, String> {
    let book = project(forest, order);
    info!(
        "Book has {} sections and {} endings",
        book.sections.len(),
        book.terminal_count()
    );
    render(&book, format)
}

/// Render an already projected book
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(book: &Book, format: BookFormat) -> Result<String, String> {
    match format {
        BookFormat::Text => Ok(render_book(book)),
        BookFormat::Json => serde_json::to_string_pretty(book).map_err(|e| e.to_string()),
    }
}
