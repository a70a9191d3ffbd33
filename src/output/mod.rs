//! Terminal output formatting
//!
//! Display utilities for CLI results and the plain-text book renderer.

pub mod display;
pub mod formatters;
mod text;

pub use display::{print_build_result, print_coverage_statistics, print_trace_result};
pub use text::render_book;
