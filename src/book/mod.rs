//! Projection of decision trees into a numbered choose-your-path book

mod projector;
mod section;

pub use projector::{SectionOrder, project};
pub use section::{Book, Entry, Outcome, Section};
