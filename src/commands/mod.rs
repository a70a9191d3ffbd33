//! Command implementations

pub mod book;
pub mod build;
pub mod coverage;
pub mod play;
pub mod trace;

pub use book::{BookFormat, render, write_book};
pub use build::{BuildResult, run_build};
pub use coverage::{CoverageStatistics, run_coverage};
pub use play::{play_session, run_play};
pub use trace::{TraceOutcome, TraceResult, TraceStep, trace_word};
