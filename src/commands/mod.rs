//! Day command implementations
//!
//! Each module parses one day's input and solves its two puzzles. The
//! `run` function in each module opens the configured input and returns the
//! answer for the selected puzzle.

pub mod location_check;
pub mod mull_it;
pub mod print_queue;
pub mod safe_reports;
pub mod word_search;

use std::fmt;

/// A labelled puzzle answer
///
/// The value holds any `u64` count as well as signed sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer {
    pub label: &'static str,
    pub value: i128,
}

impl Answer {
    #[must_use]
    pub fn new(label: &'static str, value: impl Into<i128>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}
