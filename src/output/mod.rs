//! Terminal output formatting

pub mod display;

pub use display::{format_answer, print_answer};
