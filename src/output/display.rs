//! Display functions for puzzle answers

use crate::commands::Answer;
use colored::Colorize;

/// Print an answer line to stdout
pub fn print_answer(answer: &Answer) {
    println!("{}", format_answer(answer));
}

/// Answer line with the label and value highlighted
#[must_use]
pub fn format_answer(answer: &Answer) -> String {
    format!(
        "{} {}",
        format!("{}:", answer.label).bright_cyan(),
        answer.value.to_string().bright_yellow().bold()
    )
}
