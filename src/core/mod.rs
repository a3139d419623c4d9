//! Shared puzzle plumbing
//!
//! Configuration, input files, errors and timing used by every day command.

mod config;
mod error;
mod input;
mod profile;

pub use config::{Puzzle, PuzzleConfig};
pub use error::PuzzleError;
pub use input::PuzzleInput;
pub use profile::Profile;
