//! Error type shared by every day's parser and solver

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Hard failures of a puzzle run
///
/// A search that finds nothing or a report that is unsafe is never an error;
/// these variants only cover input that could not be read or decoded.
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("invalid data format ({reason}):\n{line}")]
    InvalidData { line: String, reason: String },

    #[error("no solver defined for day {day} puzzle {puzzle}")]
    SolverUndefined { day: u8, puzzle: u8 },

    #[error("failed to start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

impl PuzzleError {
    /// Build an `InvalidData` error for the offending line
    pub fn invalid_data(line: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidData {
            line: line.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_data_message_includes_line() {
        let err = PuzzleError::invalid_data("3   x", "expected an integer");
        assert_eq!(
            err.to_string(),
            "invalid data format (expected an integer):\n3   x"
        );
    }

    #[test]
    fn io_errors_convert() {
        let err: PuzzleError = io::Error::other("disk on fire").into();
        assert!(matches!(err, PuzzleError::Io(_)));
        assert_eq!(err.to_string(), "disk on fire");
    }

    #[test]
    fn solver_undefined_message() {
        let err = PuzzleError::SolverUndefined { day: 4, puzzle: 3 };
        assert_eq!(err.to_string(), "no solver defined for day 4 puzzle 3");
    }
}
