//! Per-run configuration resolved from the command line

use super::PuzzleError;
use std::path::PathBuf;

/// Which of a day's two puzzles to solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Puzzle {
    One,
    Two,
}

impl Puzzle {
    /// Map a 1-based puzzle number to a puzzle
    ///
    /// # Errors
    ///
    /// Returns `SolverUndefined` for anything other than 1 or 2.
    pub fn from_number(day: u8, number: u8) -> Result<Self, PuzzleError> {
        match number {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            puzzle => Err(PuzzleError::SolverUndefined { day, puzzle }),
        }
    }

    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

/// Settings shared by every day command
#[derive(Debug, Clone)]
pub struct PuzzleConfig {
    pub day: u8,
    pub puzzle: u8,
    pub sample: bool,
    pub data_dir: PathBuf,
    pub input: Option<PathBuf>,
}

impl PuzzleConfig {
    /// Default configuration: puzzle 1, real data, `data/` directory
    #[must_use]
    pub fn new(day: u8) -> Self {
        Self {
            day,
            puzzle: 1,
            sample: false,
            data_dir: PathBuf::from("data"),
            input: None,
        }
    }

    /// Resolve the selected puzzle
    ///
    /// # Errors
    ///
    /// Returns `SolverUndefined` if the puzzle number is not 1 or 2.
    pub fn puzzle(&self) -> Result<Puzzle, PuzzleError> {
        Puzzle::from_number(self.day, self.puzzle)
    }

    /// Path of the input file for this run
    ///
    /// An explicit `input` wins; otherwise `<data_dir>/day<N>/puzzle<P>.txt`,
    /// or `sample<P>.txt` in sample mode.
    #[must_use]
    pub fn input_path(&self) -> PathBuf {
        if let Some(path) = &self.input {
            return path.clone();
        }

        let prefix = if self.sample { "sample" } else { "puzzle" };
        self.data_dir
            .join(format!("day{}", self.day))
            .join(format!("{prefix}{}.txt", self.puzzle))
    }
}
