//! Puzzle input files
//!
//! Opens the file selected by a `PuzzleConfig` and hands out a buffered
//! reader. Solvers are generic over `BufRead` so tests can feed them strings.

use super::{PuzzleConfig, PuzzleError};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// An opened puzzle input file
pub struct PuzzleInput {
    path: PathBuf,
    reader: BufReader<File>,
}

impl PuzzleInput {
    /// Open the input file for this run
    ///
    /// # Errors
    ///
    /// Returns `InputNotFound` if the file does not exist, or `Io` for any
    /// other failure to open it.
    pub fn open(config: &PuzzleConfig) -> Result<Self, PuzzleError> {
        let path = config.input_path();
        let file = File::open(&path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => PuzzleError::InputNotFound { path: path.clone() },
            _ => PuzzleError::Io(err),
        })?;

        debug!(path = %path.display(), "opened puzzle input");

        Ok(Self {
            path,
            reader: BufReader::new(file),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consume the input, returning its line reader
    #[must_use]
    pub fn into_reader(self) -> BufReader<File> {
        self.reader
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufRead;

    #[test]
    fn missing_file_is_input_not_found() {
        let mut config = PuzzleConfig::new(9);
        config.data_dir = PathBuf::from("/definitely/not/here");

        let err = PuzzleInput::open(&config).err().unwrap();
        match err {
            PuzzleError::InputNotFound { path } => {
                assert_eq!(path, Path::new("/definitely/not/here/day9/puzzle1.txt"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn opens_explicit_input() {
        let path = std::env::temp_dir().join("advent2024_input_test.txt");
        std::fs::write(&path, "first\nsecond\n").unwrap();

        let mut config = PuzzleConfig::new(1);
        config.input = Some(path.clone());

        let input = PuzzleInput::open(&config).unwrap();
        assert_eq!(input.path(), path.as_path());

        let lines: Vec<String> = input.into_reader().lines().map(Result::unwrap).collect();
        assert_eq!(lines, vec!["first", "second"]);

        std::fs::remove_file(path).unwrap();
    }
}
