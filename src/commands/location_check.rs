//! Day 1: compare two lists of location IDs
//!
//! Each input line holds one ID from the left list and one from the right,
//! separated by whitespace.

use super::Answer;
use crate::core::{Profile, Puzzle, PuzzleConfig, PuzzleError, PuzzleInput};
use rustc_hash::FxHashMap;
use std::io::BufRead;

/// Both location lists, each sorted ascending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationLists {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl LocationLists {
    /// Parse and sort both columns
    ///
    /// Blank lines are skipped.
    ///
    /// # Errors
    ///
    /// IDs are signed integers. Returns `InvalidData` for a line that is not
    /// exactly two integers, and `Io` if reading fails.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self, PuzzleError> {
        let mut left = Vec::new();
        let mut right = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            let [left_id, right_id] = fields.as_slice() else {
                return Err(PuzzleError::invalid_data(
                    &line,
                    format!("expected 2 fields, found {}", fields.len()),
                ));
            };

            left.push(parse_id(left_id, &line)?);
            right.push(parse_id(right_id, &line)?);
        }

        left.sort_unstable();
        right.sort_unstable();

        Ok(Self { left, right })
    }

    #[must_use]
    pub fn left(&self) -> &[i64] {
        &self.left
    }

    #[must_use]
    pub fn right(&self) -> &[i64] {
        &self.right
    }

    /// Sum of distances between the n-th smallest IDs of each list
    #[must_use]
    pub fn total_distance(&self) -> u64 {
        self.left
            .iter()
            .zip(&self.right)
            .map(|(&l, &r)| l.abs_diff(r))
            .sum()
    }

    /// Each left ID multiplied by how often it appears on the right, summed
    ///
    /// Negative IDs make negative terms, so the score is signed.
    #[must_use]
    pub fn similarity_score(&self) -> i64 {
        let mut counts: FxHashMap<i64, i64> = FxHashMap::default();
        for &id in &self.right {
            *counts.entry(id).or_insert(0) += 1;
        }

        self.left
            .iter()
            .map(|id| id * counts.get(id).copied().unwrap_or(0))
            .sum()
    }
}

fn parse_id(field: &str, line: &str) -> Result<i64, PuzzleError> {
    field
        .parse()
        .map_err(|e| PuzzleError::invalid_data(line, format!("bad location ID {field:?}: {e}")))
}

/// Solve the configured day 1 puzzle
///
/// # Errors
///
/// Returns an error if the puzzle is undefined or the input cannot be read
/// or parsed.
pub fn run(config: &PuzzleConfig) -> Result<Answer, PuzzleError> {
    let puzzle = config.puzzle()?;
    let reader = PuzzleInput::open(config)?.into_reader();

    match puzzle {
        Puzzle::One => {
            let _profile = Profile::start("total distance");
            let lists = LocationLists::parse(reader)?;
            Ok(Answer::new("Total distance", lists.total_distance()))
        }
        Puzzle::Two => {
            let _profile = Profile::start("similarity score");
            let lists = LocationLists::parse(reader)?;
            Ok(Answer::new("Total score", lists.similarity_score()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
3   4
4   3
2   5
1   3
3   9
3   3
";

    #[test]
    fn parse_sorts_columns() {
        let lists = LocationLists::parse(SAMPLE.as_bytes()).unwrap();
        assert_eq!(lists.left(), &[1, 2, 3, 3, 3, 4]);
        assert_eq!(lists.right(), &[3, 3, 3, 4, 5, 9]);
    }

    #[test]
    fn sample_total_distance() {
        let lists = LocationLists::parse(SAMPLE.as_bytes()).unwrap();
        assert_eq!(lists.total_distance(), 11);
    }

    #[test]
    fn sample_similarity_score() {
        let lists = LocationLists::parse(SAMPLE.as_bytes()).unwrap();
        assert_eq!(lists.similarity_score(), 31);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let lists = LocationLists::parse("1 2\n\n3 4\n".as_bytes()).unwrap();
        assert_eq!(lists.left(), &[1, 3]);
    }

    #[test]
    fn wrong_field_count_is_invalid() {
        let err = LocationLists::parse("1 2 3\n".as_bytes()).unwrap_err();
        match err {
            PuzzleError::InvalidData { line, reason } => {
                assert_eq!(line, "1 2 3");
                assert!(reason.contains("found 3"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_id_is_invalid() {
        let err = LocationLists::parse("12 abc\n".as_bytes()).unwrap_err();
        assert!(matches!(err, PuzzleError::InvalidData { .. }));
    }

    #[test]
    fn negative_ids_are_accepted() {
        let lists = LocationLists::parse("-3 4\n1 -2\n".as_bytes()).unwrap();
        assert_eq!(lists.left(), &[-3, 1]);
        assert_eq!(lists.right(), &[-2, 4]);
        // |-3 - -2| + |1 - 4|
        assert_eq!(lists.total_distance(), 4);
        assert_eq!(lists.similarity_score(), 0);
    }

    #[test]
    fn negative_matches_give_negative_score() {
        let lists = LocationLists::parse("-3 -3\n5 -3\n".as_bytes()).unwrap();
        assert_eq!(lists.similarity_score(), -6);
    }

    #[test]
    fn empty_input() {
        let lists = LocationLists::parse("".as_bytes()).unwrap();
        assert_eq!(lists.total_distance(), 0);
        assert_eq!(lists.similarity_score(), 0);
    }

    #[test]
    fn run_reads_configured_file() {
        let path = std::env::temp_dir().join("advent2024_day1_run.txt");
        std::fs::write(&path, SAMPLE).unwrap();

        let mut config = PuzzleConfig::new(1);
        config.input = Some(path.clone());
        assert_eq!(run(&config).unwrap(), Answer::new("Total distance", 11));

        config.puzzle = 2;
        assert_eq!(run(&config).unwrap(), Answer::new("Total score", 31));

        config.puzzle = 3;
        assert!(matches!(
            run(&config),
            Err(PuzzleError::SolverUndefined { day: 1, puzzle: 3 })
        ));

        std::fs::remove_file(path).unwrap();
    }
}
