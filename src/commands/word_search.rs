//! Day 4: ceres search
//!
//! Puzzle 1 counts every occurrence of `XMAS` in the letter grid, in any of
//! the 8 directions. Puzzle 2 counts `A`s at the centre of two crossing
//! `MAS` diagonals.

use super::Answer;
use crate::core::{Profile, Puzzle, PuzzleConfig, PuzzleError, PuzzleInput};
use crate::grid::{Grid, Position, is_cross_match, search_all, search_all_parallel};
use std::io::BufRead;
use tracing::debug;

/// First letter of `XMAS`, where every puzzle 1 search starts
pub const WORD_ANCHOR: char = 'X';

/// Rest of `XMAS`, matched one node at a time from the anchor
pub const WORD_REST: &str = "MAS";

/// Centre letter of the puzzle 2 cross
pub const CROSS_ANCHOR: char = 'A';

/// Count distinct occurrences of `XMAS`
///
/// # Errors
///
/// Returns `Io` if reading fails.
pub fn count_words<R: BufRead>(reader: R, parallel: bool) -> Result<u64, PuzzleError> {
    let (grid, anchors) = Grid::build(reader.lines(), WORD_ANCHOR)?;

    let found = if parallel {
        search_all_parallel(&grid, &anchors, WORD_REST)
    } else {
        search_all(&grid, &anchors, WORD_REST)
    };

    Ok(found.len() as u64)
}

/// Count anchors sitting at the centre of an `S`/`M` diagonal cross
///
/// # Errors
///
/// Returns `Io` if reading fails.
pub fn count_crosses<R: BufRead>(reader: R) -> Result<u64, PuzzleError> {
    let (grid, anchors) = Grid::build(reader.lines(), CROSS_ANCHOR)?;
    debug!(anchors = anchors.len(), "checking crosses");

    let count = anchors
        .iter()
        .filter(|&&anchor| {
            let matched = is_cross_match(&grid, anchor);
            log_neighborhood(&grid, anchor, matched);
            matched
        })
        .count();

    Ok(count as u64)
}

fn log_neighborhood(grid: &Grid, anchor: Position, matched: bool) {
    if tracing::enabled!(tracing::Level::DEBUG)
        && let Some(block) = grid.neighborhood(anchor)
    {
        debug!("anchor {anchor} matched={matched}\n{block}");
    }
}

/// Solve the configured day 4 puzzle
///
/// # Errors
///
/// Returns an error if the puzzle is undefined or the input cannot be read.
pub fn run(config: &PuzzleConfig, parallel: bool) -> Result<Answer, PuzzleError> {
    let puzzle = config.puzzle()?;
    let reader = PuzzleInput::open(config)?.into_reader();

    match puzzle {
        Puzzle::One => {
            let _profile = Profile::start("word search");
            Ok(Answer::new("Found words", count_words(reader, parallel)?))
        }
        Puzzle::Two => {
            let _profile = Profile::start("cross search");
            Ok(Answer::new("Found", count_crosses(reader)?))
        }
    }
}
