//! Advent of Code 2024
//!
//! Solvers for the daily puzzles, one module per day, plus the character
//! grid used by the day 4 word search.
//!
//! # Quick Start
//!
//! ```rust
//! use advent2024::grid::{Direction, Grid, search_direction};
//!
//! let (grid, anchors) = Grid::from_text("XMAS", 'X');
//! let path = search_direction(&grid, anchors[0], Direction::East, "MAS");
//! assert_eq!(path.as_deref(), Some("0,0_1,0_2,0_3,0"));
//! ```

// Shared plumbing: config, input, errors, timing
pub mod core;

// Grid graph and searches
pub mod grid;

// Day command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
