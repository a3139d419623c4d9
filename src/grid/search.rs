//! Straight-line word search over a `Grid`
//!
//! From an anchor node, a search walks one direction and compares each node
//! it reaches with the next character of the target. It never branches and
//! never backtracks, so each (anchor, direction) pair costs at most
//! `target.len()` steps.

use super::{Direction, Grid, Position};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::sync::{Mutex, PoisonError};

/// Set of path identifiers for matches found so far
///
/// A path identifier is the visited node IDs joined with `_`, for example
/// `"0,0_1,0_2,0_3,0"`. The same geometric path always produces the same
/// identifier, so inserting it twice is harmless.
#[derive(Debug, Clone, Default)]
pub struct FoundPaths {
    paths: FxHashSet<String>,
}

impl FoundPaths {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a path, returning `true` if it was not already present
    pub fn insert(&mut self, path: String) -> bool {
        self.paths.insert(path)
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Paths in sorted order
    #[must_use]
    pub fn sorted(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.paths.iter().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }
}

/// Follow `direction` from `start`, matching `target` one node at a time
///
/// `target` excludes the start node's own character, which the caller has
/// already matched by choosing the anchor. Returns the path identifier on
/// success. Returns `None` on the first mismatch, or when the walk runs off
/// the grid.
#[must_use]
pub fn search_direction(
    grid: &Grid,
    start: Position,
    direction: Direction,
    target: &str,
) -> Option<String> {
    let mut ids = vec![grid.node(start)?.id()];
    let mut current = start;

    for expected in target.chars() {
        let node = grid.neighbor_of(current, direction)?;
        if node.value() != expected {
            return None;
        }
        ids.push(node.id());
        current = node.position();
    }

    Some(ids.join("_"))
}

/// Search all 8 directions from `anchor`, recording matches in `found`
///
/// Returns how many new paths were recorded.
pub fn search_anchor(grid: &Grid, anchor: Position, target: &str, found: &mut FoundPaths) -> usize {
    Direction::ALL
        .into_iter()
        .filter_map(|direction| search_direction(grid, anchor, direction, target))
        .fold(0, |added, path| added + usize::from(found.insert(path)))
}

/// Search every anchor on the current thread
#[must_use]
pub fn search_all(grid: &Grid, anchors: &[Position], target: &str) -> FoundPaths {
    let mut found = FoundPaths::new();
    for &anchor in anchors {
        search_anchor(grid, anchor, target, &mut found);
    }
    found
}

/// Search anchors in parallel, sharing one set behind a mutex
#[must_use]
pub fn search_all_parallel(grid: &Grid, anchors: &[Position], target: &str) -> FoundPaths {
    let found = Mutex::new(FoundPaths::new());

    anchors.par_iter().for_each(|&anchor| {
        for direction in Direction::ALL {
            if let Some(path) = search_direction(grid, anchor, direction, target) {
                found
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .insert(path);
            }
        }
    });

    found.into_inner().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SAMPLE: &str = "\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX";

    /// 7x7 grid of dots with "XMAS" written from the centre along `direction`
    fn manufactured(direction: Direction) -> (Grid, Position) {
        let mut cells = vec![vec!['.'; 7]; 7];
        let (dx, dy) = direction.offset();
        for (i, ch) in "XMAS".chars().enumerate() {
            let step = i as isize;
            let x = (3 + dx * step) as usize;
            let y = (3 + dy * step) as usize;
            cells[y][x] = ch;
        }

        let text: Vec<String> = cells.iter().map(|row| row.iter().collect()).collect();
        let (grid, anchors) = Grid::from_text(&text.join("\n"), 'X');
        assert_eq!(anchors, vec![Position::new(3, 3)]);
        (grid, anchors[0])
    }

    #[test]
    fn single_row_east() {
        let (grid, anchors) = Grid::from_text("XMAS", 'X');
        assert_eq!(anchors, vec![Position::new(0, 0)]);

        let path = search_direction(&grid, anchors[0], Direction::East, "MAS");
        assert_eq!(path.as_deref(), Some("0,0_1,0_2,0_3,0"));

        let found = search_all(&grid, &anchors, "MAS");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn single_row_reversed_west() {
        let (grid, anchors) = Grid::from_text("SAMX", 'X');
        assert_eq!(anchors, vec![Position::new(3, 0)]);

        assert!(search_direction(&grid, anchors[0], Direction::West, "MAS").is_some());
        assert_eq!(search_all(&grid, &anchors, "MAS").len(), 1);
    }

    #[rstest]
    #[case(Direction::NorthWest)]
    #[case(Direction::North)]
    #[case(Direction::NorthEast)]
    #[case(Direction::West)]
    #[case(Direction::East)]
    #[case(Direction::SouthWest)]
    #[case(Direction::South)]
    #[case(Direction::SouthEast)]
    fn finds_word_only_along_its_direction(#[case] direction: Direction) {
        let (grid, anchor) = manufactured(direction);

        assert!(search_direction(&grid, anchor, direction, "MAS").is_some());
        assert!(search_direction(&grid, anchor, direction.opposite(), "MAS").is_none());

        let mut found = FoundPaths::new();
        assert_eq!(search_anchor(&grid, anchor, "MAS", &mut found), 1);
        assert_eq!(found.len(), 1);
    }

    #[rstest]
    #[case(Direction::East)]
    #[case(Direction::SouthWest)]
    fn repeated_search_is_deduplicated(#[case] direction: Direction) {
        let (grid, anchor) = manufactured(direction);
        let mut found = FoundPaths::new();

        assert_eq!(search_anchor(&grid, anchor, "MAS", &mut found), 1);
        assert_eq!(search_anchor(&grid, anchor, "MAS", &mut found), 0);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn mismatch_stops_immediately() {
        let (grid, anchors) = Grid::from_text("XMXS", 'X');
        assert!(search_direction(&grid, anchors[0], Direction::East, "MAS").is_none());
    }

    #[test]
    fn running_off_the_grid_fails() {
        let (grid, anchors) = Grid::from_text("XMA", 'X');
        assert!(search_direction(&grid, anchors[0], Direction::East, "MAS").is_none());
        assert!(search_all(&grid, &anchors, "MAS").is_empty());
    }

    #[test]
    fn start_outside_grid_fails() {
        let (grid, _) = Grid::from_text("XMAS", 'X');
        assert!(search_direction(&grid, Position::new(9, 9), Direction::East, "MAS").is_none());
    }

    #[test]
    fn ragged_rows_end_the_walk() {
        let (grid, anchors) = Grid::from_text("X...\nM\nAAA.\nSSSS", 'X');
        // Row 1 is a single cell, so the south-east walk stops there.
        let found = search_all(&grid, &anchors, "MAS");
        assert_eq!(found.len(), 1);
        assert!(found.contains("0,0_0,1_0,2_0,3"));
    }

    #[test]
    fn sample_grid_has_eighteen_words() {
        let (grid, anchors) = Grid::from_text(SAMPLE, 'X');
        let found = search_all(&grid, &anchors, "MAS");
        assert_eq!(found.len(), 18);
    }

    #[test]
    fn parallel_matches_sequential() {
        let (grid, anchors) = Grid::from_text(SAMPLE, 'X');

        let sequential = search_all(&grid, &anchors, "MAS");
        let parallel = search_all_parallel(&grid, &anchors, "MAS");

        assert_eq!(parallel.len(), 18);
        assert_eq!(parallel.sorted(), sequential.sorted());
    }

    #[test]
    fn found_paths_contains() {
        let mut found = FoundPaths::new();
        assert!(found.insert("0,0_1,0".to_string()));
        assert!(!found.insert("0,0_1,0".to_string()));
        assert!(found.contains("0,0_1,0"));
        assert!(!found.contains("1,0_0,0"));
    }
}
