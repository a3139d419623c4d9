//! Character grid with 8-way adjacency
//!
//! Construction is two-phase: every row is read into `Node`s first, then each
//! node is linked to its neighbours. Linking needs the complete grid, since a
//! node's south neighbour lives in a row that has not been read yet.

use super::{Direction, Node, Position};
use crate::core::PuzzleError;
use std::io;
use tracing::debug;

/// A 2D grid of character nodes
///
/// Rows may differ in length. A shorter row simply gives its own nodes, and
/// the nodes above and below it, fewer neighbours.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: Vec<Vec<Node>>,
}

/// Collects rows and anchor positions while lines arrive
struct GridBuilder {
    anchor: char,
    rows: Vec<Vec<Node>>,
    anchors: Vec<Position>,
}

impl GridBuilder {
    const fn new(anchor: char) -> Self {
        Self {
            anchor,
            rows: Vec::new(),
            anchors: Vec::new(),
        }
    }

    fn push_line(&mut self, line: &str) {
        let y = self.rows.len();
        let row = line
            .chars()
            .enumerate()
            .map(|(x, value)| {
                let position = Position::new(x, y);
                if value == self.anchor {
                    self.anchors.push(position);
                }
                Node::new(position, value)
            })
            .collect();
        self.rows.push(row);
    }

    fn finish(self) -> (Grid, Vec<Position>) {
        let mut grid = Grid { rows: self.rows };
        grid.link_neighbors();

        debug!(
            rows = grid.height(),
            nodes = grid.len(),
            anchors = self.anchors.len(),
            anchor = %self.anchor,
            "built grid"
        );

        (grid, self.anchors)
    }
}

impl Grid {
    /// Build a grid from a one-pass line source
    ///
    /// Returns the grid together with the positions of every node whose
    /// character equals `anchor`, in row-major order.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::Io` if the line source fails.
    pub fn build<I>(lines: I, anchor: char) -> Result<(Self, Vec<Position>), PuzzleError>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        let mut builder = GridBuilder::new(anchor);
        for line in lines {
            builder.push_line(&line?);
        }
        Ok(builder.finish())
    }

    /// Build a grid from in-memory text, one row per line
    #[must_use]
    pub fn from_text(text: &str, anchor: char) -> (Self, Vec<Position>) {
        let mut builder = GridBuilder::new(anchor);
        for line in text.lines() {
            builder.push_line(line);
        }
        builder.finish()
    }

    fn link_neighbors(&mut self) {
        let links: Vec<Vec<[Option<Position>; 8]>> = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|node| self.neighbor_positions(node.position()))
                    .collect()
            })
            .collect();

        for (row, row_links) in self.rows.iter_mut().zip(links) {
            for (node, node_links) in row.iter_mut().zip(row_links) {
                node.set_neighbors(node_links);
            }
        }
    }

    fn neighbor_positions(&self, position: Position) -> [Option<Position>; 8] {
        Direction::ALL.map(|direction| {
            position
                .step(direction)
                .filter(|&candidate| self.contains(candidate))
        })
    }

    /// Whether `position` names a cell of this grid
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.rows
            .get(position.y)
            .is_some_and(|row| position.x < row.len())
    }

    #[must_use]
    pub fn node(&self, position: Position) -> Option<&Node> {
        self.rows.get(position.y)?.get(position.x)
    }

    /// The node adjacent to `position` in `direction`, if any
    #[must_use]
    pub fn neighbor_of(&self, position: Position, direction: Direction) -> Option<&Node> {
        self.node(position)?
            .neighbor(direction)
            .and_then(|neighbor| self.node(neighbor))
    }

    /// Number of rows
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of row `y`, zero past the last row
    #[must_use]
    pub fn row_len(&self, y: usize) -> usize {
        self.rows.get(y).map_or(0, Vec::len)
    }

    /// Total number of nodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    /// All nodes in row-major order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.rows.iter().flatten()
    }

    /// Render the 3x3 block around `position` for debugging
    ///
    /// Each cell is shown as `[id:'value']`; missing neighbours as
    /// `[-,-:'-']`.
    #[must_use]
    pub fn neighborhood(&self, position: Position) -> Option<String> {
        let center = self.node(position)?;
        let cells: [[Option<&Node>; 3]; 3] = [
            [
                self.neighbor_of(position, Direction::NorthWest),
                self.neighbor_of(position, Direction::North),
                self.neighbor_of(position, Direction::NorthEast),
            ],
            [
                self.neighbor_of(position, Direction::West),
                Some(center),
                self.neighbor_of(position, Direction::East),
            ],
            [
                self.neighbor_of(position, Direction::SouthWest),
                self.neighbor_of(position, Direction::South),
                self.neighbor_of(position, Direction::SouthEast),
            ],
        ];

        let rows: Vec<String> = cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Some(node) => format!("[{}:'{}']", node.id(), node.value()),
                        None => "[-,-:'-']".to_string(),
                    })
                    .collect()
            })
            .collect();

        Some(rows.join("\n"))
    }
}
