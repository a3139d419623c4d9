//! Grid cells and their coordinates

use super::Direction;
use std::fmt;

/// Cell coordinates: `x` is the column, `y` is the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The adjacent position in `direction`
    ///
    /// Returns `None` when the step would take a coordinate below zero. The
    /// upper bounds depend on the grid and are checked there.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.offset();
        match (self.x.checked_add_signed(dx), self.y.checked_add_signed(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// A single character cell of a `Grid`
///
/// Neighbours are stored as positions into the owning grid, one slot per
/// `Direction`. A `None` slot means the neighbour would be off the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    position: Position,
    value: char,
    id: String,
    neighbors: [Option<Position>; 8],
}

impl Node {
    pub(crate) fn new(position: Position, value: char) -> Self {
        Self {
            position,
            value,
            id: position.to_string(),
            neighbors: [None; 8],
        }
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn value(&self) -> char {
        self.value
    }

    /// Identifier unique within the grid, `"x,y"`
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    #[must_use]
    pub const fn neighbor(&self, direction: Direction) -> Option<Position> {
        self.neighbors[direction.index()]
    }

    /// Present neighbours with their directions, in canonical order
    pub fn neighbors(&self) -> impl Iterator<Item = (Direction, Position)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.neighbor(direction).map(|pos| (direction, pos)))
    }

    pub(crate) fn set_neighbors(&mut self, neighbors: [Option<Position>; 8]) {
        self.neighbors = neighbors;
    }
}
