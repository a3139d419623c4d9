//! Compass directions between adjacent grid cells

use std::fmt;

/// One of the 8 directions from a cell to a touching cell
///
/// Variants are declared in the order of a row-major sweep over the 3x3
/// block around a cell (top row left to right, then the middle row, then the
/// bottom row), skipping the centre. `Direction::ALL` and `index` rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    West,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    /// Every direction in canonical sweep order
    pub const ALL: [Self; 8] = [
        Self::NorthWest,
        Self::North,
        Self::NorthEast,
        Self::West,
        Self::East,
        Self::SouthWest,
        Self::South,
        Self::SouthEast,
    ];

    /// Unit step as `(dx, dy)`, with y growing downwards
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::NorthWest => (-1, -1),
            Self::North => (0, -1),
            Self::NorthEast => (1, -1),
            Self::West => (-1, 0),
            Self::East => (1, 0),
            Self::SouthWest => (-1, 1),
            Self::South => (0, 1),
            Self::SouthEast => (1, 1),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::NorthWest => Self::SouthEast,
            Self::North => Self::South,
            Self::NorthEast => Self::SouthWest,
            Self::West => Self::East,
            Self::East => Self::West,
            Self::SouthWest => Self::NorthEast,
            Self::South => Self::North,
            Self::SouthEast => Self::NorthWest,
        }
    }

    /// Position of this direction in `ALL`
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::NorthWest => "NW",
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::West => "W",
            Self::East => "E",
            Self::SouthWest => "SW",
            Self::South => "S",
            Self::SouthEast => "SE",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
