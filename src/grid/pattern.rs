//! Diagonal cross pattern around an anchor node
//!
//! ```text
//! M.S
//! .A.
//! M.S
//! ```
//!
//! Both diagonals through the anchor must read `M?S` or `S?M`.

use super::{Direction, Grid, Position};

/// Diagonal endpoint pairs checked around the anchor
const DIAGONALS: [(Direction, Direction); 2] = [
    (Direction::NorthWest, Direction::SouthEast),
    (Direction::NorthEast, Direction::SouthWest),
];

/// The character that must sit opposite `value` on a diagonal
#[must_use]
pub const fn complement(value: char) -> Option<char> {
    match value {
        'S' => Some('M'),
        'M' => Some('S'),
        _ => None,
    }
}

/// Whether both diagonals through `center` pair `S` with `M`
///
/// A missing diagonal neighbour fails the match. The centre's own character
/// is not checked; callers pass anchors that already hold it.
#[must_use]
pub fn is_cross_match(grid: &Grid, center: Position) -> bool {
    DIAGONALS.iter().all(|&(first, second)| {
        match (
            grid.neighbor_of(center, first),
            grid.neighbor_of(center, second),
        ) {
            (Some(a), Some(b)) => complement(a.value()) == Some(b.value()),
            _ => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center_match(text: &str) -> bool {
        let (grid, anchors) = Grid::from_text(text, 'A');
        assert_eq!(anchors.len(), 1, "expected exactly one anchor in {text:?}");
        is_cross_match(&grid, anchors[0])
    }

    /// Swap every S and M in the text
    fn swapped(text: &str) -> String {
        text.chars()
            .map(|c| match c {
                'S' => 'M',
                'M' => 'S',
                other => other,
            })
            .collect()
    }

    #[test]
    fn matches_basic_cross() {
        assert!(center_match("M.S\n.A.\nM.S"));
    }

    #[test]
    fn matches_all_orientations() {
        assert!(center_match("M.M\n.A.\nS.S"));
        assert!(center_match("S.S\n.A.\nM.M"));
        assert!(center_match("S.M\n.A.\nS.M"));
    }

    #[test]
    fn rejects_same_letter_on_a_diagonal() {
        assert!(!center_match("M.S\n.A.\nS.M"));
        assert!(!center_match("S.S\n.A.\nS.S"));
    }

    #[test]
    fn rejects_other_letters() {
        assert!(!center_match("X.S\n.A.\nM.S"));
        assert!(!center_match("M.S\n.A.\nM.X"));
    }

    #[test]
    fn missing_corner_fails() {
        assert!(!center_match(".A.\nM.S"));
        assert!(!center_match("M.S\n.A"));
        assert!(!center_match("A"));
    }

    #[test]
    fn symmetric_under_swapping_s_and_m() {
        let cases = [
            "M.S\n.A.\nM.S",
            "M.M\n.A.\nS.S",
            "M.S\n.A.\nS.M",
            "S.S\n.A.\nS.S",
            "MMS\nSAM\nMSS",
            "X.S\n.A.\nM.S",
        ];

        for case in cases {
            assert_eq!(center_match(case), center_match(&swapped(case)), "{case}");
        }
    }

    #[test]
    fn complement_table() {
        assert_eq!(complement('S'), Some('M'));
        assert_eq!(complement('M'), Some('S'));
        assert_eq!(complement('A'), None);
    }
}
