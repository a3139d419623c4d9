//! Day 3: recover multiplications from corrupted memory
//!
//! Only well-formed `mul(A,B)` instructions count, with A and B of one to
//! three digits. Puzzle 2 also honours `do()` and `don't()`.

use super::Answer;
use crate::core::{Profile, Puzzle, PuzzleConfig, PuzzleError, PuzzleInput};
use regex::{Captures, Regex};
use std::io::BufRead;
use std::sync::LazyLock;
use tracing::debug;

static INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)")
        .expect("instruction pattern is valid")
});

/// A recognised instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Mul(u64, u64),
    Do,
    Dont,
}

impl Instruction {
    fn from_captures(caps: &Captures<'_>, line: &str) -> Result<Self, PuzzleError> {
        match &caps[0] {
            "do()" => Ok(Self::Do),
            "don't()" => Ok(Self::Dont),
            _ => Ok(Self::Mul(operand(caps, 1, line)?, operand(caps, 2, line)?)),
        }
    }
}

fn operand(caps: &Captures<'_>, group: usize, line: &str) -> Result<u64, PuzzleError> {
    let text = caps.get(group).map_or("", |m| m.as_str());
    text.parse()
        .map_err(|e| PuzzleError::invalid_data(line, format!("bad operand {text:?}: {e}")))
}

/// All instructions on a line, in order
///
/// # Errors
///
/// Returns `InvalidData` if an operand cannot be read as a number.
pub fn instructions(line: &str) -> Result<Vec<Instruction>, PuzzleError> {
    INSTRUCTION
        .captures_iter(line)
        .map(|caps| Instruction::from_captures(&caps, line))
        .collect()
}

/// Sums enabled products across the lines of one input
///
/// The enabled state carries over from one line to the next.
#[derive(Debug, Clone)]
pub struct MulScanner {
    conditional: bool,
    enabled: bool,
}

impl MulScanner {
    /// Scanner that ignores `do()` and `don't()`
    #[must_use]
    pub const fn unconditional() -> Self {
        Self {
            conditional: false,
            enabled: true,
        }
    }

    /// Scanner where `don't()` disables products until the next `do()`
    #[must_use]
    pub const fn conditional() -> Self {
        Self {
            conditional: true,
            enabled: true,
        }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sum the enabled products on one line
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` if an operand cannot be read as a number.
    pub fn scan_line(&mut self, line: &str) -> Result<u64, PuzzleError> {
        let mut total = 0;

        for instruction in instructions(line)? {
            match instruction {
                Instruction::Do if self.conditional => self.enabled = true,
                Instruction::Dont if self.conditional => self.enabled = false,
                Instruction::Mul(a, b) if self.enabled => total += a * b,
                _ => {}
            }
        }

        Ok(total)
    }

    /// Sum the enabled products over every line of `reader`
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` for a bad operand and `Io` if reading fails.
    pub fn scan<R: BufRead>(&mut self, reader: R) -> Result<u64, PuzzleError> {
        let mut total = 0;
        for line in reader.lines() {
            let line_total = self.scan_line(&line?)?;
            debug!(line_total, enabled = self.enabled, "scanned line");
            total += line_total;
        }
        Ok(total)
    }
}

/// Solve the configured day 3 puzzle
///
/// # Errors
///
/// Returns an error if the puzzle is undefined or the input cannot be read
/// or parsed.
pub fn run(config: &PuzzleConfig) -> Result<Answer, PuzzleError> {
    let puzzle = config.puzzle()?;
    let reader = PuzzleInput::open(config)?.into_reader();

    let total = match puzzle {
        Puzzle::One => {
            let _profile = Profile::start("mul totals");
            MulScanner::unconditional().scan(reader)?
        }
        Puzzle::Two => {
            let _profile = Profile::start("conditional mul totals");
            MulScanner::conditional().scan(reader)?
        }
    };

    Ok(Answer::new("Total", total))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_ONE: &str =
        "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
    const SAMPLE_TWO: &str =
        "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";

    #[test]
    fn finds_only_well_formed_instructions() {
        assert_eq!(
            instructions(SAMPLE_ONE).unwrap(),
            vec![
                Instruction::Mul(2, 4),
                Instruction::Mul(5, 5),
                Instruction::Mul(11, 8),
                Instruction::Mul(8, 5),
            ]
        );
    }

    #[test]
    fn recognises_toggles() {
        assert_eq!(
            instructions("don't()mul(1,2)do()").unwrap(),
            vec![Instruction::Dont, Instruction::Mul(1, 2), Instruction::Do]
        );
    }

    #[test]
    fn rejects_long_operands_and_spaces() {
        assert!(instructions("mul(1234,5) mul( 1,2) mul(1 ,2) mul(1,2").unwrap().is_empty());
    }

    #[test]
    fn sample_one_total() {
        let total = MulScanner::unconditional().scan(SAMPLE_ONE.as_bytes()).unwrap();
        assert_eq!(total, 161);
    }

    #[test]
    fn unconditional_ignores_toggles() {
        let total = MulScanner::unconditional().scan(SAMPLE_TWO.as_bytes()).unwrap();
        assert_eq!(total, 161);
    }

    #[test]
    fn sample_two_total() {
        let total = MulScanner::conditional().scan(SAMPLE_TWO.as_bytes()).unwrap();
        assert_eq!(total, 48);
    }

    #[test]
    fn disabled_state_carries_across_lines() {
        let input = "mul(2,3)don't()\nmul(100,100)\ndo()mul(4,5)";
        let mut scanner = MulScanner::conditional();
        assert_eq!(scanner.scan(input.as_bytes()).unwrap(), 26);

        let mut scanner = MulScanner::conditional();
        scanner.scan_line("don't()").unwrap();
        assert!(!scanner.is_enabled());
        assert_eq!(scanner.scan_line("mul(9,9)").unwrap(), 0);
        assert_eq!(scanner.scan_line("do()mul(9,9)").unwrap(), 81);
    }
}
