//! Day 2: count safe reactor reports
//!
//! A report is a line of whitespace-separated levels. It is safe when the
//! levels are strictly increasing or strictly decreasing and every adjacent
//! pair differs by 1 to 3. Anything after a `#` is a comment.

use super::Answer;
use crate::core::{Profile, Puzzle, PuzzleConfig, PuzzleError, PuzzleInput};
use std::io::BufRead;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{Receiver, sync_channel};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info};

/// Number of workers in the parallel variant
pub const WORKER_COUNT: usize = 32;

/// Smallest and largest allowed step between adjacent levels
const STEP_RANGE: std::ops::RangeInclusive<u64> = 1..=3;

/// A single report's levels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    levels: Vec<i64>,
}

impl Report {
    /// Parse one report line
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` if a level is not an integer.
    pub fn parse(line: &str) -> Result<Self, PuzzleError> {
        let data = line.split_once('#').map_or(line, |(data, _)| data);

        let levels: Vec<i64> = data
            .split_whitespace()
            .map(|level| {
                level.parse().map_err(|e| {
                    PuzzleError::invalid_data(line, format!("bad level {level:?}: {e}"))
                })
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { levels })
    }

    #[must_use]
    pub fn levels(&self) -> &[i64] {
        &self.levels
    }

    #[must_use]
    pub fn is_safe(&self) -> bool {
        levels_safe(self.levels.iter().copied())
    }

    /// Safe as-is, or safe once any single level is removed
    #[must_use]
    pub fn is_safe_dampened(&self) -> bool {
        self.is_safe()
            || (0..self.levels.len()).any(|skip| {
                levels_safe(
                    self.levels
                        .iter()
                        .enumerate()
                        .filter(|&(i, _)| i != skip)
                        .map(|(_, &level)| level),
                )
            })
    }
}

fn levels_safe(levels: impl Iterator<Item = i64>) -> bool {
    let mut previous: Option<i64> = None;
    let mut increasing: Option<bool> = None;

    for level in levels {
        if let Some(prev) = previous {
            let change = level - prev;
            if !STEP_RANGE.contains(&change.unsigned_abs()) {
                return false;
            }

            let rising = change > 0;
            match increasing {
                None => increasing = Some(rising),
                Some(direction) if direction != rising => return false,
                Some(_) => {}
            }
        }
        previous = Some(level);
    }

    true
}

/// Count safe reports one line at a time
///
/// With `dampened`, a report that becomes safe after dropping one level also
/// counts. With `verbose`, each verdict is logged.
///
/// # Errors
///
/// Returns `InvalidData` for an unparseable report and `Io` if reading fails.
pub fn count_safe<R: BufRead>(reader: R, dampened: bool, verbose: bool) -> Result<u64, PuzzleError> {
    let mut safe_count = 0;

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let report = Report::parse(&line)?;
        let safe = if dampened {
            report.is_safe_dampened()
        } else {
            report.is_safe()
        };

        debug!(levels = ?report.levels(), safe, "checked report");
        if verbose {
            info!("Report: `{line}` is [{safe}]");
        }

        if safe {
            safe_count += 1;
        }
    }

    Ok(safe_count)
}

/// Count safe reports with a fixed pool of `WORKER_COUNT` workers
///
/// Lines are handed to the workers over a bounded channel and the count is
/// an atomic. The result always equals `count_safe(reader, false, false)`.
///
/// # Errors
///
/// Returns the first `InvalidData` or `Io` error seen. Workers keep draining
/// the channel after an error so the reader never blocks.
pub fn count_safe_parallel<R: BufRead + Send>(reader: R) -> Result<u64, PuzzleError> {
    // One extra thread for the producer loop.
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(WORKER_COUNT + 1)
        .build()?;

    let safe_count = AtomicUsize::new(0);
    let first_error: Mutex<Option<PuzzleError>> = Mutex::new(None);
    let record_error = |err: PuzzleError| {
        let mut slot = first_error.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.is_none() {
            *slot = Some(err);
        }
    };

    let (sender, receiver) = sync_channel::<String>(WORKER_COUNT);
    let receiver = Mutex::new(receiver);

    pool.scope(|scope| {
        for _ in 0..WORKER_COUNT {
            scope.spawn(|_| {
                while let Some(line) = next_line(&receiver) {
                    if line.trim().is_empty() {
                        continue;
                    }
                    match Report::parse(&line) {
                        Ok(report) if report.is_safe() => {
                            safe_count.fetch_add(1, Ordering::Relaxed);
                        }
                        Ok(_) => {}
                        Err(err) => record_error(err),
                    }
                }
            });
        }

        for line in reader.lines() {
            match line {
                Ok(line) => {
                    if sender.send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    record_error(err.into());
                    break;
                }
            }
        }
        drop(sender);
    });

    if let Some(err) = first_error
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner)
    {
        return Err(err);
    }

    Ok(safe_count.into_inner() as u64)
}

/// Take the next line, or `None` once the producer hangs up
fn next_line(receiver: &Mutex<Receiver<String>>) -> Option<String> {
    receiver
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .recv()
        .ok()
}

/// Solve the configured day 2 puzzle
///
/// # Errors
///
/// Returns an error if the puzzle is undefined or the input cannot be read
/// or parsed.
pub fn run(config: &PuzzleConfig, parallel: bool) -> Result<Answer, PuzzleError> {
    let puzzle = config.puzzle()?;
    let reader = PuzzleInput::open(config)?.into_reader();

    let safe = match puzzle {
        Puzzle::One if parallel => {
            let _profile = Profile::start("safe reports (parallel)");
            count_safe_parallel(reader)?
        }
        Puzzle::One => {
            let _profile = Profile::start("safe reports");
            count_safe(reader, false, config.sample)?
        }
        Puzzle::Two => {
            let _profile = Profile::start("dampened safe reports");
            count_safe(reader, true, config.sample)?
        }
    };

    let label = match puzzle {
        Puzzle::One => "Puzzle 1 Safe count",
        Puzzle::Two => "Puzzle 2 Safe count",
    };
    Ok(Answer::new(label, safe))
}
