//! Advent of Code 2024 - CLI
//!
//! One subcommand per day. Input files are read from
//! `<data-dir>/day<N>/puzzle<P>.txt` (or `sample<P>.txt` with `--sample`).

use advent2024::{
    commands::{location_check, mull_it, print_queue, safe_reports, word_search},
    core::PuzzleConfig,
    output::print_answer,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "advent",
    about = "Advent of Code 2024 puzzle solvers",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// The puzzle number to run (1 or 2)
    #[arg(short = 'p', long = "puzzle-num", global = true, default_value_t = 1)]
    puzzle: u8,

    /// Run the sample data
    #[arg(short, long, global = true)]
    sample: bool,

    /// Enable debug output
    #[arg(short = 'D', long, global = true)]
    debug: bool,

    /// Directory holding the day<N>/ input folders
    #[arg(
        long,
        global = true,
        env = "ADVENT_DATA_DIR",
        default_value = "data"
    )]
    data_dir: PathBuf,

    /// Read this file instead of the resolved puzzle input
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Day 1: distance and similarity between two location lists
    LocCheck,

    /// Day 2: count safe reactor reports
    SafeReports {
        /// Check reports with a pool of 32 workers (puzzle 1 only)
        #[arg(short = 'a', long)]
        parallel: bool,
    },

    /// Day 3: sum the multiplications in corrupted memory
    MullIt,

    /// Day 4: XMAS word search
    WordSearch {
        /// Search anchors in parallel (puzzle 1 only)
        #[arg(short = 'a', long)]
        parallel: bool,
    },

    /// Day 5: check and fix manual page ordering
    PrintIt,
}

impl Commands {
    const fn day(&self) -> u8 {
        match self {
            Self::LocCheck => 1,
            Self::SafeReports { .. } => 2,
            Self::MullIt => 3,
            Self::WordSearch { .. } => 4,
            Self::PrintIt => 5,
        }
    }
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = PuzzleConfig {
        day: cli.command.day(),
        puzzle: cli.puzzle,
        sample: cli.sample,
        data_dir: cli.data_dir,
        input: cli.input,
    };

    let answer = match cli.command {
        Commands::LocCheck => location_check::run(&config),
        Commands::SafeReports { parallel } => safe_reports::run(&config, parallel),
        Commands::MullIt => mull_it::run(&config),
        Commands::WordSearch { parallel } => word_search::run(&config, parallel),
        Commands::PrintIt => print_queue::run(&config),
    }
    .with_context(|| {
        format!(
            "day {} puzzle {} failed ({})",
            config.day,
            config.puzzle,
            config.input_path().display()
        )
    })?;

    print_answer(&answer);
    Ok(())
}
