//! Command-line interface for ttt_match.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use ttt_match::{FirstMoverPolicy, Strategy};

/// Tic-tac-toe matches against a heuristic computer opponent
#[derive(Parser, Debug)]
#[command(name = "ttt_match")]
#[command(about = "Best-of-N tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively against the computer
    Play {
        /// Path to a TOML match configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Rounds needed to win a match (overrides the config file)
        #[arg(short, long)]
        win_score: Option<u32>,

        /// Computer strategy: heuristic, random or first_available
        #[arg(short, long)]
        strategy: Option<Strategy>,

        /// Who moves first: ask, player_one, player_two or random
        #[arg(short, long)]
        first_mover: Option<FirstMoverPolicy>,

        /// Seed for reproducible computer moves and coin flips
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Let two computer players play each other
    Simulate {
        /// Path to a TOML match configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of matches to play
        #[arg(short, long, default_value = "1")]
        matches: u32,

        /// Strategy for the second computer (the first uses the configured one)
        #[arg(long, default_value = "random")]
        opponent: Strategy,

        /// Seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,

        /// Print the history as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
