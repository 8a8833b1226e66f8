//! Command-line interface for supercheckers.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Supercheckers - two-player console game
#[derive(Parser, Debug)]
#[command(name = "supercheckers")]
#[command(about = "Play Supercheckers at the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a two-player game on this terminal
    Play {
        /// Path to a TOML config file (defaults to supercheckers.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Name for team X, who moves first
        #[arg(long)]
        player_one: Option<String>,

        /// Name for team O
        #[arg(long)]
        player_two: Option<String>,

        /// Log filter used when RUST_LOG is unset (e.g. "info")
        #[arg(long)]
        log_filter: Option<String>,
    },

    /// Print the starting board
    Board,

    /// List the movement rules
    Rules,
}
