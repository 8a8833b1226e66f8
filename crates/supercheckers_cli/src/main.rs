//! Supercheckers - console game
//!
//! Two players share one terminal.

#![warn(missing_docs)]

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Result;
use clap::Parser;
use supercheckers::{Board, GameBuilder, Verifier};
use supercheckers_cli::{Cli, Command, ConsoleListener, ConsolePlayer, PlayConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            player_one,
            player_two,
            log_filter,
        } => run_play(config, player_one, player_two, log_filter),
        Command::Board => {
            init_tracing("warn");
            println!("{}", Board::new());
            Ok(())
        }
        Command::Rules => {
            init_tracing("warn");
            for rule in Verifier::standard().rules() {
                println!("{:<24}{}", rule.name(), rule.message());
            }
            Ok(())
        }
    }
}

/// Logs go to stderr so they never interleave with the board.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Play a hot-seat game on this terminal
#[instrument(skip_all)]
fn run_play(
    config: Option<PathBuf>,
    player_one: Option<String>,
    player_two: Option<String>,
    log_filter: Option<String>,
) -> Result<()> {
    let config =
        PlayConfig::load(config.as_deref())?.with_overrides(player_one, player_two, log_filter);
    init_tracing(config.log_filter());
    info!(player_one = %config.player_one(), player_two = %config.player_two(), "Starting game");

    let input = Rc::new(RefCell::new(io::stdin().lock()));
    let one = ConsolePlayer::new(config.player_one().clone(), Rc::clone(&input), io::stdout());
    let two = ConsolePlayer::new(config.player_two().clone(), input, io::stdout());

    let mut game = GameBuilder::new(one, two)
        .listener(ConsoleListener::new(io::stdout()))
        .build();
    let outcome = game.play()?;
    info!(?outcome, "Game finished");
    Ok(())
}
