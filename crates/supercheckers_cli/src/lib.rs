//! Console front end for Supercheckers.
//!
//! Hot-seat play on one terminal: both players type moves on stdin, the
//! board is printed to stdout and logs go to stderr.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod listener;
mod players;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, PlayConfig};
pub use listener::ConsoleListener;
pub use players::ConsolePlayer;
