//! Supercheckers rules engine.
//!
//! Supercheckers is played on an 8x8 board. Each team starts with twenty-four
//! pieces around the edge of an empty 4x4 middle region. Pieces slide one
//! cell or jump two cells in a straight line, capturing opposing pieces
//! they jump over, and jumps can be chained. After the opening, a team
//! that is alone in the middle wins.
//!
//! # Architecture
//!
//! - **Geometry**: classifies a step between two locations
//! - **Board**: the grid, the starting layout and move application
//! - **Journal**: one board snapshot per turn
//! - **Rules**: independent legality checks run by the [`Verifier`]
//! - **Game**: the turn state machine, driven by two [`Player`]s
//!
//! # Example
//!
//! ```
//! use supercheckers::{Game, Location, Move, PlayState, ScriptedPlayer, Team};
//!
//! let one = ScriptedPlayer::new(
//!     "one",
//!     [Move::new(Team::One, [Location::new(1, 2), Location::new(2, 2)])],
//! );
//! let two = ScriptedPlayer::new("two", []);
//! let mut game = Game::new(one, two);
//!
//! // Player two runs out of moves on turn 2.
//! assert!(game.play().is_err());
//! assert_eq!(game.play_state(), PlayState::Error);
//! assert_eq!(game.journal().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod game;
mod geometry;
mod journal;
mod notation;
mod phases;
mod player;
pub mod rules;
mod types;
mod verifier;

// Crate-level exports - Core types
pub use action::Move;
pub use board::{Board, BoardError};
pub use geometry::{Description, Direction, MoveType, compare, in_middle, to_char, to_int};
pub use types::{Location, Piece, Team};

// Crate-level exports - History and notation
pub use journal::{Journal, JournalEntry};
pub use notation::{NotationError, parse_locations};

// Crate-level exports - Rules
pub use rules::{OPENING_TURNS, Rule, all_rules};
pub use verifier::{RuleViolation, Verification, Verifier};

// Crate-level exports - Game lifecycle
pub use error::GameError;
pub use game::{Game, GameBuilder, GameEvent, GameListener, GameState, Session, TracingListener};
pub use phases::{Outcome, PlayState};
pub use player::{Player, PlayerError, ScriptedPlayer};
