//! Game-level error type.

use derive_more::{Display, Error, From};

use crate::board::BoardError;
use crate::phases::PlayState;
use crate::player::PlayerError;
use crate::verifier::RuleViolation;

/// Anything that can stop a game or a replay.
///
/// Rule violations are recoverable during interactive play and never reach
/// this type from [`crate::Game::take_turn`]; they only surface here from
/// non-interactive paths such as [`crate::Journal::replay`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// Board mutation failed on a move that should have been legal.
    #[display("Board error: {_0}")]
    Board(BoardError),
    /// A player could not produce a move.
    #[display("{_0}")]
    Player(PlayerError),
    /// A move broke one or more rules.
    #[display("Move rejected: {_0}")]
    Rejected(RuleViolation),
    /// A lifecycle operation was called in the wrong state.
    #[display("Cannot {action} a game that is {state}")]
    #[from(ignore)]
    InvalidState {
        /// The attempted operation.
        action: &'static str,
        /// The state the game was in.
        #[error(not(source))]
        state: PlayState,
    },
    /// The thread panicked while a game session was open.
    #[display("Game session aborted by a panic")]
    #[from(ignore)]
    Panicked,
}
