//! Play status and outcome types for the game lifecycle.

use serde::{Deserialize, Serialize};

use crate::types::Team;

/// Where a game is in its lifecycle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum PlayState {
    /// Created, `begin` not yet called.
    #[default]
    #[display("not started")]
    NotStarted,
    /// Accepting turns.
    #[display("in progress")]
    InProgress,
    /// Finished normally, with a winner or a tie.
    #[display("complete")]
    Complete,
    /// Aborted by an unhandled fault.
    #[display("error")]
    Error,
}

impl PlayState {
    /// Returns true once the game can no longer change.
    pub fn is_terminal(self) -> bool {
        matches!(self, PlayState::Complete | PlayState::Error)
    }
}

/// Result of a decided game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Only this team holds the middle.
    Winner(Team),
    /// Nobody holds the middle.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Team> {
        match self {
            Outcome::Winner(team) => Some(*team),
            Outcome::Tie => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(team) => write!(f, "Team {team} wins"),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}
