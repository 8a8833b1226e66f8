//! The player capability and a scripted implementation.

use std::collections::VecDeque;

use derive_more::{Display, Error};
use tracing::{debug, instrument};

use crate::action::Move;
use crate::journal::Journal;

/// A player could not produce a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Player error: {} at {}:{}", message, file, line)]
pub struct PlayerError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PlayerError {
    /// Creates a new player error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Something that chooses moves: a person at a console, a script, an AI.
///
/// A player only has to produce a structurally formed move. Legality is
/// decided by the verifier, and a rejected player is simply asked again.
pub trait Player {
    /// Display name.
    fn name(&self) -> &str;

    /// Proposes the next move given the game so far.
    fn create_move(&mut self, journal: &Journal) -> Result<Move, PlayerError>;
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn create_move(&mut self, journal: &Journal) -> Result<Move, PlayerError> {
        (**self).create_move(journal)
    }
}

/// Plays a fixed queue of moves, then fails.
#[derive(Debug, Clone)]
pub struct ScriptedPlayer {
    name: String,
    moves: VecDeque<Move>,
}

impl ScriptedPlayer {
    /// Creates a player that will play `moves` in order.
    pub fn new(name: impl Into<String>, moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            name: name.into(),
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not yet played.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Player for ScriptedPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(skip(self, journal), fields(player = %self.name))]
    fn create_move(&mut self, journal: &Journal) -> Result<Move, PlayerError> {
        let mv = self.moves.pop_front().ok_or_else(|| {
            PlayerError::new(format!(
                "{} has no moves left for turn {}",
                self.name,
                journal.current_turn_number()
            ))
        })?;
        debug!(mv = %mv, remaining = self.moves.len(), "Scripted move");
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::{Location, Team};

    #[test]
    fn test_scripted_player_plays_in_order() {
        let journal = Journal::new(&Board::new());
        let first = Move::new(Team::One, [Location::new(1, 2), Location::new(2, 2)]);
        let second = Move::new(Team::One, [Location::new(1, 4), Location::new(2, 4)]);
        let mut player = ScriptedPlayer::new("script", [first.clone(), second.clone()]);
        assert_eq!(player.name(), "script");
        assert_eq!(player.create_move(&journal), Ok(first));
        assert_eq!(player.create_move(&journal), Ok(second));
        assert_eq!(player.remaining(), 0);
    }

    #[test]
    fn test_exhausted_script_fails() {
        let journal = Journal::new(&Board::new());
        let mut player = ScriptedPlayer::new("empty", []);
        let error = player.create_move(&journal).unwrap_err();
        assert_eq!(error.message, "empty has no moves left for turn 1");
    }

    #[test]
    fn test_error_records_caller() {
        let (error, line) = (PlayerError::new("boom"), line!());
        assert_eq!(error.file, file!());
        assert_eq!(error.line, line);
        assert_eq!(
            error.to_string(),
            format!("Player error: boom at {}:{}", file!(), line)
        );
    }
}
