//! Win detection for Supercheckers.

use tracing::instrument;

use super::OPENING_TURNS;
use crate::board::Board;
use crate::phases::Outcome;

/// Decides the game from the board after a move.
///
/// `turn_number` is the journal's turn number once the move is recorded.
/// Returns `None` during the opening and while both teams hold the middle.
#[instrument(skip(board))]
pub fn check_outcome(board: &Board, turn_number: usize) -> Option<Outcome> {
    if turn_number <= OPENING_TURNS {
        return None;
    }
    let teams = board.get_middle_teams();
    let mut holders = teams.iter();
    match (holders.next(), holders.next()) {
        (None, _) => Some(Outcome::Tie),
        (Some(team), None) => Some(Outcome::Winner(*team)),
        (Some(_), Some(_)) => None,
    }
}
