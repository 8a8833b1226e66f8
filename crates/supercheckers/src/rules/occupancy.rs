//! Rules that inspect the current board.
//!
//! Off-board locations are skipped here; `OnBoard` reports them.

use tracing::{debug, instrument};

use super::Rule;
use crate::action::Move;
use crate::geometry::MoveType;
use crate::journal::Journal;

/// The first location holds a piece of the team to move.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnPiece;

impl Rule for OwnPiece {
    fn name(&self) -> &'static str {
        "OwnPiece"
    }

    fn message(&self) -> &'static str {
        "You must move a piece from your own team."
    }

    #[instrument(level = "debug", skip_all)]
    fn is_valid(&self, journal: &Journal, mv: &Move) -> bool {
        let team = journal.current_team();
        let Some(src) = mv.first() else {
            return false;
        };
        match journal.latest_board().get(src) {
            Ok(Some(piece)) => piece.team == team && mv.team() == team,
            _ => false,
        }
    }
}

/// Mid-chain landing cells are empty before the move.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntermediateCellsEmpty;

impl Rule for IntermediateCellsEmpty {
    fn name(&self) -> &'static str {
        "IntermediateCellsEmpty"
    }

    fn message(&self) -> &'static str {
        "All intermediate landing locations must be empty."
    }

    fn is_valid(&self, journal: &Journal, mv: &Move) -> bool {
        let locations = mv.locations();
        if locations.len() <= 2 {
            return true;
        }
        let board = journal.latest_board();
        locations[1..locations.len() - 1]
            .iter()
            .all(|location| !board.is_occupied(*location))
    }
}

/// The final landing cell is empty before the move.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinalCellEmpty;

impl Rule for FinalCellEmpty {
    fn name(&self) -> &'static str {
        "FinalCellEmpty"
    }

    fn message(&self) -> &'static str {
        "Your final landing location must be empty."
    }

    fn is_valid(&self, journal: &Journal, mv: &Move) -> bool {
        if mv.len() < 2 {
            return true;
        }
        mv.last()
            .is_none_or(|dst| !journal.latest_board().is_occupied(dst))
    }
}

/// Every jump passes over a piece.
///
/// The chain is walked on a scratch board where opposing pieces disappear
/// as they are jumped, so one capture cannot be jumped twice. Own pieces
/// stay put and may be jumped repeatedly.
#[derive(Debug, Clone, Copy, Default)]
pub struct JumpedCellOccupied;

impl Rule for JumpedCellOccupied {
    fn name(&self) -> &'static str {
        "JumpedCellOccupied"
    }

    fn message(&self) -> &'static str {
        "All jumps must be over a piece."
    }

    #[instrument(level = "debug", skip_all)]
    fn is_valid(&self, journal: &Journal, mv: &Move) -> bool {
        let team = journal.current_team();
        let mut scratch = journal.current_board();

        for description in mv.descriptions() {
            if description.move_type != MoveType::Jump {
                continue;
            }
            let Some(jumped) = description.jumped else {
                continue;
            };
            match scratch.get(jumped) {
                Ok(None) => {
                    debug!(location = %jumped, "Jump over empty cell");
                    return false;
                }
                Ok(Some(piece)) if piece.team != team => {
                    if scratch.set(jumped, None).is_err() {
                        return false;
                    }
                }
                _ => {}
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::{Location, Piece, Team};

    fn loc(row: i8, col: i8) -> Location {
        Location::new(row, col)
    }

    fn board_with(pieces: &[(i8, i8, Team)]) -> Board {
        let mut board = Board::empty();
        for &(row, col, team) in pieces {
            board.set(loc(row, col), Some(Piece::new(team))).unwrap();
        }
        board
    }

    fn mv(team: Team, locations: &[(i8, i8)]) -> Move {
        Move::new(team, locations.iter().map(|&(row, col)| loc(row, col)))
    }

    #[test]
    fn test_own_piece() {
        let journal = Journal::new(&Board::new());
        // (1, 2) starts as team one, (1, 3) as team two.
        assert!(OwnPiece.is_valid(&journal, &mv(Team::One, &[(1, 2), (2, 2)])));
        assert!(!OwnPiece.is_valid(&journal, &mv(Team::One, &[(1, 3), (2, 3)])));
        assert!(!OwnPiece.is_valid(&journal, &mv(Team::One, &[(3, 3), (3, 4)])));
        assert!(!OwnPiece.is_valid(&journal, &mv(Team::One, &[(-1, 2), (0, 2)])));
        assert!(!OwnPiece.is_valid(&journal, &mv(Team::One, &[])));
    }

    #[test]
    fn test_own_piece_requires_matching_move_team() {
        let journal = Journal::new(&Board::new());
        assert!(!OwnPiece.is_valid(&journal, &mv(Team::Two, &[(1, 2), (2, 2)])));
    }

    #[test]
    fn test_intermediate_cells_empty() {
        let board = board_with(&[(2, 2, Team::One), (2, 3, Team::Two), (2, 6, Team::Two)]);
        let journal = Journal::new(&board);
        assert!(IntermediateCellsEmpty.is_valid(
            &journal,
            &mv(Team::One, &[(2, 2), (2, 4), (4, 4)])
        ));
        assert!(!IntermediateCellsEmpty.is_valid(
            &journal,
            &mv(Team::One, &[(2, 2), (2, 4), (2, 6), (4, 6)])
        ));
        // Pairs have no intermediate cells.
        assert!(IntermediateCellsEmpty.is_valid(&journal, &mv(Team::One, &[(2, 2), (2, 3)])));
    }

    #[test]
    fn test_final_cell_empty() {
        let board = board_with(&[(2, 2, Team::One), (2, 3, Team::Two)]);
        let journal = Journal::new(&board);
        assert!(FinalCellEmpty.is_valid(&journal, &mv(Team::One, &[(2, 2), (3, 2)])));
        assert!(!FinalCellEmpty.is_valid(&journal, &mv(Team::One, &[(2, 2), (2, 3)])));
        assert!(FinalCellEmpty.is_valid(&journal, &mv(Team::One, &[(2, 2), (2, 9)])));
        assert!(FinalCellEmpty.is_valid(&journal, &mv(Team::One, &[(2, 2)])));
    }

    #[test]
    fn test_jump_needs_a_piece() {
        let board = board_with(&[(2, 2, Team::One), (2, 3, Team::Two)]);
        let journal = Journal::new(&board);
        assert!(JumpedCellOccupied.is_valid(&journal, &mv(Team::One, &[(2, 2), (2, 4)])));
        assert!(!JumpedCellOccupied.is_valid(&journal, &mv(Team::One, &[(2, 2), (4, 2)])));
        // Slides are not jumps.
        assert!(JumpedCellOccupied.is_valid(&journal, &mv(Team::One, &[(2, 2), (3, 2)])));
    }

    #[test]
    fn test_jump_over_own_piece() {
        let board = board_with(&[(2, 2, Team::One), (2, 3, Team::One)]);
        let journal = Journal::new(&board);
        assert!(JumpedCellOccupied.is_valid(&journal, &mv(Team::One, &[(2, 2), (2, 4), (2, 2)])));
    }

    #[test]
    fn test_captured_piece_cannot_be_jumped_twice() {
        let board = board_with(&[(2, 2, Team::One), (2, 3, Team::Two)]);
        let journal = Journal::new(&board);
        assert!(!JumpedCellOccupied.is_valid(&journal, &mv(Team::One, &[(2, 2), (2, 4), (2, 2)])));
    }
}
