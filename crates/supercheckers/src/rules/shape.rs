//! Rules about the shape of a move, independent of what is on the board.

use tracing::instrument;

use super::Rule;
use crate::action::Move;
use crate::geometry::{MoveType, compare};
use crate::journal::Journal;

/// A move needs a source and at least one destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimumLocations;

impl Rule for MinimumLocations {
    fn name(&self) -> &'static str {
        "MinimumLocations"
    }

    fn message(&self) -> &'static str {
        "Your move must contain at least two locations."
    }

    fn is_valid(&self, _journal: &Journal, mv: &Move) -> bool {
        mv.len() >= 2
    }
}

/// A two-location move is a single slide or a single jump.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairClassification;

impl Rule for PairClassification {
    fn name(&self) -> &'static str {
        "PairClassification"
    }

    fn message(&self) -> &'static str {
        "A move with two locations must be either a slide (one space) or a jump \
         (two spaces) in a straight line."
    }

    #[instrument(level = "debug", skip_all)]
    fn is_valid(&self, _journal: &Journal, mv: &Move) -> bool {
        match mv.locations() {
            [src, dst] => compare(*src, *dst).move_type != MoveType::Unknown,
            _ => true,
        }
    }
}

/// Slides cannot be chained; every step of a longer move is a jump.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainAllJumps;

impl Rule for ChainAllJumps {
    fn name(&self) -> &'static str {
        "ChainAllJumps"
    }

    fn message(&self) -> &'static str {
        "A move with more than two locations must contain only jumps (two spaces)."
    }

    #[instrument(level = "debug", skip_all)]
    fn is_valid(&self, _journal: &Journal, mv: &Move) -> bool {
        !mv.is_chain()
            || mv
                .descriptions()
                .all(|description| description.move_type == MoveType::Jump)
    }
}

/// Every visited location lies on the grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct OnBoard;

impl Rule for OnBoard {
    fn name(&self) -> &'static str {
        "OnBoard"
    }

    fn message(&self) -> &'static str {
        "Your piece must remain on the board at all times."
    }

    fn is_valid(&self, _journal: &Journal, mv: &Move) -> bool {
        mv.locations().iter().all(|location| location.is_on_board())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::{Location, Team};

    fn loc(row: i8, col: i8) -> Location {
        Location::new(row, col)
    }

    fn check(rule: &dyn Rule, locations: &[(i8, i8)]) -> bool {
        let journal = Journal::new(&Board::new());
        let mv = Move::new(
            Team::One,
            locations.iter().map(|&(row, col)| loc(row, col)),
        );
        rule.is_valid(&journal, &mv)
    }

    #[test]
    fn test_minimum_locations() {
        assert!(!check(&MinimumLocations, &[]));
        assert!(!check(&MinimumLocations, &[(1, 2)]));
        assert!(check(&MinimumLocations, &[(1, 2), (2, 2)]));
        assert!(check(&MinimumLocations, &[(1, 2), (3, 2), (5, 2)]));
    }

    #[test]
    fn test_pair_classification() {
        assert!(check(&PairClassification, &[(1, 2), (2, 2)]));
        assert!(check(&PairClassification, &[(1, 2), (3, 2)]));
        assert!(!check(&PairClassification, &[(1, 2), (4, 2)]));
        assert!(!check(&PairClassification, &[(1, 2), (2, 3)]));
        assert!(!check(&PairClassification, &[(1, 2), (1, 2)]));
    }

    #[test]
    fn test_pair_classification_ignores_other_lengths() {
        assert!(check(&PairClassification, &[(1, 2)]));
        assert!(check(&PairClassification, &[(1, 2), (5, 5), (0, 0)]));
    }

    #[test]
    fn test_chain_all_jumps() {
        assert!(check(&ChainAllJumps, &[(2, 2), (2, 4), (4, 4)]));
        assert!(!check(&ChainAllJumps, &[(2, 2), (2, 3), (2, 5)]));
        assert!(!check(&ChainAllJumps, &[(2, 2), (2, 4), (2, 5)]));
        // Pairs are judged by PairClassification.
        assert!(check(&ChainAllJumps, &[(2, 2), (6, 6)]));
    }

    #[test]
    fn test_on_board() {
        assert!(check(&OnBoard, &[(0, 0), (7, 7)]));
        assert!(!check(&OnBoard, &[(0, 0), (-1, 0)]));
        assert!(!check(&OnBoard, &[(7, 6), (7, 8)]));
        assert!(check(&OnBoard, &[]));
    }
}
