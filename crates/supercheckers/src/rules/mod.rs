//! Move legality rules for Supercheckers.
//!
//! Each rule is a small predicate over the journal and a proposed move.
//! Rules are independent: the verifier runs every one of them and reports
//! every failure, so no rule may assume another has passed.

pub mod occupancy;
pub mod opening;
pub mod shape;
pub mod win;

pub use occupancy::{FinalCellEmpty, IntermediateCellsEmpty, JumpedCellOccupied, OwnPiece};
pub use opening::{OPENING_TURNS, OpeningRestriction};
pub use shape::{ChainAllJumps, MinimumLocations, OnBoard, PairClassification};
pub use win::check_outcome;

use crate::action::Move;
use crate::journal::Journal;

/// A single legality check.
pub trait Rule: std::fmt::Debug {
    /// Short identifier, used in logs.
    fn name(&self) -> &'static str;

    /// Player-facing explanation shown when the rule fails.
    fn message(&self) -> &'static str;

    /// Returns true if the move satisfies this rule.
    fn is_valid(&self, journal: &Journal, mv: &Move) -> bool;
}

/// Every rule of the game, in reporting order.
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(MinimumLocations),
        Box::new(PairClassification),
        Box::new(ChainAllJumps),
        Box::new(OnBoard),
        Box::new(OwnPiece),
        Box::new(IntermediateCellsEmpty),
        Box::new(FinalCellEmpty),
        Box::new(OpeningRestriction),
        Box::new(JumpedCellOccupied),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_rules_are_distinct() {
        let rules = all_rules();
        assert_eq!(rules.len(), 9);
        let names: HashSet<_> = rules.iter().map(|rule| rule.name()).collect();
        assert_eq!(names.len(), rules.len());
        assert!(rules.iter().all(|rule| !rule.message().is_empty()));
    }
}
