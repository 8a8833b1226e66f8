//! Opening phase: each side's first two moves slide into the middle.

use super::Rule;
use crate::action::Move;
use crate::geometry::{MoveType, compare, in_middle};
use crate::journal::Journal;

/// Turns up to and including this one belong to the opening.
pub const OPENING_TURNS: usize = 4;

/// During the opening a move is a single slide ending in the middle.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpeningRestriction;

impl Rule for OpeningRestriction {
    fn name(&self) -> &'static str {
        "OpeningRestriction"
    }

    fn message(&self) -> &'static str {
        "For your first two moves, you must slide into the middle."
    }

    fn is_valid(&self, journal: &Journal, mv: &Move) -> bool {
        if journal.current_turn_number() > OPENING_TURNS {
            return true;
        }
        match mv.locations() {
            [src, dst] => compare(*src, *dst).move_type == MoveType::Slide && in_middle(*dst),
            _ => false,
        }
    }
}
