//! Core domain types for Supercheckers.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::geometry::to_char;

/// One of the two teams.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Team {
    /// Team one, marked `X`. Moves first.
    #[display("X")]
    One,
    /// Team two, marked `O`.
    #[display("O")]
    Two,
}

impl Team {
    /// Returns the opposing team.
    pub fn opponent(self) -> Self {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }

    /// Single-character board marker.
    pub fn marker(self) -> char {
        match self {
            Team::One => 'X',
            Team::Two => 'O',
        }
    }
}

/// A (row, column) grid coordinate, 0-indexed.
///
/// Any pair is representable so that off-board input can be described and
/// rejected later; [`Location::is_on_board`] tells the two apart.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct Location {
    /// Row index, 0 is the bottom row ("1").
    pub row: i8,
    /// Column index, 0 is column "A".
    pub col: i8,
}

impl Location {
    /// Number of rows and columns on the board.
    pub const SIZE: i8 = 8;

    /// Returns true if this location lies within the 8x8 grid.
    pub fn is_on_board(self) -> bool {
        (0..Self::SIZE).contains(&self.row) && (0..Self::SIZE).contains(&self.col)
    }

    /// Iterates every on-board location in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..Self::SIZE).flat_map(|row| (0..Self::SIZE).map(move |col| Location::new(row, col)))
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match to_char(self.col) {
            Some(letter) => write!(f, "{}{}", letter, i16::from(self.row) + 1),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

impl From<(i8, i8)> for Location {
    fn from((row, col): (i8, i8)) -> Self {
        Self::new(row, col)
    }
}

/// A game piece.
///
/// The location is rewritten by the board every time the piece is placed,
/// and is `None` for a piece that has never been placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Piece {
    /// Owning team.
    pub team: Team,
    /// Last cell this piece was placed on.
    #[new(default)]
    pub location: Option<Location>,
}
