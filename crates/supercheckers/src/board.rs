//! The 8x8 Supercheckers board.

use std::collections::BTreeSet;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::action::Move;
use crate::geometry::{MoveType, compare, in_middle, to_char};
use crate::types::{Location, Piece, Team};

const SIZE: usize = Location::SIZE as usize;

/// Errors raised by board mutation.
///
/// These indicate a bug upstream (an unverified move reached the board),
/// never a player mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// A location outside the grid was used as an index.
    #[display("Invalid location: {_0}")]
    InvalidLocation(#[error(not(source))] Location),
    /// A move started from an empty cell.
    #[display("No piece to move at {_0}")]
    MissingPiece(#[error(not(source))] Location),
}

/// Supercheckers board: an 8x8 grid of optional pieces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BoardRecord")]
pub struct Board {
    /// Cells indexed `[row][col]`.
    grid: [[Option<Piece>; SIZE]; SIZE],
}

/// Serialized form of a board. Piece locations are rewritten on load.
#[derive(Deserialize)]
struct BoardRecord {
    grid: [[Option<Piece>; SIZE]; SIZE],
}

impl From<BoardRecord> for Board {
    fn from(record: BoardRecord) -> Self {
        let mut board = Self::empty();
        for location in Location::all() {
            let (row, col) = (location.row as usize, location.col as usize);
            board.place(location, record.grid[row][col]);
        }
        board
    }
}

impl Board {
    /// Creates a board in the starting position.
    #[instrument]
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.reset();
        board
    }

    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Self {
            grid: [[None; SIZE]; SIZE],
        }
    }

    /// Clears the board and lays out the starting position.
    ///
    /// Every cell outside the middle gets a piece. Within a row, teams
    /// alternate across the occupied cells, and each row starts with the
    /// opposite team to the row below it.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.grid = [[None; SIZE]; SIZE];
        for row in 0..Location::SIZE {
            let outer = (0..Location::SIZE)
                .map(|col| Location::new(row, col))
                .filter(|location| !in_middle(*location));
            for (k, location) in outer.enumerate() {
                let team = if (usize::from(row as u8) + k) % 2 == 0 {
                    Team::Two
                } else {
                    Team::One
                };
                self.place(location, Some(Piece::new(team)));
            }
        }
        debug!("Board reset to starting position");
    }

    fn index(location: Location) -> Result<(usize, usize), BoardError> {
        if location.is_on_board() {
            Ok((location.row as usize, location.col as usize))
        } else {
            Err(BoardError::InvalidLocation(location))
        }
    }

    /// Returns the piece at a location, if any.
    pub fn get(&self, location: Location) -> Result<Option<Piece>, BoardError> {
        let (row, col) = Self::index(location)?;
        Ok(self.grid[row][col])
    }

    /// Returns true if the location is on the board and holds a piece.
    pub fn is_occupied(&self, location: Location) -> bool {
        matches!(self.get(location), Ok(Some(_)))
    }

    /// Puts a piece (or nothing) at a location, updating the piece's location.
    pub fn set(&mut self, location: Location, piece: Option<Piece>) -> Result<(), BoardError> {
        let (row, col) = Self::index(location)?;
        self.grid[row][col] = piece.map(|mut piece| {
            piece.location = Some(location);
            piece
        });
        Ok(())
    }

    // Infallible variant of `set` for locations generated from the grid itself.
    fn place(&mut self, location: Location, piece: Option<Piece>) {
        if let Ok((row, col)) = Self::index(location) {
            self.grid[row][col] = piece.map(|mut piece| {
                piece.location = Some(location);
                piece
            });
        }
    }

    /// Applies an already verified move, returning the captured locations.
    ///
    /// Each consecutive pair of locations relocates the moving piece. A jump
    /// over an opposing piece removes it; a jump over an own piece or over
    /// an empty cell captures nothing. The move is not re-validated.
    #[instrument(skip(self, mv), fields(mv = %mv))]
    pub fn apply(&mut self, mv: &Move) -> Result<Vec<Location>, BoardError> {
        let mut captured = Vec::new();
        for (src, dst) in mv.segments() {
            if let Some(location) = self.step(src, dst)? {
                captured.push(location);
            }
        }
        Ok(captured)
    }

    fn step(&mut self, src: Location, dst: Location) -> Result<Option<Location>, BoardError> {
        let piece = self.get(src)?.ok_or(BoardError::MissingPiece(src))?;
        // Check the destination before touching the source.
        Self::index(dst)?;
        self.set(src, None)?;
        self.set(dst, Some(piece))?;
        debug!(%src, %dst, team = %piece.team, "Moved piece");

        let description = compare(src, dst);
        if description.move_type != MoveType::Jump {
            return Ok(None);
        }
        let Some(jumped) = description.jumped else {
            return Ok(None);
        };
        match self.get(jumped)? {
            Some(victim) if victim.team != piece.team => {
                self.set(jumped, None)?;
                debug!(location = %jumped, team = %victim.team, "Captured piece");
                Ok(Some(jumped))
            }
            _ => Ok(None),
        }
    }

    /// Returns the set of teams with at least one piece in the middle region.
    pub fn get_middle_teams(&self) -> BTreeSet<Team> {
        self.pieces()
            .filter(|(location, _)| in_middle(*location))
            .map(|(_, piece)| piece.team)
            .collect()
    }

    /// Iterates over every occupied cell in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Location, Piece)> + '_ {
        Location::all().filter_map(|location| {
            self.get(location)
                .ok()
                .flatten()
                .map(|piece| (location, piece))
        })
    }

    /// Counts the pieces a team has on the board.
    pub fn count(&self, team: Team) -> usize {
        self.pieces().filter(|(_, piece)| piece.team == team).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letters: Vec<String> = (0..Location::SIZE)
            .filter_map(to_char)
            .map(String::from)
            .collect();
        let column_row = format!("   {} ", letters.join(" "));
        let divider_row = format!("  +{}+", "-".repeat(SIZE * 2 - 1));

        writeln!(f, "{column_row}")?;
        writeln!(f, "{divider_row}")?;
        for row in (0..Location::SIZE).rev() {
            write!(f, "{} |", row + 1)?;
            for col in 0..Location::SIZE {
                let marker = match self.get(Location::new(row, col)) {
                    Ok(Some(piece)) => piece.team.marker(),
                    _ => ' ',
                };
                // Dividers around the middle region are drawn with '#'.
                let divider = if (2..=5).contains(&row) && (1..=5).contains(&col) {
                    '#'
                } else {
                    '|'
                };
                write!(f, "{marker}{divider}")?;
            }
            writeln!(f, " {}", row + 1)?;
        }
        writeln!(f, "{divider_row}")?;
        write!(f, "{column_row}")
    }
}
