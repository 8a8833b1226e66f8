//! Append-only game history.
//!
//! The journal holds one board snapshot per turn. Entry 0 is the seed:
//! the starting board with no move. Entry `i` is entry `i - 1`'s board
//! with entry `i`'s move applied. Nothing is ever removed or rewritten.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::action::Move;
use crate::board::{Board, BoardError};
use crate::error::GameError;
use crate::types::{Location, Team};
use crate::verifier::Verifier;

/// One turn of history.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct JournalEntry {
    /// The move played, `None` for the seed entry.
    mv: Option<Move>,
    /// Board after the move.
    board: Board,
}

/// Ordered history of (move, resulting board) pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<JournalEntry>", into = "Vec<JournalEntry>")]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl TryFrom<Vec<JournalEntry>> for Journal {
    type Error = String;

    /// Accepts only a seed entry followed by entries that each equal the
    /// previous board with their move applied.
    fn try_from(entries: Vec<JournalEntry>) -> Result<Self, Self::Error> {
        match entries.first() {
            Some(seed) if seed.mv.is_none() => {}
            Some(_) => return Err("first journal entry must not carry a move".to_string()),
            None => return Err("journal must contain a seed entry".to_string()),
        }
        for (turn, pair) in entries.windows(2).enumerate() {
            let mv = pair[1]
                .mv
                .as_ref()
                .ok_or_else(|| format!("journal entry {} has no move", turn + 1))?;
            let mut expected = pair[0].board.clone();
            expected
                .apply(mv)
                .map_err(|e| format!("journal entry {}: {e}", turn + 1))?;
            if expected != pair[1].board {
                return Err(format!(
                    "journal entry {} does not match its move {mv}",
                    turn + 1
                ));
            }
        }
        Ok(Self { entries })
    }
}

impl From<Journal> for Vec<JournalEntry> {
    fn from(journal: Journal) -> Self {
        journal.entries
    }
}

impl Journal {
    /// Starts a journal from an initial board.
    #[instrument(skip(board))]
    pub fn new(board: &Board) -> Self {
        Self {
            entries: vec![JournalEntry {
                mv: None,
                board: board.clone(),
            }],
        }
    }

    /// The turn about to be played, 1-based.
    ///
    /// Equal to the number of entries, so a fresh journal is on turn 1.
    pub fn current_turn_number(&self) -> usize {
        self.entries.len()
    }

    /// The team to move: team one on odd turns, team two on even turns.
    pub fn current_team(&self) -> Team {
        if self.current_turn_number() % 2 == 1 {
            Team::One
        } else {
            Team::Two
        }
    }

    /// Borrows the latest board.
    pub fn latest_board(&self) -> &Board {
        // The seed entry is created in `new` and entries are never removed.
        &self.entries[self.entries.len() - 1].board
    }

    /// Returns an owned copy of the latest board.
    pub fn current_board(&self) -> Board {
        self.latest_board().clone()
    }

    /// Applies a move to a copy of the latest board and records it.
    ///
    /// Returns the captured locations. On failure the journal is unchanged.
    #[instrument(skip(self, mv), fields(turn = self.current_turn_number(), mv = %mv))]
    pub fn apply(&mut self, mv: Move) -> Result<Vec<Location>, BoardError> {
        let mut board = self.current_board();
        let captured = board.apply(&mv)?;
        debug!(captured = captured.len(), "Recording move");
        self.entries.push(JournalEntry {
            mv: Some(mv),
            board,
        });
        Ok(captured)
    }

    /// All entries, seed first.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Moves played so far, in order.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.entries.iter().filter_map(|entry| entry.mv.as_ref())
    }

    /// Number of entries, including the seed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a journal holds at least the seed entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replays moves from an initial board, verifying each one.
    ///
    /// Stops at the first illegal move with [`GameError::Rejected`].
    #[instrument(skip(board, moves, verifier))]
    pub fn replay<'a>(
        board: &Board,
        moves: impl IntoIterator<Item = &'a Move>,
        verifier: &Verifier,
    ) -> Result<Self, GameError> {
        let mut journal = Self::new(board);
        for mv in moves {
            verifier.verify(&journal, mv).into_result()?;
            journal.apply(mv.clone())?;
        }
        info!(turns = journal.len() - 1, "Replay complete");
        Ok(journal)
    }
}
