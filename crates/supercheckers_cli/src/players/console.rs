//! Human player typing moves at a terminal.

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use supercheckers::{Journal, Move, Player, PlayerError, parse_locations};
use tracing::{debug, instrument};

/// Reads moves as location lists, e.g. `C2 C3` or `c3,c5,e5`.
///
/// Both players of a hot-seat game share one input, so the reader is held
/// behind `Rc<RefCell<_>>`. Unparseable lines are reported and re-read;
/// legality is left to the game.
pub struct ConsolePlayer<R, W> {
    name: String,
    input: Rc<RefCell<R>>,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    /// Creates a console player.
    pub fn new(name: impl Into<String>, input: Rc<RefCell<R>>, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// The output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    fn read_line(&mut self) -> Result<Option<String>, PlayerError> {
        let mut line = String::new();
        let read = self
            .input
            .borrow_mut()
            .read_line(&mut line)
            .map_err(|e| PlayerError::new(format!("Failed to read input: {e}")))?;
        Ok((read > 0).then_some(line))
    }
}

fn write_to(output: &mut impl Write, text: std::fmt::Arguments<'_>) -> Result<(), PlayerError> {
    output
        .write_fmt(text)
        .and_then(|()| output.flush())
        .map_err(|e| PlayerError::new(format!("Failed to write output: {e}")))
}

impl<R: BufRead, W: Write> Player for ConsolePlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(
        skip(self, journal),
        fields(player = %self.name, turn = journal.current_turn_number())
    )]
    fn create_move(&mut self, journal: &Journal) -> Result<Move, PlayerError> {
        let team = journal.current_team();
        loop {
            write_to(&mut self.output, format_args!("{} ({team}) > ", self.name))?;
            let Some(line) = self.read_line()? else {
                return Err(PlayerError::new(format!("{} closed the input", self.name)));
            };
            match parse_locations(&line) {
                Ok(locations) => {
                    debug!(count = locations.len(), "Parsed move");
                    return Ok(Move::new(team, locations));
                }
                Err(error) => {
                    debug!(%error, "Unparseable input");
                    write_to(&mut self.output, format_args!("{error}\n"))?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use supercheckers::{Board, Location, Team};

    fn player(input: &str) -> ConsolePlayer<Cursor<Vec<u8>>, Vec<u8>> {
        let input = Rc::new(RefCell::new(Cursor::new(input.as_bytes().to_vec())));
        ConsolePlayer::new("Ada", input, Vec::new())
    }

    #[test]
    fn test_reads_a_move_for_the_team_to_play() {
        let mut player = player("c2 c3\n");
        let journal = Journal::new(&Board::new());
        let mv = player.create_move(&journal).unwrap();
        assert_eq!(mv, Move::new(Team::One, [Location::new(1, 2), Location::new(2, 2)]));
        assert_eq!(String::from_utf8_lossy(player.output()), "Ada (X) > ");
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut player = player("");
        let journal = Journal::new(&Board::new());
        let error = player.create_move(&journal).unwrap_err();
        assert_eq!(error.message, "Ada closed the input");
    }
}
