//! Prints game progress to a terminal.

use std::io::Write;

use supercheckers::{GameEvent, GameListener, Outcome, PlayState};
use tracing::warn;

/// Writes boards, rejections and results to an output stream.
///
/// Write failures are logged and otherwise ignored: the game itself is
/// unaffected by a broken terminal.
#[derive(Debug)]
pub struct ConsoleListener<W> {
    output: W,
}

impl<W: Write> ConsoleListener<W> {
    /// Creates a listener writing to `output`.
    pub fn new(output: W) -> Self {
        Self { output }
    }

    /// Returns the output stream.
    pub fn into_inner(self) -> W {
        self.output
    }

    fn render(&mut self, event: &GameEvent<'_>) -> std::io::Result<()> {
        let out = &mut self.output;
        match event {
            GameEvent::Started { board } => {
                writeln!(out, "{board}")?;
                writeln!(out, "Enter moves as locations, e.g. C2 C3 or c3,c5,e5.")?;
            }
            GameEvent::MoveRejected { violation, .. } => {
                for message in violation.messages() {
                    writeln!(out, "  - {message}")?;
                }
            }
            GameEvent::MoveApplied {
                player,
                mv,
                captured,
                board,
            } => {
                writeln!(out, "{player} played {mv}")?;
                if !captured.is_empty() {
                    let cells: Vec<String> = captured.iter().map(ToString::to_string).collect();
                    writeln!(out, "Captured: {}", cells.join(" "))?;
                }
                writeln!(out, "{board}")?;
            }
            GameEvent::Finished {
                state,
                outcome,
                error,
                ..
            } => match (state, outcome, error) {
                (PlayState::Error, _, Some(error)) => writeln!(out, "Game aborted: {error}")?,
                (_, Some(Outcome::Winner(team)), _) => writeln!(out, "Team {team} wins!")?,
                (_, Some(Outcome::Tie), _) => {
                    writeln!(out, "Nobody holds the middle. It's a tie.")?
                }
                _ => writeln!(out, "Game ended without a result.")?,
            },
        }
        self.output.flush()
    }
}

impl<W: Write> GameListener for ConsoleListener<W> {
    fn on_event(&mut self, event: &GameEvent<'_>) {
        if let Err(error) = self.render(event) {
            warn!(%error, "Failed to write game output");
        }
    }
}
