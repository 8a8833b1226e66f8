//! Turn state machine and game lifecycle.
//!
//! A [`Game`] owns two players, the journal and the verifier. It moves
//! through [`PlayState::NotStarted`], [`PlayState::InProgress`] and then
//! either [`PlayState::Complete`] or [`PlayState::Error`]. Progress is
//! reported to a [`GameListener`].
//!
//! A [`Session`] brackets play: it begins the game when opened and ends it
//! when dropped, including while unwinding from a panic.

use std::ops::{Deref, DerefMut};

use tracing::{debug, info, instrument, warn};

use crate::action::Move;
use crate::board::Board;
use crate::error::GameError;
use crate::journal::Journal;
use crate::phases::{Outcome, PlayState};
use crate::player::Player;
use crate::rules::check_outcome;
use crate::types::{Location, Team};
use crate::verifier::{RuleViolation, Verifier};

/// Something that happened during a game.
#[derive(Debug, Clone, Copy)]
pub enum GameEvent<'a> {
    /// The game began on this board.
    Started {
        /// Starting board.
        board: &'a Board,
    },
    /// A proposed move broke the rules; the same player is asked again.
    MoveRejected {
        /// Name of the player who proposed the move.
        player: &'a str,
        /// The rejected move.
        mv: &'a Move,
        /// Every rule the move broke.
        violation: &'a RuleViolation,
    },
    /// A move was verified and recorded.
    MoveApplied {
        /// Name of the player who moved.
        player: &'a str,
        /// The move.
        mv: &'a Move,
        /// Opposing pieces removed by the move.
        captured: &'a [Location],
        /// Board after the move.
        board: &'a Board,
    },
    /// The game ended. Emitted exactly once.
    Finished {
        /// Final play state.
        state: PlayState,
        /// Winner or tie, if the game was decided.
        outcome: Option<Outcome>,
        /// Final board.
        board: &'a Board,
        /// The fault that ended the game, if any.
        error: Option<&'a GameError>,
    },
}

/// Receives game events.
pub trait GameListener {
    /// Called for every event, in order.
    fn on_event(&mut self, event: &GameEvent<'_>);
}

impl<L: GameListener + ?Sized> GameListener for Box<L> {
    fn on_event(&mut self, event: &GameEvent<'_>) {
        (**self).on_event(event);
    }
}

/// Logs every event through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingListener;

impl GameListener for TracingListener {
    fn on_event(&mut self, event: &GameEvent<'_>) {
        match event {
            GameEvent::Started { board } => {
                info!(
                    team_one = board.count(Team::One),
                    team_two = board.count(Team::Two),
                    "Game started"
                );
            }
            GameEvent::MoveRejected {
                player,
                mv,
                violation,
            } => {
                warn!(player, mv = %mv, %violation, "Move rejected");
            }
            GameEvent::MoveApplied {
                player,
                mv,
                captured,
                ..
            } => {
                info!(player, mv = %mv, captured = captured.len(), "Move applied");
            }
            GameEvent::Finished {
                state,
                outcome,
                error,
                ..
            } => match (outcome, error) {
                (_, Some(error)) => warn!(%state, %error, "Game aborted"),
                (Some(outcome), None) => info!(%state, %outcome, "Game over"),
                (None, None) => info!(%state, "Game ended undecided"),
            },
        }
    }
}

/// Everything that changes as a game is played.
pub struct GameState {
    player_one: Box<dyn Player>,
    player_two: Box<dyn Player>,
    journal: Journal,
    play_state: PlayState,
    outcome: Option<Outcome>,
}

impl GameState {
    /// Creates a fresh state on the given board.
    pub fn new(player_one: Box<dyn Player>, player_two: Box<dyn Player>, board: &Board) -> Self {
        Self {
            player_one,
            player_two,
            journal: Journal::new(board),
            play_state: PlayState::default(),
            outcome: None,
        }
    }

    /// The player controlling a team.
    pub fn player(&self, team: Team) -> &dyn Player {
        match team {
            Team::One => self.player_one.as_ref(),
            Team::Two => self.player_two.as_ref(),
        }
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &dyn Player {
        self.player(self.journal.current_team())
    }

    /// History so far.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Lifecycle state.
    pub fn play_state(&self) -> PlayState {
        self.play_state
    }

    /// Winner or tie once decided.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameState")
            .field("player_one", &self.player_one.name())
            .field("player_two", &self.player_two.name())
            .field("turn", &self.journal.current_turn_number())
            .field("play_state", &self.play_state)
            .field("outcome", &self.outcome)
            .finish()
    }
}

/// Assembles a [`Game`].
pub struct GameBuilder {
    player_one: Box<dyn Player>,
    player_two: Box<dyn Player>,
    board: Option<Board>,
    verifier: Option<Verifier>,
    listener: Option<Box<dyn GameListener>>,
}

impl GameBuilder {
    /// Starts a builder. Player one controls team one and moves first.
    pub fn new(player_one: impl Player + 'static, player_two: impl Player + 'static) -> Self {
        Self {
            player_one: Box::new(player_one),
            player_two: Box::new(player_two),
            board: None,
            verifier: None,
            listener: None,
        }
    }

    /// Starts from a custom board instead of the standard layout.
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Uses a custom rule set.
    pub fn verifier(mut self, verifier: Verifier) -> Self {
        self.verifier = Some(verifier);
        self
    }

    /// Sends events to `listener` instead of the log.
    pub fn listener(mut self, listener: impl GameListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Builds a game that has not yet begun.
    pub fn build(self) -> Game {
        let board = self.board.unwrap_or_default();
        Game {
            state: GameState::new(self.player_one, self.player_two, &board),
            verifier: self.verifier.unwrap_or_default(),
            listener: self
                .listener
                .unwrap_or_else(|| Box::new(TracingListener)),
            finished: false,
        }
    }
}

/// A game of Supercheckers between two players.
pub struct Game {
    state: GameState,
    verifier: Verifier,
    listener: Box<dyn GameListener>,
    finished: bool,
}

impl Game {
    /// Shorthand for a standard game with default verifier and logging.
    pub fn new(player_one: impl Player + 'static, player_two: impl Player + 'static) -> Self {
        GameBuilder::new(player_one, player_two).build()
    }

    /// Current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// History so far.
    pub fn journal(&self) -> &Journal {
        &self.state.journal
    }

    /// Lifecycle state.
    pub fn play_state(&self) -> PlayState {
        self.state.play_state
    }

    /// Winner or tie once decided.
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome
    }

    /// The rule set in use.
    pub fn verifier(&self) -> &Verifier {
        &self.verifier
    }

    /// True while turns are being accepted.
    pub fn is_active(&self) -> bool {
        self.state.play_state == PlayState::InProgress
    }

    /// Moves the game from not started to in progress.
    #[instrument(skip(self))]
    pub fn begin(&mut self) -> Result<(), GameError> {
        if self.state.play_state != PlayState::NotStarted {
            return Err(GameError::InvalidState {
                action: "begin",
                state: self.state.play_state,
            });
        }
        self.state.play_state = PlayState::InProgress;
        debug!("Game in progress");
        self.listener.on_event(&GameEvent::Started {
            board: self.state.journal.latest_board(),
        });
        Ok(())
    }

    /// Plays one turn.
    ///
    /// Asks the current player for moves until one passes verification,
    /// records it, then checks for a decided game. Rejected moves are
    /// reported to the listener and never returned as errors. Player and
    /// board faults are returned and leave the state untouched.
    #[instrument(skip(self), fields(turn = self.state.journal.current_turn_number()))]
    pub fn take_turn(&mut self) -> Result<(), GameError> {
        if self.state.play_state != PlayState::InProgress {
            return Err(GameError::InvalidState {
                action: "take a turn in",
                state: self.state.play_state,
            });
        }

        let GameState {
            player_one,
            player_two,
            journal,
            ..
        } = &mut self.state;
        let player = match journal.current_team() {
            Team::One => player_one,
            Team::Two => player_two,
        };

        let mv = loop {
            let mv = player.create_move(journal)?;
            match self.verifier.verify(journal, &mv).into_result() {
                Ok(()) => break mv,
                Err(violation) => {
                    debug!(failed = violation.messages().len(), "Asking again");
                    self.listener.on_event(&GameEvent::MoveRejected {
                        player: player.name(),
                        mv: &mv,
                        violation: &violation,
                    });
                }
            }
        };

        let captured = journal.apply(mv.clone())?;
        self.listener.on_event(&GameEvent::MoveApplied {
            player: player.name(),
            mv: &mv,
            captured: &captured,
            board: journal.latest_board(),
        });

        let turn = journal.current_turn_number();
        if let Some(outcome) = check_outcome(journal.latest_board(), turn) {
            info!(%outcome, "Game decided");
            self.state.outcome = Some(outcome);
            self.state.play_state = PlayState::Complete;
        }
        Ok(())
    }

    /// Finishes the game.
    ///
    /// With an error the game ends in [`PlayState::Error`], otherwise in
    /// [`PlayState::Complete`]. Only the first call has any effect.
    #[instrument(skip(self, error), fields(faulted = error.is_some()))]
    pub fn end(&mut self, error: Option<&GameError>) {
        if self.finished {
            return;
        }
        self.finished = true;
        self.state.play_state = match error {
            Some(error) => {
                warn!(%error, "Game ended by fault");
                PlayState::Error
            }
            None => PlayState::Complete,
        };
        self.listener.on_event(&GameEvent::Finished {
            state: self.state.play_state,
            outcome: self.state.outcome,
            board: self.state.journal.latest_board(),
            error,
        });
    }

    /// Begins the game and returns a guard that ends it when dropped.
    pub fn session(&mut self) -> Result<Session<'_>, GameError> {
        self.begin()?;
        Ok(Session { game: self })
    }

    /// Plays until the game is decided or a fault occurs.
    ///
    /// Faults end the game in [`PlayState::Error`] and are returned.
    #[instrument(skip(self))]
    pub fn play(&mut self) -> Result<Option<Outcome>, GameError> {
        let mut session = self.session()?;
        while session.is_active() {
            if let Err(error) = session.take_turn() {
                session.finish(Some(&error));
                return Err(error);
            }
        }
        session.finish(None);
        Ok(self.state.outcome)
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

/// An open game. Dropping it ends the game.
///
/// A drop during a panic ends the game with [`GameError::Panicked`].
#[derive(Debug)]
pub struct Session<'g> {
    game: &'g mut Game,
}

impl Session<'_> {
    /// Ends the game now.
    pub fn finish(self, error: Option<&GameError>) {
        self.game.end(error);
    }
}

impl Deref for Session<'_> {
    type Target = Game;

    fn deref(&self) -> &Game {
        self.game
    }
}

impl DerefMut for Session<'_> {
    fn deref_mut(&mut self) -> &mut Game {
        self.game
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            self.game.end(Some(&GameError::Panicked));
        } else {
            self.game.end(None);
        }
    }
}
