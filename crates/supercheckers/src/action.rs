//! First-class move type for Supercheckers.
//!
//! A move is the player's stated intent: a team plus the ordered cells the
//! moving piece visits. It carries no judgement about legality; that is
//! the verifier's job.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::geometry::{Description, compare};
use crate::types::{Location, Team};

/// One turn's worth of movement.
///
/// Two locations describe a single slide or jump; more than two describe
/// a chain of jumps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    team: Team,
    locations: Vec<Location>,
}

impl Move {
    /// Creates a new move.
    #[instrument(skip(locations))]
    pub fn new(team: Team, locations: impl IntoIterator<Item = Location>) -> Self {
        Self {
            team,
            locations: locations.into_iter().collect(),
        }
    }

    /// Returns the team making this move.
    pub fn team(&self) -> Team {
        self.team
    }

    /// Returns the visited locations in order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns true if the move has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Starting location.
    pub fn first(&self) -> Option<Location> {
        self.locations.first().copied()
    }

    /// Final landing location.
    pub fn last(&self) -> Option<Location> {
        self.locations.last().copied()
    }

    /// Returns true if this move chains more than one step.
    pub fn is_chain(&self) -> bool {
        self.locations.len() > 2
    }

    /// Iterates consecutive (source, destination) pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Location, Location)> + '_ {
        self.locations.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Describes every segment of the move.
    pub fn descriptions(&self) -> impl Iterator<Item = Description> + '_ {
        self.segments().map(|(src, dst)| compare(src, dst))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let locations: Vec<String> = self.locations.iter().map(ToString::to_string).collect();
        write!(f, "[{}: {}]", self.team, locations.join(" "))
    }
}
