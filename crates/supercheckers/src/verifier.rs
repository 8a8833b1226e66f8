//! Runs the rule set against a proposed move.

use derive_more::{Display, Error};
use tracing::{debug, instrument};

use crate::action::Move;
use crate::journal::Journal;
use crate::rules::{Rule, all_rules};

/// A move broke one or more rules.
///
/// Holds every failed rule's message, in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{}", messages.join("; "))]
pub struct RuleViolation {
    #[error(not(source))]
    messages: Vec<String>,
}

impl RuleViolation {
    /// Player-facing messages of the failed rules.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

/// Result of checking one move against every rule.
#[derive(Debug)]
pub struct Verification<'a> {
    failed_rules: Vec<&'a dyn Rule>,
}

impl<'a> Verification<'a> {
    /// True when no rule failed.
    pub fn is_valid(&self) -> bool {
        self.failed_rules.is_empty()
    }

    /// The rules that rejected the move.
    pub fn failed_rules(&self) -> &[&'a dyn Rule] {
        &self.failed_rules
    }

    /// Messages of the failed rules.
    pub fn messages(&self) -> Vec<String> {
        self.failed_rules
            .iter()
            .map(|rule| rule.message().to_string())
            .collect()
    }

    /// Converts to a `Result`, carrying the messages on failure.
    pub fn into_result(self) -> Result<(), RuleViolation> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(RuleViolation {
                messages: self.messages(),
            })
        }
    }
}

/// An ordered, non-empty set of rules.
#[derive(Debug)]
pub struct Verifier {
    rules: Vec<Box<dyn Rule>>,
}

impl Verifier {
    /// Creates a verifier from an explicit rule list.
    ///
    /// # Panics
    ///
    /// Panics if `rules` is empty.
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        assert!(!rules.is_empty(), "a verifier needs at least one rule");
        Self { rules }
    }

    /// Verifier with every rule of the game.
    pub fn standard() -> Self {
        Self::new(all_rules())
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Checks a move against every rule without short-circuiting.
    #[instrument(skip(self, journal, mv), fields(turn = journal.current_turn_number(), mv = %mv))]
    pub fn verify<'a>(&'a self, journal: &Journal, mv: &Move) -> Verification<'a> {
        let failed_rules: Vec<&'a dyn Rule> = self
            .rules
            .iter()
            .map(|rule| rule.as_ref())
            .filter(|rule| {
                let valid = rule.is_valid(journal, mv);
                debug!(rule = rule.name(), valid, "Evaluated rule");
                !valid
            })
            .collect();
        Verification { failed_rules }
    }
}

impl Default for Verifier {
    fn default() -> Self {
        Self::standard()
    }
}
