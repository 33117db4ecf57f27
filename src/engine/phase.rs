//! Turn phases.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The authoritative phase of the current trick.
///
/// Resting phases wait for a decision: `Ready` (attacker opens), `Thrown`
/// (defender answers) and `Beaten` (throwers add cards or say done).
/// `Drawing`, `Throwing` and `Beating` are passed through instantly and only
/// show up in the phase path of a move outcome. `Finished` settles the
/// trick and is the terminal phase once the game is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    Ready,
    Drawing,
    Throwing,
    Thrown,
    Beating,
    Beaten,
    Finished,
}

impl TurnPhase {
    /// A phase in which some seat owes a decision.
    #[must_use]
    pub fn awaits_decision(self) -> bool {
        matches!(self, TurnPhase::Ready | TurnPhase::Thrown | TurnPhase::Beaten)
    }
}

impl fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
