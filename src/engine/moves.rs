//! Moves a seat can make and the decisions that prompt them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;
use crate::core::PlayerId;

/// The five move kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Add a card to the attack row.
    Throw,
    /// Cover the leftmost open attack card.
    Beat,
    /// Redirect the attack with a card of the same rank.
    Pass,
    /// Decline to throw more.
    Done,
    /// Give up defending and pick up the table.
    Take,
}

impl MoveKind {
    /// Kinds that carry a card.
    #[must_use]
    pub fn needs_card(self) -> bool {
        matches!(self, MoveKind::Throw | MoveKind::Beat | MoveKind::Pass)
    }
}

/// A move as submitted to the coordinator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub kind: MoveKind,
    pub card: Option<Card>,
}

impl Move {
    #[must_use]
    pub const fn throw(card: Card) -> Self {
        Self {
            kind: MoveKind::Throw,
            card: Some(card),
        }
    }

    #[must_use]
    pub const fn beat(card: Card) -> Self {
        Self {
            kind: MoveKind::Beat,
            card: Some(card),
        }
    }

    #[must_use]
    pub const fn pass(card: Card) -> Self {
        Self {
            kind: MoveKind::Pass,
            card: Some(card),
        }
    }

    #[must_use]
    pub const fn done() -> Self {
        Self {
            kind: MoveKind::Done,
            card: None,
        }
    }

    #[must_use]
    pub const fn take() -> Self {
        Self {
            kind: MoveKind::Take,
            card: None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.card {
            Some(card) => write!(f, "{:?} {}", self.kind, card),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

/// What the seat to act must decide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Lead a new trick with any card.
    Open,
    /// Add a matching card or say done.
    ThrowOrDone,
    /// Beat, pass or take.
    Defend,
}

/// The seat the coordinator is waiting on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingDecision {
    pub player: PlayerId,
    pub decision: Decision,
}
