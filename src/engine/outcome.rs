//! What the coordinator reports back.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::phase::TurnPhase;
use crate::cards::Card;
use crate::core::PlayerId;

/// Phases traversed by one accepted move, in order.
pub type PhasePath = SmallVec<[TurnPhase; 6]>;

/// Broadcast for every accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notification {
    CardThrown { player: PlayerId, card: Card },
    CardBeaten { player: PlayerId, card: Card },
    CardPassed { player: PlayerId, card: Card },
    Done { player: PlayerId },
    Take { player: PlayerId },
}

impl Notification {
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match *self {
            Notification::CardThrown { player, .. }
            | Notification::CardBeaten { player, .. }
            | Notification::CardPassed { player, .. }
            | Notification::Done { player }
            | Notification::Take { player } => player,
        }
    }

    #[must_use]
    pub fn card(&self) -> Option<Card> {
        match *self {
            Notification::CardThrown { card, .. }
            | Notification::CardBeaten { card, .. }
            | Notification::CardPassed { card, .. } => Some(card),
            Notification::Done { .. } | Notification::Take { .. } => None,
        }
    }
}

/// Why a move was refused. A refused move changes nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum Rejection {
    #[error("the game is over")]
    GameOver,
    #[error("move not allowed while {0}")]
    WrongPhase(TurnPhase),
    #[error("waiting for {expected}")]
    NotYourTurn { expected: PlayerId },
    #[error("move needs a card")]
    MissingCard,
    #[error("{0} is not in hand")]
    CardNotInHand(Card),
    #[error("rank of {0} is not on the table")]
    RankNotOnTable(Card),
    #[error("{0} does not beat the open attack")]
    CannotBeat(Card),
    #[error("{0} cannot be passed")]
    PassNotAllowed(Card),
    #[error("no more cards may be thrown this trick")]
    ThrowLimitReached,
    #[error("defender cannot cover another card")]
    DefenderCannotCover,
    #[error("defender is already taking")]
    AlreadyTaking,
}

/// How a finished trick was cleared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Seat that picked the table up, if any.
    pub taker: Option<PlayerId>,
    /// Cards that left the table.
    pub cards: Vec<Card>,
    /// Seats that went out during this settlement.
    pub eliminated: Vec<PlayerId>,
    /// Seat leading the next trick; `None` once the game is over.
    pub next_attacker: Option<PlayerId>,
    pub game_over: bool,
}

/// An accepted move and everything it set in motion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accepted {
    pub notification: Notification,
    pub phases: PhasePath,
    pub settlement: Option<Settlement>,
}

/// Result of submitting a move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Accepted(Accepted),
    Rejected(Rejection),
}

impl MoveOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted(_))
    }

    #[must_use]
    pub fn accepted(&self) -> Option<&Accepted> {
        match self {
            MoveOutcome::Accepted(accepted) => Some(accepted),
            MoveOutcome::Rejected(_) => None,
        }
    }

    #[must_use]
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveOutcome::Accepted(_) => None,
            MoveOutcome::Rejected(rejection) => Some(*rejection),
        }
    }

    /// Settlement carried by an accepted move that finished a trick.
    #[must_use]
    pub fn settlement(&self) -> Option<&Settlement> {
        self.accepted().and_then(|a| a.settlement.as_ref())
    }
}

/// How a finished game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The last seat holding cards.
    Fool(PlayerId),
    /// Everyone went out in the same settlement.
    Draw,
    /// Team play: the team that failed to get rid of its cards.
    LosingTeam([PlayerId; 2]),
    /// Team play: both teams went out together.
    TeamDraw,
}

impl GameResult {
    /// Check if a seat lost.
    #[must_use]
    pub fn is_loser(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Fool(p) => *p == player,
            GameResult::LosingTeam(team) => team.contains(&player),
            GameResult::Draw | GameResult::TeamDraw => false,
        }
    }
}

/// Where a card currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardLocation {
    Deck,
    Hand(PlayerId),
    Attack(usize),
    Defense(usize),
    Discard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_loser() {
        let result = GameResult::Fool(PlayerId::new(1));
        assert!(!result.is_loser(PlayerId::new(0)));
        assert!(result.is_loser(PlayerId::new(1)));

        assert!(!GameResult::Draw.is_loser(PlayerId::new(0)));

        let team = GameResult::LosingTeam([PlayerId::new(1), PlayerId::new(3)]);
        assert!(team.is_loser(PlayerId::new(3)));
        assert!(!team.is_loser(PlayerId::new(2)));
    }

    #[test]
    fn test_notification_accessors() {
        let card: Card = "QS".parse().unwrap();
        let thrown = Notification::CardThrown {
            player: PlayerId::new(2),
            card,
        };
        assert_eq!(thrown.player(), PlayerId::new(2));
        assert_eq!(thrown.card(), Some(card));
        assert_eq!(Notification::Take { player: PlayerId::new(0) }.card(), None);
    }

    #[test]
    fn test_rejection_message() {
        let card: Card = "QS".parse().unwrap();
        assert_eq!(Rejection::CardNotInHand(card).to_string(), "Q♠ is not in hand");
        assert_eq!(
            Rejection::NotYourTurn { expected: PlayerId::new(1) }.to_string(),
            "waiting for Seat 1"
        );
    }
}
