//! Error types.
//!
//! Illegal moves are not errors: they come back as
//! [`MoveOutcome::Rejected`](crate::engine::MoveOutcome::Rejected).
//! These enums cover faults that make a game impossible to run.

use crate::cards::Card;

/// Invalid game configuration, detected before any trick is played.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Player count must be between {min} and {max}, got {got}")]
    PlayerCount { got: usize, min: usize, max: usize },

    #[error("Team play needs exactly 4 players, got {0}")]
    TeamPlayerCount(usize),

    #[error("Invalid lowest rank value {0}")]
    LowestRank(u8),

    #[error("Deck of {deck} cards cannot serve {players} players")]
    DeckTooSmall { deck: usize, players: usize },

    #[error("Card {0} appears twice in the deck")]
    DuplicateCard(Card),

    #[error("Card {0} is below the lowest rank in play")]
    RankOutOfPlay(Card),

    #[error("Expected {expected} seat names, got {got}")]
    SeatNames { expected: usize, got: usize },
}

/// Fault in the turn engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Seat rotation found no live seat within `player_count` steps.
    #[error("No live seat reachable from seat {from} among {player_count} players")]
    NoLiveSeat { from: u8, player_count: usize },
}
