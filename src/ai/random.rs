//! Uniformly random legal play.

use super::{Snapshot, Strategy};
use crate::cards::Card;
use crate::core::GameRng;
use crate::engine::{Decision, Move};

/// Picks any legal move with equal probability.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Strategy for RandomStrategy {
    fn decide(&mut self, _decision: Decision, snapshot: &Snapshot<'_>, _hand: &[Card]) -> Move {
        self.rng
            .choose(&snapshot.legal_moves)
            .copied()
            .unwrap_or_else(Move::done)
    }
}
