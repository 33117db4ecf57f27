//! Decision strategies for computer-controlled seats.
//!
//! A [`Strategy`] sees a [`Snapshot`] (public information plus its own
//! hand) and returns one [`Move`]. The coordinator validates and applies
//! it; strategies never touch game state.
//!
//! - `Heuristic`: hand-valuation player
//! - `RandomStrategy`: uniform choice among legal moves

pub mod heuristic;
pub mod random;
pub mod valuation;

pub use heuristic::Heuristic;
pub use random::RandomStrategy;
pub use valuation::{discard_bonus, hand_value, relative_card_value, ValuationContext};

use crate::cards::{Card, Suit};
use crate::core::{PlayerId, PlayerMap, RuleSet};
use crate::engine::{Decision, Move};
use crate::table::Table;

/// Everything a seat may know when deciding.
#[derive(Clone, Debug)]
pub struct Snapshot<'a> {
    pub player: PlayerId,
    pub rules: &'a RuleSet,
    pub trump_suit: Suit,
    pub table: &'a Table,
    /// Cards left in the draw pile.
    pub cards_remaining: usize,
    pub hand_sizes: PlayerMap<usize>,
    /// Hand size of the seat a pass would redirect the attack to.
    pub next_defender_hand_size: usize,
    pub legal_moves: Vec<Move>,
}

/// A seat controller.
pub trait Strategy: Send {
    /// Pick a move for `decision`, given the seat's own `hand`.
    fn decide(&mut self, decision: Decision, snapshot: &Snapshot<'_>, hand: &[Card]) -> Move;
}
