//! Hand-valuation player.
//!
//! Every option is scored as the value of the hand it would leave behind
//! (see [`hand_value`]); the heuristic then compares that against the
//! current hand with fixed thresholds. Ties go to the earliest card in hand
//! order.

use tracing::trace;

use super::valuation::{discard_bonus, hand_value, ValuationContext};
use super::{Snapshot, Strategy};
use crate::cards::{Card, Rank};
use crate::engine::{legality, Decision, Move};

/// Bonus for beating with a rank already on the table.
const RANK_ON_TABLE_BONUS: i32 = 300;

/// How much worse than the current hand a pass may leave it.
const PASS_PENALTY: i32 = 400;

/// Throw in while the loss is below `THROW_BASE - THROW_PER_CARD * deck`.
const THROW_BASE: i32 = 1200;
const THROW_PER_CARD: i32 = 50;

/// Beat when the loss is below this.
const BEAT_LOSS: i32 = 800;

/// Beat when taking would cost more than `TAKE_BASE - TAKE_PER_CARD * deck`.
const TAKE_BASE: i32 = 2000;
const TAKE_PER_CARD: i32 = 40;

/// Stateless heuristic strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct Heuristic;

impl Heuristic {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Lead a trick: shed the card whose loss hurts least, favouring
    /// ranks held in multiples.
    #[must_use]
    pub fn open(&self, snapshot: &Snapshot<'_>, hand: &[Card]) -> Move {
        let ctx = context(snapshot);
        match best_discard(hand, &ctx, |_| true) {
            Some((card, score)) => {
                trace!(player = %snapshot.player, %card, score, "Opening");
                Move::throw(card)
            }
            None => Move::done(),
        }
    }

    /// Add a card of a rank on the table if it costs little, otherwise done.
    ///
    /// The tolerated loss shrinks as the deck empties.
    #[must_use]
    pub fn throw_or_done(&self, snapshot: &Snapshot<'_>, hand: &[Card]) -> Move {
        let ctx = context(snapshot);
        let ranks = snapshot.table.ranks_present();
        let current = hand_value(hand, &ctx);
        let threshold = THROW_BASE - THROW_PER_CARD * snapshot.cards_remaining as i32;

        match best_discard(hand, &ctx, |card| ranks.contains(&card.rank)) {
            Some((card, best)) if current - best < threshold => {
                trace!(player = %snapshot.player, %card, current, best, threshold, "Throwing in");
                Move::throw(card)
            }
            _ => Move::done(),
        }
    }

    /// Answer the leftmost open attack card: pass, beat or take.
    #[must_use]
    pub fn defend(&self, snapshot: &Snapshot<'_>, hand: &[Card]) -> Move {
        let Some((_, attack)) = snapshot.table.open_attack() else {
            return Move::take();
        };
        let ctx = context(snapshot);
        let rules = snapshot.rules;
        let trump = snapshot.trump_suit;
        let ranks = snapshot.table.ranks_present();
        let current = hand_value(hand, &ctx);

        let can_pass = hand.iter().any(|&card| {
            legality::card_can_be_passed(
                hand,
                card,
                snapshot.table,
                snapshot.next_defender_hand_size,
                rules,
            )
        });
        if can_pass {
            if let Some(card) = pass_card(hand, attack.rank, current, &ctx) {
                trace!(player = %snapshot.player, %card, current, "Passing");
                return Move::pass(card);
            }
        }

        let mut best: Option<(Card, i32)> = None;
        for &card in hand.iter().filter(|&&c| rules.beats(c, attack, trump)) {
            let mut score = hand_value(&without(hand, card), &ctx);
            if ranks.contains(&card.rank) {
                score += RANK_ON_TABLE_BONUS;
            }
            if best.map_or(true, |(_, b)| score > b) {
                best = Some((card, score));
            }
        }

        if let Some((card, best)) = best {
            let remaining = snapshot.cards_remaining as i32;
            let mut if_take = hand.to_vec();
            if_take.extend(snapshot.table.cards());
            let take_value = hand_value(&if_take, &ctx);

            let cheap = current - best < BEAT_LOSS;
            let taking_worse = take_value - best < TAKE_BASE - TAKE_PER_CARD * remaining;
            if cheap || taking_worse || remaining == 0 {
                trace!(player = %snapshot.player, %card, current, best, take_value, "Beating");
                return Move::beat(card);
            }
        }
        trace!(player = %snapshot.player, current, "Taking");
        Move::take()
    }
}

impl Strategy for Heuristic {
    fn decide(&mut self, decision: Decision, snapshot: &Snapshot<'_>, hand: &[Card]) -> Move {
        match decision {
            Decision::Open => self.open(snapshot, hand),
            Decision::ThrowOrDone => self.throw_or_done(snapshot, hand),
            Decision::Defend => self.defend(snapshot, hand),
        }
    }
}

fn context(snapshot: &Snapshot<'_>) -> ValuationContext {
    ValuationContext {
        trump: snapshot.trump_suit,
        lowest_rank: snapshot.rules.lowest_rank,
        cards_remaining: snapshot.cards_remaining,
        cards_in_hands: snapshot.hand_sizes.values().sum(),
    }
}

fn without(hand: &[Card], card: Card) -> Vec<Card> {
    hand.iter().copied().filter(|&c| c != card).collect()
}

/// Highest-scoring card to shed among those `eligible`, first wins ties.
fn best_discard(
    hand: &[Card],
    ctx: &ValuationContext,
    eligible: impl Fn(Card) -> bool,
) -> Option<(Card, i32)> {
    let mut best: Option<(Card, i32)> = None;
    for &card in hand.iter().filter(|&&c| eligible(c)) {
        let same_rank = hand.iter().filter(|c| c.rank == card.rank).count();
        let score = hand_value(&without(hand, card), ctx) + discard_bonus(card.rank, same_rank);
        if best.map_or(true, |(_, b)| score > b) {
            best = Some((card, score));
        }
    }
    best
}

/// Card to pass with, if passing leaves a good enough hand.
///
/// The pass is judged by the better of shedding every card of the attack
/// rank or only the non-trump ones. A non-trump card is preferred.
fn pass_card(hand: &[Card], rank: Rank, current: i32, ctx: &ValuationContext) -> Option<Card> {
    let trump = ctx.trump;
    let if_pass: Vec<Card> = hand.iter().copied().filter(|c| c.rank != rank).collect();
    let if_pass_keep_trump: Vec<Card> = hand
        .iter()
        .copied()
        .filter(|c| c.rank != rank || c.suit == trump)
        .collect();
    let better = hand_value(&if_pass, ctx).max(hand_value(&if_pass_keep_trump, ctx));
    if better <= current - PASS_PENALTY {
        return None;
    }
    let same_rank = || hand.iter().copied().filter(|c| c.rank == rank);
    same_rank().find(|c| c.suit != trump).or_else(|| same_rank().next())
}
