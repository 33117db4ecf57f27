//! Hand valuation.
//!
//! A single integer score for a hand, higher is better. Terms:
//! - card strength, relative to the middle rank in play
//! - a flat bonus per trump
//! - a small bonus for pairs and triples
//! - a penalty for lopsided non-trump suits
//! - a penalty for holding a large share of the cards still in play
//!
//! Values are truncated to integers term by term; the decision thresholds
//! in `heuristic` are tuned to that.

use crate::cards::{Card, Rank, Suit};

/// Scale from relative rank to score.
pub const RANK_MULTIPLIER: i32 = 100;

/// Bonus per trump, on top of its rank value.
pub const TRUMP_BONUS: i32 = 13 * RANK_MULTIPLIER;

pub const UNBALANCED_HAND_PENALTY: i32 = 200;

pub const MANY_CARDS_PENALTY: i32 = 600;

/// Value of an empty hand once the deck is gone.
pub const OUT_OF_PLAY_VALUE: i32 = 30_000;

/// Share of the cards in play a hand can hold without penalty.
const FAIR_SHARE: f64 = 0.25;

/// Same-rank bonus by count held.
const SAME_RANK_BONUS: [f64; 5] = [0.0, 0.0, 0.5, 0.75, 1.25];

/// Bonus for shedding a card whose rank the hand holds several of.
const DISCARD_BONUS: [f64; 5] = [0.0, 0.0, 1.0, 1.5, 2.5];

/// Game facts a valuation depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValuationContext {
    pub trump: Suit,
    pub lowest_rank: Rank,
    pub cards_remaining: usize,
    /// Sum of every seat's hand size, the evaluating seat included.
    pub cards_in_hands: usize,
}

/// Card strength centred on the middle of the ranks in play.
///
/// The Ace scores half the number of ranks in play; each rank below it
/// one less.
#[must_use]
pub fn relative_card_value(rank: Rank, lowest_rank: Rank) -> f64 {
    let ranks_in_play = f64::from(15 - lowest_rank.value());
    let max_value = ranks_in_play / 2.0;
    f64::from(rank.value()) + max_value - 14.0
}

/// Score a hypothetical hand.
#[must_use]
pub fn hand_value(hand: &[Card], ctx: &ValuationContext) -> i32 {
    if ctx.cards_remaining == 0 && hand.is_empty() {
        return OUT_OF_PLAY_VALUE;
    }

    let mut res = 0i32;
    let mut by_rank = [0usize; Rank::ALL.len()];
    let mut by_suit = [0usize; Suit::ALL.len()];

    for card in hand {
        let value = relative_card_value(card.rank, ctx.lowest_rank);
        res += (value * f64::from(RANK_MULTIPLIER)) as i32;
        if card.suit == ctx.trump {
            res += TRUMP_BONUS;
        }
        by_rank[card.rank.index()] += 1;
        by_suit[card.suit.index()] += 1;
    }

    for rank in Rank::ALL {
        let count = by_rank[rank.index()];
        if count > 1 {
            let value = relative_card_value(rank, ctx.lowest_rank).max(1.0);
            res += (value * SAME_RANK_BONUS[count.min(4)]) as i32;
        }
    }

    let non_trump = hand.iter().filter(|c| c.suit != ctx.trump).count();
    let average = non_trump as f64 / 3.0;
    if average > 0.0 {
        for suit in Suit::ALL.into_iter().filter(|&s| s != ctx.trump) {
            let deviation = (by_suit[suit.index()] as f64 - average).abs() / average;
            res -= (f64::from(UNBALANCED_HAND_PENALTY) * deviation) as i32;
        }
    }

    let cards_in_play = ctx.cards_remaining as i32 + ctx.cards_in_hands as i32 - hand.len() as i32;
    // Integer share, so only a hand outnumbering the rest is penalized.
    let ratio = if cards_in_play == 0 {
        10.0
    } else {
        f64::from(hand.len() as i32 / cards_in_play)
    };
    res += ((FAIR_SHARE - ratio) * f64::from(MANY_CARDS_PENALTY)) as i32;

    res
}

/// Extra score for getting rid of a card of `rank` when the hand holds
/// `same_rank` of them. Negative for low ranks.
#[must_use]
pub fn discard_bonus(rank: Rank, same_rank: usize) -> i32 {
    let weight = DISCARD_BONUS[same_rank.min(4)];
    (weight * (f64::from(rank.value()) - 8.0) * f64::from(RANK_MULTIPLIER)).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(labels: &[&str]) -> Vec<Card> {
        labels.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn ctx(cards_remaining: usize, cards_in_hands: usize) -> ValuationContext {
        ValuationContext {
            trump: Suit::Hearts,
            lowest_rank: Rank::Six,
            cards_remaining,
            cards_in_hands,
        }
    }

    #[test]
    fn test_relative_values() {
        assert_eq!(relative_card_value(Rank::Ace, Rank::Six), 4.5);
        assert_eq!(relative_card_value(Rank::Six, Rank::Six), -3.5);
        assert_eq!(relative_card_value(Rank::Ace, Rank::Two), 6.5);
        assert_eq!(relative_card_value(Rank::Nine, Rank::Nine), -2.0);
    }

    #[test]
    fn test_empty_hand_after_deck() {
        assert_eq!(hand_value(&[], &ctx(0, 6)), OUT_OF_PLAY_VALUE);
        // With cards left to draw an empty hand is just empty.
        assert_eq!(hand_value(&[], &ctx(10, 6)), 150);
    }

    #[test]
    fn test_single_trump() {
        // 6♥: -350 + 1300, no non-trumps, 1 / 11 = 0 share.
        let hand = cards(&["6H"]);
        assert_eq!(hand_value(&hand, &ctx(10, 2)), -350 + 1300 + 150);
    }

    #[test]
    fn test_balanced_pair() {
        // A♠ A♦ 6♣: 450 + 450 - 350, pair of aces 4.5 * 0.5, suits balanced.
        let hand = cards(&["AS", "AD", "6C"]);
        assert_eq!(hand_value(&hand, &ctx(20, 9)), 550 + 2 + 150);
    }

    #[test]
    fn test_unbalanced_suits() {
        // Two spades, nothing else: average 2/3, deviations 2, 1, 1.
        let hand = cards(&["AS", "KS"]);
        let expected = 450 + 350 - 400 - 200 - 200 + 150;
        assert_eq!(hand_value(&hand, &ctx(20, 8)), expected);
    }

    #[test]
    fn test_holding_most_cards_is_penalized() {
        let hand = cards(&["6H", "7H"]);
        // 2 held against 1 elsewhere: 2 / 1 = 2.
        let crowded = hand_value(&hand, &ctx(0, 3));
        let spread = hand_value(&hand, &ctx(20, 8));
        assert_eq!(spread - crowded, 1200);
    }

    #[test]
    fn test_trumps_outscore_plain_cards() {
        let context = ctx(12, 12);
        let plain = hand_value(&cards(&["AS", "KD", "QC"]), &context);
        let trumps = hand_value(&cards(&["6H", "7H", "8H"]), &context);
        assert!(trumps > plain);
    }

    #[test]
    fn test_discard_bonus() {
        assert_eq!(discard_bonus(Rank::Ace, 1), 0);
        assert_eq!(discard_bonus(Rank::Ace, 2), 600);
        assert_eq!(discard_bonus(Rank::Six, 2), -200);
        assert_eq!(discard_bonus(Rank::Ten, 4), 500);
    }
}
