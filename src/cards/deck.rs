//! The draw pile.
//!
//! Cards are stored bottom first: index 0 is the bottom card, whose suit is
//! the trump suit, and draws take from the end.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::{ConfigError, GameRng};

/// Shuffled draw pile with a fixed trump suit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
    trump_suit: Suit,
}

impl Deck {
    /// Every (suit, rank) from `lowest_rank` up, shuffled.
    #[must_use]
    pub fn shuffled(lowest_rank: Rank, rng: &mut GameRng) -> Self {
        let mut cards = Self::full_set(lowest_rank);
        rng.shuffle(&mut cards);
        let trump_suit = cards[0].suit;
        Self { cards, trump_suit }
    }

    /// A stacked deck, bottom card first.
    ///
    /// Used to set up known positions. Rejects duplicates, cards below
    /// `lowest_rank` and an empty list.
    pub fn from_cards(cards: Vec<Card>, lowest_rank: Rank) -> Result<Self, ConfigError> {
        let mut seen = rustc_hash::FxHashSet::default();
        for &card in &cards {
            if card.rank < lowest_rank {
                return Err(ConfigError::RankOutOfPlay(card));
            }
            if !seen.insert(card) {
                return Err(ConfigError::DuplicateCard(card));
            }
        }
        let trump_suit = cards
            .first()
            .map(|c| c.suit)
            .ok_or(ConfigError::DeckTooSmall { deck: 0, players: 1 })?;
        Ok(Self { cards, trump_suit })
    }

    /// All `4 × ranks` cards in suit-major order.
    #[must_use]
    pub fn full_set(lowest_rank: Rank) -> Vec<Card> {
        Suit::ALL
            .iter()
            .flat_map(|&suit| lowest_rank.up_to_ace().map(move |rank| Card::new(suit, rank)))
            .collect()
    }

    /// Suit of the bottom card, fixed at construction.
    #[must_use]
    pub fn trump_suit(&self) -> Suit {
        self.trump_suit
    }

    /// The face-up bottom card, while it has not been drawn.
    #[must_use]
    pub fn trump_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
