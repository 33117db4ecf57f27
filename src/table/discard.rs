//! Discard pile.
//!
//! Game logic only ever asks whether the pile is empty. Each card carries a
//! small random offset so the presentation can draw an untidy stack.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::GameRng;

/// Maximum jitter in degrees and in table units.
pub const JITTER_SPREAD: f32 = 10.0;

/// Cosmetic placement offset of a discarded card.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Jitter {
    pub rotation: f32,
    pub dx: f32,
    pub dy: f32,
}

impl Jitter {
    fn random(rng: &mut GameRng) -> Self {
        let range = -JITTER_SPREAD..JITTER_SPREAD;
        Self {
            rotation: rng.gen_range_f32(range.clone()),
            dx: rng.gen_range_f32(range.clone()),
            dy: rng.gen_range_f32(range),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscardedCard {
    pub card: Card,
    pub jitter: Jitter,
}

/// Append-only pile of retired cards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscardPile {
    entries: Vec<DiscardedCard>,
}

impl DiscardPile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Retire cards, tagging each with fresh jitter.
    pub fn discard(&mut self, cards: impl IntoIterator<Item = Card>, rng: &mut GameRng) {
        self.entries.extend(cards.into_iter().map(|card| DiscardedCard {
            card,
            jitter: Jitter::random(rng),
        }));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[DiscardedCard] {
        &self.entries
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.entries.iter().map(|e| e.card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discard_appends_with_bounded_jitter() {
        let mut rng = GameRng::new(1);
        let mut pile = DiscardPile::new();
        assert!(pile.is_empty());

        let cards: Vec<Card> = ["6S", "9S", "6H"].iter().map(|s| s.parse().unwrap()).collect();
        pile.discard(cards.clone(), &mut rng);

        assert_eq!(pile.len(), 3);
        assert_eq!(pile.cards().collect::<Vec<_>>(), cards);
        for entry in pile.entries() {
            for v in [entry.jitter.rotation, entry.jitter.dx, entry.jitter.dy] {
                assert!(v.abs() <= JITTER_SPREAD);
            }
        }
    }
}
