//! Attack and defense slots.
//!
//! The table holds two rows of `DEAL_LIMIT` slots. Attack cards fill the
//! top row left to right; each defense card covers the attack card in the
//! same column. Invariants:
//! - both rows fill contiguously from index 0
//! - a defense slot is occupied only if its attack slot is

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::core::DEAL_LIMIT;

/// One table position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    #[default]
    Empty,
    Occupied(Card),
}

impl Slot {
    #[must_use]
    pub fn card(self) -> Option<Card> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(card) => Some(card),
        }
    }

    #[must_use]
    pub fn is_occupied(self) -> bool {
        matches!(self, Slot::Occupied(_))
    }
}

/// A fixed-capacity row of slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotRow {
    slots: [Slot; DEAL_LIMIT],
}

impl SlotRow {
    /// Index of the first empty slot, or `None` when the row is full.
    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(|s| !s.is_occupied())
    }

    #[must_use]
    pub fn count_occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_occupied()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count_occupied() == 0
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.slots.get(index).and_then(|s| s.card())
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot; DEAL_LIMIT] {
        &self.slots
    }

    /// Occupied cards, left to right.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.slots.iter().filter_map(|s| s.card())
    }

    /// Put a card into the first empty slot. Returns its index.
    fn push(&mut self, card: Card) -> Option<usize> {
        let index = self.first_empty()?;
        self.slots[index] = Slot::Occupied(card);
        Some(index)
    }

    /// Occupied slots form a prefix.
    fn is_contiguous(&self) -> bool {
        let occupied = self.count_occupied();
        self.slots[..occupied].iter().all(|s| s.is_occupied())
    }
}

/// The cards in play for the current trick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Table {
    attack: SlotRow,
    defense: SlotRow,
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn attack(&self) -> &SlotRow {
        &self.attack
    }

    #[must_use]
    pub fn defense(&self) -> &SlotRow {
        &self.defense
    }

    #[must_use]
    pub fn attack_count(&self) -> usize {
        self.attack.count_occupied()
    }

    #[must_use]
    pub fn defense_count(&self) -> usize {
        self.defense.count_occupied()
    }

    /// Attack cards not yet covered.
    #[must_use]
    pub fn unbeaten_count(&self) -> usize {
        self.attack_count() - self.defense_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attack.is_empty()
    }

    /// Every occupied attack slot has a matching defense card.
    #[must_use]
    pub fn all_beaten(&self) -> bool {
        self.attack
            .slots()
            .iter()
            .zip(self.defense.slots())
            .all(|(a, d)| a.is_occupied() == d.is_occupied())
    }

    /// The leftmost attack card still waiting for a defense, with its column.
    #[must_use]
    pub fn open_attack(&self) -> Option<(usize, Card)> {
        let index = self.defense.first_empty()?;
        self.attack.get(index).map(|card| (index, card))
    }

    /// Empty attack slots remaining.
    #[must_use]
    pub fn open_slots(&self) -> usize {
        DEAL_LIMIT - self.attack_count()
    }

    /// Place an attack card. Returns the column, or `None` if the row is full.
    pub fn place_attack(&mut self, card: Card) -> Option<usize> {
        self.attack.push(card)
    }

    /// Cover the leftmost open attack card. Returns the column, or `None`
    /// if there is nothing to cover.
    pub fn place_defense(&mut self, card: Card) -> Option<usize> {
        let (index, _) = self.open_attack()?;
        self.defense.slots[index] = Slot::Occupied(card);
        Some(index)
    }

    /// Ranks of all cards on the table.
    #[must_use]
    pub fn ranks_present(&self) -> FxHashSet<Rank> {
        self.cards().map(|c| c.rank).collect()
    }

    /// Ranks of the attack cards only.
    #[must_use]
    pub fn attack_ranks(&self) -> FxHashSet<Rank> {
        self.attack.cards().map(|c| c.rank).collect()
    }

    /// All table cards, column by column, attack before defense.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        (0..DEAL_LIMIT).flat_map(move |i| self.attack.get(i).into_iter().chain(self.defense.get(i)))
    }

    /// Take every card off the table.
    pub fn clear(&mut self) -> Vec<Card> {
        let cards = self.cards().collect();
        *self = Self::default();
        cards
    }

    /// Both slot invariants hold.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.attack.is_contiguous()
            && self.defense.is_contiguous()
            && (0..DEAL_LIMIT).all(|i| self.defense.get(i).is_none() || self.attack.get(i).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new();
        assert!(table.is_empty());
        assert!(table.all_beaten());
        assert_eq!(table.open_attack(), None);
        assert_eq!(table.open_slots(), DEAL_LIMIT);
        assert!(table.is_consistent());
    }

    #[test]
    fn test_attack_then_defense() {
        let mut table = Table::new();
        assert_eq!(table.place_attack(card("7S")), Some(0));
        assert_eq!(table.place_attack(card("7D")), Some(1));
        assert!(!table.all_beaten());
        assert_eq!(table.open_attack(), Some((0, card("7S"))));

        assert_eq!(table.place_defense(card("9S")), Some(0));
        assert_eq!(table.open_attack(), Some((1, card("7D"))));
        assert_eq!(table.unbeaten_count(), 1);

        assert_eq!(table.place_defense(card("KD")), Some(1));
        assert!(table.all_beaten());
        assert!(table.is_consistent());
    }

    #[test]
    fn test_defense_needs_open_attack() {
        let mut table = Table::new();
        assert_eq!(table.place_defense(card("9S")), None);
        assert!(table.defense().is_empty());

        table.place_attack(card("7S"));
        table.place_defense(card("9S"));
        assert_eq!(table.place_defense(card("AS")), None);
        assert_eq!(table.defense_count(), 1);
    }

    #[test]
    fn test_attack_row_capacity() {
        let mut table = Table::new();
        for (i, label) in ["6S", "6D", "6C", "6H", "7S", "7D"].iter().enumerate() {
            assert_eq!(table.place_attack(card(label)), Some(i));
        }
        assert_eq!(table.place_attack(card("7C")), None);
        assert_eq!(table.open_slots(), 0);
    }

    #[test]
    fn test_ranks_present() {
        let mut table = Table::new();
        table.place_attack(card("7S"));
        table.place_defense(card("QS"));
        let ranks = table.ranks_present();
        assert!(ranks.contains(&Rank::Seven));
        assert!(ranks.contains(&Rank::Queen));
        assert_eq!(table.attack_ranks().len(), 1);
    }

    #[test]
    fn test_clear_returns_all_cards() {
        let mut table = Table::new();
        table.place_attack(card("7S"));
        table.place_attack(card("7D"));
        table.place_defense(card("QS"));

        let cards = table.clear();
        assert_eq!(cards, vec![card("7S"), card("QS"), card("7D")]);
        assert!(table.is_empty());
        assert!(table.defense().is_empty());
    }
}
