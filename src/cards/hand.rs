//! A seat's hand and display sorting.

use serde::{Deserialize, Serialize};

use super::card::{Card, Suit};

/// Ordering applied to a hand for display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortingMode {
    #[default]
    Unsorted,
    SuitAscending,
    SuitDescending,
    RankAscending,
    RankDescending,
}

impl SortingMode {
    /// Decode a stored setting, falling back to `Unsorted`.
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match value {
            1 => SortingMode::SuitAscending,
            2 => SortingMode::SuitDescending,
            3 => SortingMode::RankAscending,
            4 => SortingMode::RankDescending,
            _ => SortingMode::Unsorted,
        }
    }
}

/// Cards held by one seat, in arrival order unless sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Remove one card. Returns false if it was not held.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&c| c == card) {
            Some(i) => {
                self.cards.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Sort for display. Trumps sort as the highest suit.
    pub fn sort(&mut self, mode: SortingMode, trump: Suit) {
        let suit_key = |c: &Card| (c.suit.index() + 3 - trump.index()) % 4;
        let rank_key = |c: &Card| c.rank.index();

        match mode {
            SortingMode::Unsorted => {}
            SortingMode::SuitAscending => self
                .cards
                .sort_by(|a, b| suit_key(a).cmp(&suit_key(b)).then(rank_key(a).cmp(&rank_key(b)))),
            SortingMode::SuitDescending => self
                .cards
                .sort_by(|a, b| suit_key(b).cmp(&suit_key(a)).then(rank_key(b).cmp(&rank_key(a)))),
            SortingMode::RankAscending => self
                .cards
                .sort_by(|a, b| rank_key(a).cmp(&rank_key(b)).then(suit_key(a).cmp(&suit_key(b)))),
            SortingMode::RankDescending => self
                .cards
                .sort_by(|a, b| rank_key(b).cmp(&rank_key(a)).then(suit_key(b).cmp(&suit_key(a)))),
        }
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(cards: &[&str]) -> Hand {
        Hand::from_cards(cards.iter().map(|s| s.parse().unwrap()).collect())
    }

    fn labels(hand: &Hand) -> Vec<String> {
        hand.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_add_remove() {
        let mut h = hand(&["6S", "7H"]);
        assert!(h.remove("6S".parse().unwrap()));
        assert!(!h.remove("6S".parse().unwrap()));
        h.add("AD".parse().unwrap());
        assert_eq!(h.len(), 2);
        assert!(h.contains("AD".parse().unwrap()));
    }

    #[test]
    fn test_sort_suit_ascending_puts_trumps_last() {
        let mut h = hand(&["AH", "6S", "7D", "6H", "KS"]);
        h.sort(SortingMode::SuitAscending, Suit::Hearts);
        assert_eq!(labels(&h), vec!["6♠", "K♠", "7♦", "6♥", "A♥"]);
    }

    #[test]
    fn test_sort_rank_descending() {
        let mut h = hand(&["6S", "AH", "AS", "9D"]);
        h.sort(SortingMode::RankDescending, Suit::Spades);
        assert_eq!(labels(&h), vec!["A♠", "A♥", "9♦", "6♠"]);
    }

    #[test]
    fn test_unsorted_keeps_order() {
        let mut h = hand(&["9D", "6S", "AH"]);
        h.sort(SortingMode::Unsorted, Suit::Spades);
        assert_eq!(labels(&h), vec!["9♦", "6♠", "A♥"]);
        assert_eq!(SortingMode::from_value(9), SortingMode::Unsorted);
        assert_eq!(SortingMode::from_value(3), SortingMode::RankAscending);
    }
}
