//! Card identity and the "beats" relation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Diamonds,
    Clubs,
    Hearts,
}

impl Suit {
    /// All suits in their fixed order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts];

    /// Position of the suit in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Hearts => '♥',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, Ace high.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks from lowest to highest.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value, 2 for Two up to 14 for Ace.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Position of the rank in [`Rank::ALL`] (Two is 0, Ace is 12).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize - 2
    }

    /// Parse a numeric value. Both 1 and 14 denote the Ace.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Rank> {
        match value {
            1 | 14 => Some(Rank::Ace),
            2..=13 => Some(Rank::ALL[value as usize - 2]),
            _ => None,
        }
    }

    /// Ranks from `self` up to the Ace, inclusive.
    pub fn up_to_ace(self) -> impl Iterator<Item = Rank> {
        Rank::ALL[self.index()..].iter().copied()
    }

    const fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card. Immutable value type, equal by (suit, rank).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Whether this card beats `attacked`.
    ///
    /// - same suit, strictly higher rank: beats
    /// - trump over non-trump: beats
    /// - anything else, including a different non-trump suit: does not
    ///
    /// With `deuce_beats_ace`, the trump of `lowest_rank` also beats the
    /// trump Ace.
    ///
    /// ```
    /// use fool_engine::cards::{Card, Rank, Suit};
    ///
    /// let six = Card::new(Suit::Hearts, Rank::Six);
    /// let ace = Card::new(Suit::Hearts, Rank::Ace);
    /// assert!(!six.beats(ace, Suit::Hearts, false, Rank::Six));
    /// assert!(six.beats(ace, Suit::Hearts, true, Rank::Six));
    /// ```
    #[must_use]
    pub fn beats(self, attacked: Card, trump: Suit, deuce_beats_ace: bool, lowest_rank: Rank) -> bool {
        if self.suit == attacked.suit {
            if deuce_beats_ace
                && self.suit == trump
                && self.rank == lowest_rank
                && attacked.rank == Rank::Ace
            {
                return true;
            }
            return self.rank > attacked.rank;
        }
        self.suit == trump
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Failure to parse a card from text such as `"10H"` or `"QS"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Cannot parse card from {0:?}")]
pub struct ParseCardError(pub String);

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCardError(s.to_string());
        let s_trim = s.trim();
        let mut chars = s_trim.chars();
        let suit_char = chars.next_back().ok_or_else(err)?;
        let rank_text = chars.as_str();

        let suit = match suit_char.to_ascii_uppercase() {
            'S' | '♠' => Suit::Spades,
            'D' | '♦' => Suit::Diamonds,
            'C' | '♣' => Suit::Clubs,
            'H' | '♥' => Suit::Hearts,
            _ => return Err(err()),
        };
        let rank = match rank_text.to_ascii_uppercase().as_str() {
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            "T" => Rank::Ten,
            digits => digits
                .parse::<u8>()
                .ok()
                .filter(|v| (2..=10).contains(v))
                .and_then(Rank::from_value)
                .ok_or_else(err)?,
        };

        Ok(Card::new(suit, rank))
    }
}
