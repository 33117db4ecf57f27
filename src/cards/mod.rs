//! Card model: identity, the beats relation, the draw pile and hands.
//!
//! ## Key Types
//!
//! - `Card`, `Suit`, `Rank`: immutable card identity
//! - `Deck`: shuffled draw pile whose bottom card fixes the trump suit
//! - `Hand`: a seat's cards, with display sorting

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{Card, ParseCardError, Rank, Suit};
pub use deck::Deck;
pub use hand::{Hand, SortingMode};
