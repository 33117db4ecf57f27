//! Card locations owned by the turn engine besides the deck and hands.
//!
//! ## Key Types
//!
//! - `Table`: attack and defense `SlotRow`s for the current trick
//! - `Slot`: `Empty | Occupied(Card)`
//! - `DiscardPile`: retired cards with cosmetic `Jitter`

pub mod discard;
pub mod slots;

pub use discard::{DiscardPile, DiscardedCard, Jitter, JITTER_SPREAD};
pub use slots::{Slot, SlotRow, Table};
