//! Card-level legality predicates.
//!
//! These look only at a hand, the table and the rules. Turn order, phase
//! and throw limits are enforced by the coordinator on top of them.

use crate::cards::{Card, Suit};
use crate::core::RuleSet;
use crate::table::Table;

/// The card may be added to the attack row: it is held, and either the
/// table is empty or its rank is already on the table.
#[must_use]
pub fn card_can_be_thrown(hand: &[Card], card: Card, table: &Table) -> bool {
    hand.contains(&card) && (table.is_empty() || table.ranks_present().contains(&card.rank))
}

/// The card is held and beats the leftmost uncovered attack card.
#[must_use]
pub fn card_can_be_beaten(hand: &[Card], card: Card, table: &Table, rules: &RuleSet, trump: Suit) -> bool {
    hand.contains(&card)
        && table
            .open_attack()
            .is_some_and(|(_, attacked)| rules.beats(card, attacked, trump))
}

/// The card may redirect the attack to the next defender.
///
/// Requires passing to be enabled, no defense yet, a single attack rank
/// matching the card, and fewer free attack slots than the next defender
/// holds cards.
#[must_use]
pub fn card_can_be_passed(
    hand: &[Card],
    card: Card,
    table: &Table,
    next_defender_hand_size: usize,
    rules: &RuleSet,
) -> bool {
    if !rules.allow_pass || !hand.contains(&card) {
        return false;
    }
    if table.is_empty() || !table.defense().is_empty() {
        return false;
    }
    let ranks = table.attack_ranks();
    ranks.len() == 1 && ranks.contains(&card.rank) && table.open_slots() < next_defender_hand_size
}
