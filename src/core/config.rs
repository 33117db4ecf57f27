//! Rule configuration for one game.
//!
//! A `RuleSet` is produced once from external settings and never changes
//! for the lifetime of the game. It fixes:
//! - seat count and team pairing
//! - the lowest rank dealt (and so the deck size)
//! - whether passing ("perevod") is legal
//! - whether the lowest trump beats the trump Ace
//! - whether the first trick's discard cap is lowered

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::PlayerId;
use crate::cards::{Card, Rank, Suit};

/// Hand-size target and number of attack/defense slots per trick.
pub const DEAL_LIMIT: usize = 6;

/// Smallest supported seat count.
pub const MIN_PLAYERS: usize = 2;

/// Largest supported seat count.
pub const MAX_PLAYERS: usize = 5;

/// Whether dealing `deck` cards in seat order, `DEAL_LIMIT` at a time,
/// leaves every one of `players` seats with at least one card.
#[must_use]
pub fn deck_serves(deck: usize, players: usize) -> bool {
    deck > DEAL_LIMIT * players.saturating_sub(1)
}

/// Frozen rules for a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Number of seats.
    pub player_count: usize,

    /// Seats {0, 2} play against {1, 3}.
    pub team_play: bool,

    /// Lowest rank in the deck.
    pub lowest_rank: Rank,

    /// Defender may redirect the attack with a card of the same rank.
    pub allow_pass: bool,

    /// The trump of `lowest_rank` beats the trump Ace.
    pub deuce_beats_ace: bool,

    /// Discard cap is one lower until the first trick is discarded.
    pub lowered_first_discard_limit: bool,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            player_count: 2,
            team_play: false,
            lowest_rank: Rank::Six,
            allow_pass: false,
            deuce_beats_ace: false,
            lowered_first_discard_limit: false,
        }
    }
}

impl RuleSet {
    /// Start building from raw settings values.
    #[must_use]
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    #[must_use]
    pub fn with_team_play(mut self, team_play: bool) -> Self {
        self.team_play = team_play;
        self
    }

    #[must_use]
    pub fn with_lowest_rank(mut self, rank: Rank) -> Self {
        self.lowest_rank = rank;
        self
    }

    #[must_use]
    pub fn with_allow_pass(mut self, allow: bool) -> Self {
        self.allow_pass = allow;
        self
    }

    #[must_use]
    pub fn with_deuce_beats_ace(mut self, enabled: bool) -> Self {
        self.deuce_beats_ace = enabled;
        self
    }

    #[must_use]
    pub fn with_lowered_first_discard_limit(mut self, enabled: bool) -> Self {
        self.lowered_first_discard_limit = enabled;
        self
    }

    /// Check the rules describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount {
                got: self.player_count,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        if self.team_play && self.player_count != 4 {
            return Err(ConfigError::TeamPlayerCount(self.player_count));
        }
        if !deck_serves(self.deck_size(), self.player_count) {
            return Err(ConfigError::DeckTooSmall {
                deck: self.deck_size(),
                players: self.player_count,
            });
        }
        Ok(())
    }

    /// Number of ranks from `lowest_rank` up to the Ace.
    #[must_use]
    pub fn ranks_in_play(&self) -> usize {
        Rank::Ace.index() - self.lowest_rank.index() + 1
    }

    /// Number of cards in a full deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        Suit::ALL.len() * self.ranks_in_play()
    }

    /// Most attack cards allowed in one trick.
    #[must_use]
    pub fn discard_cap(&self, discard_pile_empty: bool) -> usize {
        if self.lowered_first_discard_limit && discard_pile_empty {
            DEAL_LIMIT - 1
        } else {
            DEAL_LIMIT
        }
    }

    /// Team partner of a seat, if playing in teams.
    #[must_use]
    pub fn partner_of(&self, seat: PlayerId) -> Option<PlayerId> {
        self.team_play.then(|| seat.offset(2, self.player_count))
    }

    /// [`Card::beats`] under these rules.
    #[must_use]
    pub fn beats(&self, candidate: Card, attacked: Card, trump: Suit) -> bool {
        candidate.beats(attacked, trump, self.deuce_beats_ace, self.lowest_rank)
    }
}

/// Builder taking settings as an external preference store holds them.
#[derive(Clone, Debug)]
pub struct RuleSetBuilder {
    player_count: usize,
    team_play: bool,
    lowest_rank_value: u8,
    allow_pass: bool,
    deuce_beats_ace: bool,
    lowered_first_discard_limit: bool,
}

impl Default for RuleSetBuilder {
    fn default() -> Self {
        let rules = RuleSet::default();
        Self {
            player_count: rules.player_count,
            team_play: rules.team_play,
            lowest_rank_value: rules.lowest_rank.value(),
            allow_pass: rules.allow_pass,
            deuce_beats_ace: rules.deuce_beats_ace,
            lowered_first_discard_limit: rules.lowered_first_discard_limit,
        }
    }
}

impl RuleSetBuilder {
    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    pub fn team_play(mut self, team_play: bool) -> Self {
        self.team_play = team_play;
        self
    }

    /// Lowest rank as a number: 2..=13, with 1 or 14 for the Ace.
    pub fn lowest_rank_value(mut self, value: u8) -> Self {
        self.lowest_rank_value = value;
        self
    }

    pub fn allow_pass(mut self, allow: bool) -> Self {
        self.allow_pass = allow;
        self
    }

    pub fn deuce_beats_ace(mut self, enabled: bool) -> Self {
        self.deuce_beats_ace = enabled;
        self
    }

    pub fn lowered_first_discard_limit(mut self, enabled: bool) -> Self {
        self.lowered_first_discard_limit = enabled;
        self
    }

    /// Validate and freeze.
    pub fn build(self) -> Result<RuleSet, ConfigError> {
        let lowest_rank = Rank::from_value(self.lowest_rank_value)
            .ok_or(ConfigError::LowestRank(self.lowest_rank_value))?;
        let rules = RuleSet {
            player_count: self.player_count,
            team_play: self.team_play,
            lowest_rank,
            allow_pass: self.allow_pass,
            deuce_beats_ace: self.deuce_beats_ace,
            lowered_first_discard_limit: self.lowered_first_discard_limit,
        };
        rules.validate()?;
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = RuleSet::default();
        assert_eq!(rules.player_count, 2);
        assert_eq!(rules.lowest_rank, Rank::Six);
        assert_eq!(rules.ranks_in_play(), 9);
        assert_eq!(rules.deck_size(), 36);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_deck_size_by_lowest_rank() {
        assert_eq!(RuleSet::default().with_lowest_rank(Rank::Two).deck_size(), 52);
        assert_eq!(RuleSet::default().with_lowest_rank(Rank::Nine).deck_size(), 24);
        assert_eq!(RuleSet::default().with_lowest_rank(Rank::Ace).deck_size(), 4);
    }

    #[test]
    fn test_builder_pattern() {
        let rules = RuleSet::builder()
            .player_count(4)
            .team_play(true)
            .lowest_rank_value(2)
            .allow_pass(true)
            .build()
            .unwrap();

        assert_eq!(rules.player_count, 4);
        assert!(rules.team_play);
        assert_eq!(rules.lowest_rank, Rank::Two);
        assert!(rules.allow_pass);
        assert!(!rules.deuce_beats_ace);
    }

    #[test]
    fn test_invalid_lowest_rank() {
        let err = RuleSet::builder().lowest_rank_value(0).build().unwrap_err();
        assert_eq!(err, ConfigError::LowestRank(0));
        assert!(RuleSet::builder().lowest_rank_value(20).build().is_err());
    }

    #[test]
    fn test_invalid_player_counts() {
        assert!(matches!(
            RuleSet::default().with_player_count(1).validate(),
            Err(ConfigError::PlayerCount { got: 1, .. })
        ));
        assert!(RuleSet::default().with_player_count(6).validate().is_err());
        assert_eq!(
            RuleSet::default().with_player_count(3).with_team_play(true).validate(),
            Err(ConfigError::TeamPlayerCount(3))
        );
    }

    #[test]
    fn test_deck_too_small() {
        let rules = RuleSet::default()
            .with_player_count(5)
            .with_lowest_rank(Rank::Ace);
        assert_eq!(
            rules.validate(),
            Err(ConfigError::DeckTooSmall { deck: 4, players: 5 })
        );
    }

    #[test]
    fn test_deck_must_reach_last_seat() {
        assert!(deck_serves(7, 2));
        assert!(!deck_serves(6, 2));
        assert!(RuleSet::default()
            .with_player_count(5)
            .with_lowest_rank(Rank::Queen)
            .validate()
            .is_err());
    }

    #[test]
    fn test_discard_cap() {
        let plain = RuleSet::default();
        assert_eq!(plain.discard_cap(true), DEAL_LIMIT);
        assert_eq!(plain.discard_cap(false), DEAL_LIMIT);

        let lowered = plain.with_lowered_first_discard_limit(true);
        assert_eq!(lowered.discard_cap(true), DEAL_LIMIT - 1);
        assert_eq!(lowered.discard_cap(false), DEAL_LIMIT);
    }

    #[test]
    fn test_partner_of() {
        let teams = RuleSet::default().with_player_count(4).with_team_play(true);
        assert_eq!(teams.partner_of(PlayerId::new(0)), Some(PlayerId::new(2)));
        assert_eq!(teams.partner_of(PlayerId::new(3)), Some(PlayerId::new(1)));
        assert_eq!(RuleSet::default().partner_of(PlayerId::new(0)), None);
    }

    #[test]
    fn test_serialization() {
        let rules = RuleSet::default().with_allow_pass(true).with_player_count(3);
        let json = serde_json::to_string(&rules).unwrap();
        let deserialized: RuleSet = serde_json::from_str(&json).unwrap();
        assert_eq!(rules, deserialized);
    }
}
