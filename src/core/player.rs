//! Seat identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. Seats are numbered clockwise from 0, which
//! is also the rotation order used for attacks and redealing.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access. Used for seats,
//! out-of-play flags, finishing places and done statuses.
//!
//! ## Player
//!
//! A seat's name and hand. The hand changes only through its owner's moves
//! and through trick settlement.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::Hand;

/// Default seat names, clockwise from the local player.
pub const SEAT_NAMES: [&str; 5] = ["South", "West", "North", "East", "Center"];

/// Seat identifier.
///
/// Seat indices are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat `steps` places clockwise, wrapping at `player_count`.
    ///
    /// ```
    /// use fool_engine::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(3).offset(1, 4), PlayerId::new(0));
    /// assert_eq!(PlayerId::new(1).offset(2, 4), PlayerId::new(3));
    /// ```
    #[must_use]
    pub fn offset(self, steps: usize, player_count: usize) -> Self {
        Self(((self.index() + steps) % player_count) as u8)
    }

    /// Iterate over all seat IDs for a game with `player_count` seats.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// Iterate over all seats starting from `self`, in rotation order.
    pub fn rotation(self, player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count).map(move |step| self.offset(step, player_count))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub hand: Hand,
}

impl Player {
    /// An empty-handed player with the given name.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Hand::new(),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use fool_engine::core::{PlayerId, PlayerMap};
///
/// let mut out_of_play: PlayerMap<bool> = PlayerMap::with_value(4, false);
/// out_of_play[PlayerId::new(2)] = true;
///
/// assert_eq!(out_of_play.count_where(|&out| out), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Build from one value per seat, in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        Self { data }
    }

    /// Get the number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Count the seats whose value satisfies `predicate`.
    pub fn count_where(&self, predicate: impl Fn(&T) -> bool) -> usize {
        self.data.iter().filter(|v| predicate(v)).count()
    }

    /// Project every seat's value through `f`.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> PlayerMap<U> {
        PlayerMap {
            data: self.data.iter().map(f).collect(),
        }
    }

    /// View the values as a slice in seat order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Seat 0");
    }

    #[test]
    fn test_offset_wraps() {
        assert_eq!(PlayerId::new(0).offset(1, 2), PlayerId::new(1));
        assert_eq!(PlayerId::new(1).offset(1, 2), PlayerId::new(0));
        assert_eq!(PlayerId::new(2).offset(2, 3), PlayerId::new(1));
        assert_eq!(PlayerId::new(2).offset(0, 3), PlayerId::new(2));
    }

    #[test]
    fn test_rotation_starts_at_self() {
        let order: Vec<_> = PlayerId::new(2).rotation(4).collect();
        assert_eq!(
            order,
            vec![PlayerId::new(2), PlayerId::new(3), PlayerId::new(0), PlayerId::new(1)]
        );
    }

    #[test]
    fn test_player_starts_empty() {
        let player = Player::new(PlayerId::new(1), SEAT_NAMES[1]);
        assert_eq!(player.name, "West");
        assert!(player.hand.is_empty());
    }

    #[test]
    fn test_player_map_new_and_index() {
        let mut map: PlayerMap<i32> = PlayerMap::new(3, |p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(2)], 20);

        map[PlayerId::new(1)] = 15;
        assert_eq!(map[PlayerId::new(1)], 15);
        assert_eq!(map.player_count(), 3);
    }

    #[test]
    fn test_player_map_count_and_map() {
        let map = PlayerMap::from_vec(vec![true, false, true, false]);

        assert_eq!(map.count_where(|&b| b), 2);
        let as_int = map.map(|&b| u8::from(b));
        assert_eq!(as_int.as_slice(), &[1, 0, 1, 0]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u8> = PlayerMap::new(2, |p| p.0 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::with_value(0, 0);
    }
}
