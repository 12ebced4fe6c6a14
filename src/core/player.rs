//! Player identification, per-player storage, and player records.
//!
//! ## PlayerId
//!
//! Stable 1-based player identifier. Seat order is `PlayerId(1)` first.
//!
//! ## PlayerMap
//!
//! Dense per-player storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use crate::board::TileId;

/// Most players a single game supports.
pub const MAX_PLAYERS: usize = 8;

/// Player identifier, 1-based.
///
/// The first player is `PlayerId(1)`; its seat index is 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Player ID for a 0-based seat index.
    #[must_use]
    pub const fn from_seat(seat: usize) -> Self {
        Self(seat as u8 + 1)
    }

    /// Get the 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 as usize).saturating_sub(1)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use board_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(1));
    /// assert_eq!(players[3], PlayerId::new(4));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per seat.
///
/// ```
/// use board_engine::core::{PlayerId, PlayerMap};
///
/// let mut balances: PlayerMap<i64> = PlayerMap::with_value(4, 1500);
/// balances[PlayerId::new(2)] -= 200;
/// assert_eq!(balances[PlayerId::new(2)], 1300);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= MAX_PLAYERS, "At most 8 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();
        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Check whether a player ID belongs to this map.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.0 >= 1 && player.index() < self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId::from_seat(i), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId::from_seat(i), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
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

/// A seated player.
///
/// Balance is signed: nothing stops a player from going into debt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Board position (tile index).
    pub position: TileId,
    pub balance: i64,
    /// Owned tiles in purchase order.
    pub owned: SmallVec<[TileId; 8]>,
    pub has_escape_card: bool,
}

impl Player {
    /// Create a player on GO with the given starting balance.
    pub fn new(id: PlayerId, name: impl Into<String>, balance: i64) -> Self {
        Self {
            id,
            name: name.into(),
            position: TileId::GO,
            balance,
            owned: SmallVec::new(),
            has_escape_card: false,
        }
    }

    /// Check if the player owns a tile.
    #[must_use]
    pub fn owns(&self, tile: TileId) -> bool {
        self.owned.contains(&tile)
    }
}

/// Per-player jail status.
///
/// `turns` counts non-doubles rolls served; it is 0 whenever `in_jail` is false.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JailStatus {
    pub in_jail: bool,
    pub turns: u8,
}

impl JailStatus {
    /// Lock the player up with a fresh turn count.
    pub fn jail(&mut self) {
        self.in_jail = true;
        self.turns = 0;
    }

    /// Release the player and reset the turn count.
    pub fn release(&mut self) {
        self.in_jail = false;
        self.turns = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::new(1);
        let p2 = PlayerId::new(2);

        assert_eq!(p1.index(), 0);
        assert_eq!(p2.index(), 1);
        assert_eq!(PlayerId::from_seat(3), PlayerId::new(4));
        assert_eq!(format!("{}", p1), "Player 1");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(4, |p| p.index() * 10);

        assert_eq!(map[PlayerId::new(1)], 0);
        assert_eq!(map[PlayerId::new(4)], 30);
        assert_eq!(map.player_count(), 4);
    }

    #[test]
    fn test_player_map_contains() {
        let map: PlayerMap<i32> = PlayerMap::with_value(3, 0);

        assert!(!map.contains(PlayerId::new(0)));
        assert!(map.contains(PlayerId::new(1)));
        assert!(map.contains(PlayerId::new(3)));
        assert!(!map.contains(PlayerId::new(4)));
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<usize> = PlayerMap::new(3, |p| p.index());

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[0], (PlayerId::new(1), &0));
        assert_eq!(pairs[2], (PlayerId::new(3), &2));
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::with_value(0, 0);
    }

    #[test]
    fn test_jail_status_reset() {
        let mut status = JailStatus::default();
        status.jail();
        status.turns = 2;

        status.release();
        assert_eq!(status, JailStatus::default());
    }

    #[test]
    fn test_new_player_starts_on_go() {
        let player = Player::new(PlayerId::new(1), "Player 1", 1500);

        assert_eq!(player.position, TileId::GO);
        assert_eq!(player.balance, 1500);
        assert!(player.owned.is_empty());
        assert!(!player.owns(TileId::new(1)));
    }
}
