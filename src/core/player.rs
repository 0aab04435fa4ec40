//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! The game is strictly two-player: `PlayerId::A` moves first and sits on
//! the bottom row, `PlayerId::B` sits on the top row.
//!
//! ## PlayerMap
//!
//! Per-player storage indexed by `PlayerId`, used for hands, mana pools
//! and faction assignments.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use thiserror::Error;

/// Number of players in a game.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier.
///
/// Only [`PlayerId::A`] and [`PlayerId::B`] exist. Decoding any other
/// index fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

/// A raw player index outside `0..PLAYER_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("no player with index {0}")]
pub struct InvalidPlayerId(pub u8);

impl PlayerId {
    /// The player who takes the first turn.
    pub const A: PlayerId = PlayerId(0);

    /// The second player.
    pub const B: PlayerId = PlayerId(1);

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    ///
    /// ```
    /// use summoner_tactics::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::A.opponent(), PlayerId::B);
    /// assert_eq!(PlayerId::B.opponent(), PlayerId::A);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> PlayerId {
        PlayerId(1 - self.0)
    }

    /// Iterate over both players in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [PlayerId::A, PlayerId::B].into_iter()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = InvalidPlayerId;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(PlayerId::A),
            1 => Ok(PlayerId::B),
            _ => Err(InvalidPlayerId(index)),
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> u8 {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            PlayerId::A => write!(f, "P1"),
            _ => write!(f, "P2"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use summoner_tactics::core::{PlayerId, PlayerMap};
///
/// let mut mana: PlayerMap<u32> = PlayerMap::with_value(5);
/// mana[PlayerId::B] += 1;
///
/// assert_eq!(mana[PlayerId::A], 5);
/// assert_eq!(mana[PlayerId::B], 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::A), factory(PlayerId::B)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
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
        assert_eq!(PlayerId::A.index(), 0);
        assert_eq!(PlayerId::B.index(), 1);
        assert_eq!(format!("{}", PlayerId::A), "P1");
        assert_eq!(format!("{}", PlayerId::B), "P2");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all().collect();
        assert_eq!(players, vec![PlayerId::A, PlayerId::B]);
    }

    #[test]
    fn test_opponent_is_involution() {
        for player in PlayerId::all() {
            assert_ne!(player, player.opponent());
            assert_eq!(player, player.opponent().opponent());
        }
    }

    #[test]
    fn test_only_two_players_decode() {
        assert_eq!(PlayerId::try_from(1), Ok(PlayerId::B));
        assert_eq!(PlayerId::try_from(2), Err(InvalidPlayerId(2)));

        assert_eq!(serde_json::to_string(&PlayerId::B).unwrap(), "1");
        assert_eq!(serde_json::from_str::<PlayerId>("0").unwrap(), PlayerId::A);
        assert!(serde_json::from_str::<PlayerId>("2").is_err());
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.index() * 10);

        assert_eq!(map[PlayerId::A], 0);
        assert_eq!(map[PlayerId::B], 10);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<Vec<i32>> = PlayerMap::with_default();

        map[PlayerId::A].push(1);
        map[PlayerId::B].push(2);
        map[PlayerId::B].push(3);

        assert_eq!(map[PlayerId::A], vec![1]);
        assert_eq!(map[PlayerId::B], vec![2, 3]);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<u32> = PlayerMap::new(|p| p.index() as u32 + 1);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::A, &1), (PlayerId::B, &2)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u32> = PlayerMap::new(|p| p.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
