//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Kuba is strictly two-player: slot 0 is player A, slot 1 is player B.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::board::Color;

/// Number of players in a Kuba game.
pub const PLAYER_COUNT: usize = 2;

/// Player slot identifier.
///
/// Slots are 0-based: the first player passed at construction is `PlayerId::A`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Player A (first constructor argument).
    pub const A: PlayerId = PlayerId(0);

    /// Player B (second constructor argument).
    pub const B: PlayerId = PlayerId(1);

    /// Create a new player ID.
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < PLAYER_COUNT as u8, "Kuba has exactly 2 player slots");
        Self(id)
    }

    /// Get the raw slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both player IDs, A first.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [PlayerId::A, PlayerId::B].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = if self.0 == 0 { 'A' } else { 'B' };
        write!(f, "Player {label}")
    }
}

/// A seated player: caller-supplied name and assigned marble color.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub color: Color,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

impl<S: Into<String>> From<(S, Color)> for Player {
    fn from((name, color): (S, Color)) -> Self {
        Self::new(name, color)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use kuba_engine::core::{PlayerId, PlayerMap};
///
/// let mut captured: PlayerMap<u8> = PlayerMap::with_value(0);
/// captured[PlayerId::B] += 1;
///
/// assert_eq!(captured[PlayerId::A], 0);
/// assert_eq!(captured[PlayerId::B], 1);
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

    /// Create a PlayerMap from explicit values for A and B.
    pub fn from_pair(a: T, b: T) -> Self {
        Self { data: [a, b] }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
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
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Find the first player whose entry satisfies `pred`.
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<PlayerId> {
        self.iter().find(|(_, v)| pred(v)).map(|(p, _)| p)
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
