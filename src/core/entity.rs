//! Entity identification.
//!
//! Units on the board and cards in hand each get a unique id. `GameState`
//! keeps one monotonically increasing counter per kind (`next_unit_id` and
//! `next_card_id`), so an id is never reused within a game, even after the
//! unit it named has been removed from the roster. A `UnitId` and a
//! `CardId` may share a raw value.
//!
//! ```
//! use summoner_tactics::core::{CardId, UnitId};
//!
//! let unit = UnitId::new(3);
//! let card = CardId::new(4);
//!
//! assert_eq!(unit.raw(), 3);
//! assert_eq!(format!("{}", card), "Card#4");
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of a unit on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl UnitId {
    /// Create a unit ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unit#{}", self.0)
    }
}

/// Identifier of a card instance held in a player's hand.
///
/// Two copies of the same template drawn at different times have
/// different `CardId`s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}
