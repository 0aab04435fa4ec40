//! Units and their special abilities.
//!
//! ## Key Types
//!
//! - `Unit`: a combatant on the board (stats, position, per-phase flags)
//! - `UnitKind`: the fixed set of unit categories, including `Summoner`
//! - `RangeType`: melee or ranged attack profile
//! - `Ability`: the closed set of special abilities

pub mod ability;
pub mod unit;

pub use ability::{Ability, StrikeCondition};
pub use unit::{RangeType, Unit, UnitKind, UnitStats};
