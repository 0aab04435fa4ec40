//! # summoner-tactics
//!
//! Rule engine for a two-player, turn-based tactics game on a grid. Each
//! player fields a summoner and a hand of unit and event cards, and wins
//! by destroying the opposing summoner.
//!
//! ## Design Principles
//!
//! 1. **Single Writer**: `GameEngine` owns the `GameState` and is the only
//!    thing that mutates it. Presentation code submits intents and reads
//!    snapshots.
//!
//! 2. **Validate, Then Commit**: every request is checked in full before
//!    the first write, so a rejected request changes nothing and logs
//!    nothing.
//!
//! 3. **Injected Randomness**: dice and card draws come from one
//!    `RandomSource`. A seeded `GameRng` replays a game exactly;
//!    `ScriptedRolls` pins dice in tests.
//!
//! ## Architecture
//!
//! - **Deferred Removal**: a unit whose life reaches 0 is flagged and stays
//!   in the roster until the next refresh, so effects in the same action
//!   can still read it.
//!
//! - **Persistent Data Structures**: the battle log and action history use
//!   `im-rs`, so snapshots stay cheap as games get long.
//!
//! ## Modules
//!
//! - `core`: IDs, players, phases, config, RNG, intents, errors, state
//! - `board`: grid geometry and cells
//! - `units`: units, unit kinds, special abilities
//! - `cards`: card templates, hand cards, faction pools
//! - `targeting`: move reachability, attack targets, eligibility
//! - `combat`: dice, ability hooks, damage, attack resolution
//! - `effects`: event cards and standing effects
//! - `rules`: phase machine, card plays, victory, `GameEngine`
//!
//! ## Example
//!
//! ```
//! use summoner_tactics::{GameEngine, Intent, Phase};
//!
//! let mut engine = GameEngine::builder().seed(1).build().unwrap();
//! while engine.state().current_phase != Phase::Move {
//!     engine.apply(Intent::EndPhase).unwrap();
//! }
//!
//! let summoner = engine.state().units[0].id;
//! let reachable = engine.reachable_move_cells(summoner);
//! assert!(!reachable.is_empty());
//! ```

pub mod board;
pub mod cards;
pub mod combat;
pub mod core;
pub mod effects;
pub mod rules;
pub mod targeting;
pub mod units;

// Re-export commonly used types
pub use crate::core::{
    ActionError, ActionRecord, CardId, ConfigError, GameRng, GameRngState, GameState, Intent,
    Phase, PlayerId, PlayerMap, RandomSource, RulesConfig, ScriptedRolls, UnitId,
};

pub use crate::board::{Board, Cell, Direction};

pub use crate::units::{Ability, RangeType, StrikeCondition, Unit, UnitKind, UnitStats};

pub use crate::cards::{Card, CardKind, CardRegistry, CardTemplate, Faction};

pub use crate::combat::CombatResult;

pub use crate::effects::{ActiveEffect, ActiveEffects, Aura, EventEffect};

pub use crate::rules::{GameBuilder, GameEngine, GameResult, Outcome, PhaseChange};
