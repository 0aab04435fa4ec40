//! Core engine types: ids, players, phases, configuration, errors,
//! intents, randomness, and the game state.
//!
//! Everything else in the crate builds on these types; nothing here
//! encodes a game rule beyond the shape of the data.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod phase;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{ActionRecord, Intent};
pub use config::RulesConfig;
pub use entity::{CardId, UnitId};
pub use error::{ActionError, ConfigError};
pub use phase::Phase;
pub use player::{InvalidPlayerId, PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRolls};
pub use state::{ActorBudget, GameState};
