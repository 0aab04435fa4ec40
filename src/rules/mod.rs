//! The rules layer: the engine that owns a game, and the phase, card-play
//! and victory rules it applies.
//!
//! Presentation code talks only to [`GameEngine`]: it submits intents and
//! reads snapshots. The free functions in `play`, `turn` and `victory`
//! are the building blocks the engine composes, exposed for tools that
//! drive a bare `GameState`.

pub mod builder;
pub mod engine;
pub mod play;
pub mod turn;
pub mod victory;

pub use builder::GameBuilder;
pub use engine::{GameEngine, Outcome};
pub use play::{summon_cells, SCRAP_PHASE};
pub use turn::{advance_phase, draw_up, PhaseChange};
pub use victory::GameResult;
