//! Event-card effects.
//!
//! - `EventEffect`: what an event card does (instant or standing)
//! - `Aura`: the modifier a standing event grants
//! - `ActiveEffects`: standing events in play, with turn-based expiry
//! - `event_target_cells` / `check_event_target`: legal event targets
//! - `resolve_event`: applies an effect to the game state
//!
//! Instant effects resolve once. Standing effects sit in the
//! active-effects list for a fixed number of turn switches and are read
//! by the combat hooks and damage application while they last.

mod effect;
mod resolver;
mod targeting;

pub use effect::{ActiveEffect, ActiveEffects, Aura, EventEffect};
pub use resolver::resolve_event;
pub use targeting::{check_event_target, event_target_cells};
