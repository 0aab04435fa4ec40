//! Combat: dice, ability hooks, damage, and attack resolution.
//!
//! ## Key Types
//!
//! - `CombatResult`: dice, hits, damage, kill status, and the log line of one attack
//! - `RollPlan`, `HitModifiers`, `KillRewards`: outputs of the three ability hooks
//! - `DamageReport`: what a single damage event did
//!
//! All randomness comes from the `RandomSource` passed in, so a seeded or
//! scripted source replays an attack exactly.

mod damage;
mod dice;
mod hooks;
mod resolver;

pub use damage::{apply_damage, DamageReport};
pub use dice::{count_hits, roll_dice, Rolls};
pub use hooks::{
    after_damage, after_hits, apply_side_effect, before_roll, grants_extra_die, HitModifiers,
    KillRewards, RollPlan, SideEffect,
};
pub use resolver::{resolve_attack, CombatResult};
