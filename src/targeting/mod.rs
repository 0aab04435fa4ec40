//! Targeting: legal move destinations and attack targets.
//!
//! ## Key Features
//!
//! - **Pure**: queries read a `GameState` and never mutate it, so calling
//!   one twice without an intervening action yields the same set
//! - **Deterministic**: results are ordered `BTreeSet`s with no randomness
//! - **Gated**: both queries return nothing for units that fail the shared
//!   eligibility gate (dead, already acted, or budget exhausted)

mod attack;
mod eligibility;
mod movement;

pub use attack::{is_valid_attack, valid_attack_cells};
pub use eligibility::{can_act, check_eligible, Activity};
pub use movement::reachable_move_cells;
