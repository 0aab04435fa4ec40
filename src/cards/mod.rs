//! Card system: templates, hand cards, and faction pools.
//!
//! ## Key Types
//!
//! - `CardTemplate`: static card data, either a unit or an event
//! - `Card`: a drawn copy sitting in a player's hand
//! - `Faction`: selects which pool a player draws from
//! - `CardRegistry`: faction pools and uniform random draws

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{CardKind, CardTemplate};
pub use instance::Card;
pub use registry::{CardRegistry, Faction};
