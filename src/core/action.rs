//! Player intents and the action history.
//!
//! An `Intent` is what the presentation layer asks the engine to do. It
//! names units and cards by id and cells by coordinate; nothing in an
//! intent is trusted until the engine re-validates it against the
//! current state.

use serde::{Deserialize, Serialize};

use super::entity::{CardId, UnitId};
use super::phase::Phase;
use super::player::PlayerId;
use crate::board::Cell;

/// A request from the current player.
///
/// ## Example
///
/// ```
/// use summoner_tactics::board::Cell;
/// use summoner_tactics::core::{Intent, UnitId};
///
/// let step = Intent::Move { unit: UnitId(3), to: Cell::new(4, 3) };
/// assert_eq!(step.name(), "move");
/// assert!(!step.ends_phase());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    Move { unit: UnitId, to: Cell },
    Attack { attacker: UnitId, target: Cell },
    Summon { card: CardId, at: Cell },
    Scrap { card: CardId },
    PlayEvent { card: CardId, target: Option<Cell> },
    EndPhase,
}

impl Intent {
    /// Short verb used in errors and logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Move { .. } => "move",
            Intent::Attack { .. } => "attack",
            Intent::Summon { .. } => "summon",
            Intent::Scrap { .. } => "scrap",
            Intent::PlayEvent { .. } => "event",
            Intent::EndPhase => "end phase",
        }
    }

    #[must_use]
    pub fn ends_phase(&self) -> bool {
        matches!(self, Intent::EndPhase)
    }
}

/// Record of an accepted intent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who acted.
    pub player: PlayerId,

    pub intent: Intent,

    /// Turn number when the intent was accepted.
    pub turn: u32,

    /// Phase in which the intent was accepted.
    pub phase: Phase,

    /// Position in the game's history (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, intent: Intent, turn: u32, phase: Phase, sequence: u32) -> Self {
        Self {
            player,
            intent,
            turn,
            phase,
            sequence,
        }
    }
}
