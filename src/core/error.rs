//! Error types.
//!
//! [`ActionError`] explains why a player intent was rejected. Every variant
//! is recoverable: a rejected request leaves the game state exactly as it
//! was and writes nothing to the battle log.
//!
//! [`ConfigError`] is returned when an engine is built from a
//! `RulesConfig` that no game can start with.

use thiserror::Error;

use super::entity::{CardId, UnitId};
use super::phase::Phase;

/// Why an intent was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The acting unit or card belongs to the player who is not on turn.
    #[error("not your turn")]
    NotYourTurn,

    /// The action is not permitted in the current phase.
    #[error("{action} is not allowed in the {phase} phase")]
    WrongPhase { action: &'static str, phase: Phase },

    /// The phase's distinct-actor cap has been reached.
    #[error("action budget for the {phase} phase is exhausted")]
    ActionBudgetExhausted { phase: Phase },

    /// The unit is dead, already acted this phase, or does not exist.
    #[error("{0} cannot act")]
    UnitIneligible(UnitId),

    /// The destination is not a legal move cell.
    #[error("illegal move destination")]
    IllegalDestination,

    /// The cell does not hold a legal target.
    #[error("illegal target")]
    IllegalTarget,

    /// The card costs more than the owner's mana pool holds.
    #[error("insufficient mana: have {have}, need {need}")]
    InsufficientMana { have: u32, need: u32 },

    /// The card is not in the current player's hand.
    #[error("{0} is not in hand")]
    UnknownCard(CardId),

    /// A unit card was played as an event or an event card was summoned.
    #[error("{0} cannot be played that way")]
    WrongCardType(CardId),

    /// The current player has no living summoner to summon next to.
    #[error("no living summoner")]
    NoSummoner,

    /// The game has ended; only a reset is accepted.
    #[error("the game is already over")]
    GameAlreadyOver,
}

/// Why a `RulesConfig` was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a {rows}x{cols} board cannot hold both summoners")]
    BoardTooSmall { rows: i32, cols: i32 },

    #[error("dice need at least one face")]
    NoDieFaces,

    #[error("summoners must start with life")]
    SummonerStartsDead,
}
