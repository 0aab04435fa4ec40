//! The per-player phase cycle.
//!
//! A turn is six ordered phases: `Summon → Move → Build → Attack → Magic → Draw`.
//! After `Draw` the turn passes to the other player, who starts at `Summon`.

use serde::{Deserialize, Serialize};

/// One sub-turn of a player's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Summon,
    Move,
    Build,
    Attack,
    Magic,
    Draw,
}

impl Phase {
    /// All phases in turn order.
    pub const CYCLE: [Phase; 6] = [
        Phase::Summon,
        Phase::Move,
        Phase::Build,
        Phase::Attack,
        Phase::Magic,
        Phase::Draw,
    ];

    /// The phase a turn starts in.
    pub const FIRST: Phase = Phase::Summon;

    /// The phase after this one, or `None` at the end of the turn.
    ///
    /// ```
    /// use summoner_tactics::core::Phase;
    ///
    /// assert_eq!(Phase::Summon.next(), Some(Phase::Move));
    /// assert_eq!(Phase::Draw.next(), None);
    /// ```
    #[must_use]
    pub fn next(self) -> Option<Phase> {
        let idx = Self::CYCLE.iter().position(|&p| p == self)?;
        Self::CYCLE.get(idx + 1).copied()
    }

    /// Is this the last phase of a turn?
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Phase::Draw
    }

    /// Does entering this phase reset per-phase action flags?
    #[must_use]
    pub fn resets_actions(self) -> bool {
        matches!(self, Phase::Move | Phase::Attack)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Summon => "Summon",
            Phase::Move => "Move",
            Phase::Build => "Build",
            Phase::Attack => "Attack",
            Phase::Magic => "Magic",
            Phase::Draw => "Draw",
        };
        f.write_str(name)
    }
}
