//! Event-card effect descriptors and the standing-effect list.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// A persistent modifier granted by a standing event.
///
/// Auras benefit every unit of the player who played the event and are
/// consulted by the combat hooks while they remain active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aura {
    /// Friendly units take this much less damage (never below 1).
    Ward { reduction: u32 },

    /// Friendly attackers roll this many extra dice.
    ExtraDice { dice: u32 },
}

impl std::fmt::Display for Aura {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Aura::Ward { reduction } => write!(f, "Ward aura (-{})", reduction),
            Aura::ExtraDice { dice } => write!(f, "Extra Dice aura (+{})", dice),
        }
    }
}

/// What an event card does when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventEffect {
    /// Deal `amount` damage to an enemy within `radius` of a friendly unit.
    DirectDamage { amount: u32, radius: u32 },

    /// Heal a friendly unit.
    Mend { amount: u32 },

    /// Every friendly unit gains attack until the next phase boundary.
    Rally { bonus: u32 },

    /// Add an aura to the active-effects list.
    Standing(Aura),
}

impl EventEffect {
    /// Does playing this effect require a target cell?
    #[must_use]
    pub fn needs_target(&self) -> bool {
        matches!(self, EventEffect::DirectDamage { .. } | EventEffect::Mend { .. })
    }

    #[must_use]
    pub fn is_standing(&self) -> bool {
        matches!(self, EventEffect::Standing(_))
    }
}

/// A standing event currently in play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEffect {
    /// Name of the card that created it.
    pub name: String,
    pub owner: PlayerId,
    pub aura: Aura,

    /// Turn switches left before expiry.
    pub turns_remaining: u32,
}

/// The active-effects list.
///
/// Effects are kept in play order. Expiry happens in [`ActiveEffects::tick`],
/// which the turn machine calls once per turn switch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEffects {
    effects: Vec<ActiveEffect>,
}

impl ActiveEffects {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a standing effect into play for `turns` turn switches.
    pub fn add(&mut self, name: impl Into<String>, owner: PlayerId, aura: Aura, turns: u32) {
        self.effects.push(ActiveEffect {
            name: name.into(),
            owner,
            aura,
            turns_remaining: turns,
        });
    }

    /// Total damage reduction granted to `player`'s units.
    #[must_use]
    pub fn ward_for(&self, player: PlayerId) -> u32 {
        self.owned_by(player)
            .map(|e| match e.aura {
                Aura::Ward { reduction } => reduction,
                Aura::ExtraDice { .. } => 0,
            })
            .sum()
    }

    /// Total extra attack dice granted to `player`'s units.
    #[must_use]
    pub fn extra_dice_for(&self, player: PlayerId) -> u32 {
        self.owned_by(player)
            .map(|e| match e.aura {
                Aura::ExtraDice { dice } => dice,
                Aura::Ward { .. } => 0,
            })
            .sum()
    }

    /// Count down every effect and drop the ones that reached zero.
    ///
    /// Returns the expired effects.
    pub fn tick(&mut self) -> Vec<ActiveEffect> {
        for effect in &mut self.effects {
            effect.turns_remaining = effect.turns_remaining.saturating_sub(1);
        }
        let (expired, kept) = self
            .effects
            .drain(..)
            .partition(|e| e.turns_remaining == 0);
        self.effects = kept;
        expired
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveEffect> {
        self.effects.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    fn owned_by(&self, player: PlayerId) -> impl Iterator<Item = &ActiveEffect> {
        self.effects.iter().filter(move |e| e.owner == player)
    }
}
