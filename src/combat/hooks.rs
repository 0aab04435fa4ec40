//! Ability dispatch at the three combat hook points.
//!
//! 1. [`before_roll`]: dice count and hit threshold
//! 2. [`after_hits`]: flat bonus damage and on-hit side effects, once the
//!    hit count is known but before damage lands
//! 3. [`after_damage`]: kill rewards and post-kill effects
//!
//! `BonusStrike` sits between 1 and 2 as a roll modification
//! ([`grants_extra_die`]). Every hook matches the ability exhaustively,
//! so adding a variant forces a decision at each hook.

use crate::board::Cell;
use crate::core::{GameState, RulesConfig};
use crate::effects::ActiveEffects;
use crate::units::{Ability, Unit};

/// Dice parameters for one attack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollPlan {
    pub dice: u32,
    pub threshold: u8,
    pub notes: Vec<String>,
}

/// Hook 1: how many dice to roll and what counts as a hit.
#[must_use]
pub fn before_roll(attacker: &Unit, config: &RulesConfig, effects: &ActiveEffects) -> RollPlan {
    let mut plan = RollPlan {
        dice: attacker.attack_value,
        threshold: config.hit_threshold,
        notes: Vec::new(),
    };

    if let Some(ability) = attacker.ability {
        match ability {
            Ability::Accuracy { threshold } => {
                plan.threshold = threshold;
                plan.notes.push(ability.to_string());
            }
            Ability::ExtraDice { dice } => {
                plan.dice += dice;
                plan.notes.push(ability.to_string());
            }
            Ability::BonusDamage { .. }
            | Ability::BonusStrike
            | Ability::Ward { .. }
            | Ability::Knockback
            | Ability::Pin
            | Ability::Weaken { .. }
            | Ability::Bounty { .. }
            | Ability::Bloodlust { .. } => {}
        }
    }

    if attacker.banked_dice > 0 {
        plan.dice += attacker.banked_dice;
        plan.notes.push(format!("Bloodlust +{} dice", attacker.banked_dice));
    }

    let aura_dice = effects.extra_dice_for(attacker.owner);
    if aura_dice > 0 {
        plan.dice += aura_dice;
        plan.notes.push(format!("Aura +{} dice", aura_dice));
    }
    plan
}

/// Roll modification: does the attacker roll one more die after `hits`?
#[must_use]
pub fn grants_extra_die(attacker: &Unit, hits: u32) -> bool {
    matches!(attacker.ability, Some(Ability::BonusStrike)) && hits >= 1
}

/// A non-damage effect on the defender, triggered by a hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SideEffect {
    /// Push the defender one cell away from the attacker.
    Knockback,
    /// Lock the defender's next Move phase.
    Pin,
    /// Permanently lower the defender's attack.
    Weaken(u32),
}

/// Result of hook 2.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HitModifiers {
    pub bonus_damage: u32,
    pub side_effect: Option<SideEffect>,
    pub notes: Vec<String>,
}

/// Hook 2: bonus damage and side effects. Nothing triggers without a hit.
#[must_use]
pub fn after_hits(attacker: &Unit, defender: &Unit, hits: u32) -> HitModifiers {
    let mut mods = HitModifiers::default();
    let Some(ability) = attacker.ability else {
        return mods;
    };
    if hits == 0 {
        return mods;
    }

    match ability {
        Ability::BonusDamage { amount, when } => {
            if when.holds(attacker.has_moved_this_phase, defender.has_moved_this_phase) {
                mods.bonus_damage = amount;
                mods.notes.push(format!("{} +{} damage", ability.name(), amount));
            }
        }
        Ability::Knockback => mods.side_effect = Some(SideEffect::Knockback),
        Ability::Pin => mods.side_effect = Some(SideEffect::Pin),
        Ability::Weaken { amount } => mods.side_effect = Some(SideEffect::Weaken(amount)),
        Ability::Accuracy { .. }
        | Ability::ExtraDice { .. }
        | Ability::BonusStrike
        | Ability::Ward { .. }
        | Ability::Bounty { .. }
        | Ability::Bloodlust { .. } => {}
    }
    mods
}

/// Carry out a hook-2 side effect on the defender at roster index `defender`.
///
/// Returns a battle-log note. A push toward an edge or an occupied cell
/// does nothing.
pub fn apply_side_effect(
    state: &mut GameState,
    attacker_cell: Cell,
    defender: usize,
    effect: SideEffect,
) -> String {
    match effect {
        SideEffect::Knockback => {
            let from = state.units[defender].cell;
            let destination = attacker_cell
                .direction_to(from)
                .map(|dir| from.step(dir, 1))
                .filter(|&cell| state.is_empty(cell));
            match destination {
                Some(cell) => {
                    state.units[defender].cell = cell;
                    format!("Knockback to {}", cell)
                }
                None => "Knockback blocked".to_string(),
            }
        }
        SideEffect::Pin => {
            state.units[defender].move_locked = true;
            "Pinned".to_string()
        }
        SideEffect::Weaken(amount) => {
            let lost = state.units[defender].weaken(amount);
            format!("Weaken -{} attack", lost)
        }
    }
}

/// Result of hook 3.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KillRewards {
    pub bonus_mana: u32,

    /// Dice banked for the attacker's next attack.
    pub banked_dice: u32,
    pub notes: Vec<String>,
}

/// Hook 3: effects that depend on whether the defender was destroyed.
#[must_use]
pub fn after_damage(attacker: &Unit, destroyed: bool) -> KillRewards {
    let mut rewards = KillRewards::default();
    let Some(ability) = attacker.ability else {
        return rewards;
    };
    if !destroyed {
        return rewards;
    }

    match ability {
        Ability::Bounty { mana } => {
            rewards.bonus_mana = mana;
            rewards.notes.push(format!("Bounty +{} mana", mana));
        }
        Ability::Bloodlust { bonus } => {
            rewards.banked_dice = bonus;
            rewards.notes.push(format!("Bloodlust banks +{} dice", bonus));
        }
        Ability::Accuracy { .. }
        | Ability::ExtraDice { .. }
        | Ability::BonusDamage { .. }
        | Ability::BonusStrike
        | Ability::Ward { .. }
        | Ability::Knockback
        | Ability::Pin
        | Ability::Weaken { .. } => {}
    }
    rewards
}
