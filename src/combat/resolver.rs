//! Attack resolution.

use log::debug;
use serde::{Deserialize, Serialize};

use super::damage::apply_damage;
use super::dice::{count_hits, roll_dice, Rolls};
use super::hooks::{after_damage, after_hits, apply_side_effect, before_roll, grants_extra_die};
use crate::board::Cell;
use crate::core::{ActionError, GameState, Phase, RandomSource, RulesConfig, UnitId};
use crate::rules::victory;
use crate::targeting::is_valid_attack;

/// Everything that happened during one attack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatResult {
    pub attacker: UnitId,
    pub defender: UnitId,

    /// Every die rolled, including a bonus-strike die.
    pub rolls: Rolls,

    /// Minimum face that counted as a hit.
    pub threshold: u8,

    pub hits: u32,

    /// Flat damage added by the attacker's ability.
    pub bonus_damage: u32,

    /// Damage that landed after reductions.
    pub damage_dealt: u32,

    pub defender_destroyed: bool,

    /// Total mana paid to the attacker's owner.
    pub mana_awarded: u32,

    /// Ability and aura annotations, in hook order.
    pub notes: Vec<String>,

    /// The battle-log line written for this attack.
    pub log: String,
}

/// Resolve `attacker`'s attack on the unit at `target`.
///
/// The target is re-validated against a freshly computed attack set; an
/// illegal target is rejected before any die is rolled. On success the
/// attacker is marked as having attacked, the phase budget records it, a
/// log line is written, and the win condition is re-evaluated.
pub fn resolve_attack(
    state: &mut GameState,
    config: &RulesConfig,
    rng: &mut dyn RandomSource,
    attacker: UnitId,
    target: Cell,
) -> Result<CombatResult, ActionError> {
    if !is_valid_attack(state, config, attacker, target) {
        return Err(ActionError::IllegalTarget);
    }
    let ai = state
        .unit_index(attacker)
        .ok_or(ActionError::UnitIneligible(attacker))?;
    let defender = state.unit_at(target).map(|u| u.id).ok_or(ActionError::IllegalTarget)?;
    let di = state
        .unit_index(defender)
        .ok_or(ActionError::IllegalTarget)?;

    let attacker_label = state.units[ai].label();
    let defender_label = state.units[di].label();
    let attacker_cell = state.units[ai].cell;
    let owner = state.units[ai].owner;

    let plan = before_roll(&state.units[ai], config, &state.active_effects);
    state.units[ai].banked_dice = 0;
    let mut notes = plan.notes;
    let mut rolls = roll_dice(rng, plan.dice, config.die_sides);
    let mut hits = count_hits(&rolls, plan.threshold);

    if grants_extra_die(&state.units[ai], hits) {
        let face = rng.roll_die(config.die_sides);
        rolls.push(face);
        if face >= plan.threshold {
            hits += 1;
        }
        notes.push(format!("Bonus Strike rolled {}", face));
    }

    let mods = after_hits(&state.units[ai], &state.units[di], hits);
    notes.extend(mods.notes);
    if let Some(effect) = mods.side_effect {
        notes.push(apply_side_effect(state, attacker_cell, di, effect));
    }

    let damage = hits + mods.bonus_damage;
    let report = apply_damage(state, config, di, damage, Some(owner));
    let mut mana_awarded = report.mana_awarded;

    let rewards = after_damage(&state.units[ai], report.destroyed);
    if rewards.bonus_mana > 0 {
        state.mana[owner] += rewards.bonus_mana;
        mana_awarded += rewards.bonus_mana;
    }
    state.units[ai].banked_dice += rewards.banked_dice;
    notes.extend(rewards.notes);

    state.units[ai].has_attacked_this_phase = true;
    if let Some(budget) = state.budget_mut(Phase::Attack) {
        budget.record(attacker);
    }
    state.has_targeted_enemy_this_phase = true;

    let mut line = format!(
        "{} attacks {}! Rolls: {:?} -> {} {}.",
        attacker_label,
        defender_label,
        rolls.as_slice(),
        hits,
        if hits == 1 { "hit" } else { "hits" }
    );
    for note in &notes {
        line.push_str(&format!(" [{}]", note));
    }
    if report.landed > 0 {
        line.push_str(&format!(" {} damage.", report.landed));
    }
    if report.destroyed {
        line.push_str(&format!(" {} destroyed! +{} mana.", defender_label, mana_awarded));
    }
    debug!("{}", line);
    state.log(line.clone());

    victory::settle(state);

    Ok(CombatResult {
        attacker,
        defender,
        rolls,
        threshold: plan.threshold,
        hits,
        bonus_damage: mods.bonus_damage,
        damage_dealt: report.landed,
        defender_destroyed: report.destroyed,
        mana_awarded,
        notes,
        log: line,
    })
}
