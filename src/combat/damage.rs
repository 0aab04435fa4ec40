//! Damage application and destruction bookkeeping.
//!
//! Attacks, direct-damage events, and the cost of inaction all funnel
//! through [`apply_damage`], so standing auras, `Ward`, and kill rewards
//! behave the same no matter where the damage came from.

use crate::core::{GameState, PlayerId, RulesConfig};

/// What a single damage event did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DamageReport {
    /// Damage that actually landed after reductions.
    pub landed: u32,

    /// This event brought the target to 0 life.
    pub destroyed: bool,

    /// Kill reward paid to the killer's owner.
    pub mana_awarded: u32,
}

/// Deal `amount` damage to the unit at roster index `target`.
///
/// The target's own `Ward` and any standing ward aura of its owner are
/// applied. If the unit drops to 0 life for the first time it is flagged
/// `pending_removal`, and `killer` (if any, and not the target's owner)
/// earns the kill reward.
pub fn apply_damage(
    state: &mut GameState,
    config: &RulesConfig,
    target: usize,
    amount: u32,
    killer: Option<PlayerId>,
) -> DamageReport {
    let aura = state.active_effects.ward_for(state.units[target].owner);
    let unit = &mut state.units[target];
    let landed = unit.take_damage(amount, aura);

    let mut report = DamageReport {
        landed,
        ..DamageReport::default()
    };
    if unit.current_life == 0 && !unit.pending_removal {
        unit.pending_removal = true;
        report.destroyed = true;

        let victim = unit.owner;
        if let Some(player) = killer.filter(|&p| p != victim) {
            state.mana[player] += config.kill_reward;
            report.mana_awarded = config.kill_reward;
        }
    }
    report
}
