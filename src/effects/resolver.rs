//! Event resolution.
//!
//! Instant effects change the board immediately; standing effects are
//! added to the active-effects list, where the combat hooks pick them up.
//! Callers validate the target with
//! [`check_event_target`](super::check_event_target) first and re-check
//! the win condition afterwards.

use super::effect::EventEffect;
use crate::board::Cell;
use crate::combat::apply_damage;
use crate::core::{GameState, PlayerId, RulesConfig};

/// Apply `effect`, played by `owner` from the card named `card`.
///
/// Returns the battle-log line.
pub fn resolve_event(
    state: &mut GameState,
    config: &RulesConfig,
    owner: PlayerId,
    card: &str,
    effect: EventEffect,
    target: Option<Cell>,
) -> String {
    let target_index = target
        .and_then(|cell| state.unit_at(cell).map(|u| u.id))
        .and_then(|id| state.unit_index(id));

    match effect {
        EventEffect::DirectDamage { amount, .. } => {
            let Some(index) = target_index else {
                return format!("{} fizzles.", card);
            };
            let label = state.units[index].label();
            let report = apply_damage(state, config, index, amount, Some(owner));
            state.has_targeted_enemy_this_phase = true;

            let mut line = format!("{} hits {} for {} damage.", card, label, report.landed);
            if report.destroyed {
                line.push_str(&format!(" {} destroyed! +{} mana.", label, report.mana_awarded));
            }
            line
        }
        EventEffect::Mend { amount } => {
            let Some(index) = target_index else {
                return format!("{} fizzles.", card);
            };
            let healed = state.units[index].heal(amount);
            format!("{} restores {} life to {}.", card, healed, state.units[index].label())
        }
        EventEffect::Rally { bonus } => {
            let mut rallied = 0;
            for unit in state.units.iter_mut().filter(|u| u.owner == owner && u.is_alive()) {
                unit.boost_attack(bonus);
                rallied += 1;
            }
            format!("{}: {} units gain +{} attack this phase.", card, rallied, bonus)
        }
        EventEffect::Standing(aura) => {
            state
                .active_effects
                .add(card, owner, aura, config.standing_effect_turns);
            format!("{} is now active: {}.", card, aura)
        }
    }
}
