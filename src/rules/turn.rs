//! The phase state machine.
//!
//! `Summon → Move → Build → Attack → Magic → Draw`, then the other player
//! starts at `Summon`. Side effects of each boundary:
//!
//! - leaving Attack without having targeted an enemy costs the current
//!   summoner `inaction_penalty` damage, which can end the game
//! - temporary attack bonuses revert
//! - units flagged for removal are compacted away
//! - leaving Draw tops the ending player's hand up to `hand_limit`,
//!   ticks standing effects, and passes the turn
//! - entering Move or Attack clears the new phase's flags and budget

use log::debug;

use super::victory;
use crate::cards::CardRegistry;
use crate::combat::apply_damage;
use crate::core::{GameState, Phase, PlayerId, RandomSource, RulesConfig};
use crate::effects::ActiveEffect;

/// What one call to [`advance_phase`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhaseChange {
    /// Player whose phase ended.
    pub player: PlayerId,
    pub from: Phase,

    /// Phase now in effect. Equals `from` if the game ended at the boundary.
    pub to: Phase,

    pub turn_switched: bool,

    /// Damage the summoner took for not attacking.
    pub inaction_damage: u32,

    /// Cards drawn by the ending player.
    pub cards_drawn: usize,

    /// Standing effects that ran out at the turn switch.
    pub expired: Vec<ActiveEffect>,
}

/// End the current phase and enter the next one.
pub fn advance_phase(
    state: &mut GameState,
    config: &RulesConfig,
    registry: &CardRegistry,
    rng: &mut dyn RandomSource,
) -> PhaseChange {
    let player = state.current_player;
    let from = state.current_phase;
    let mut change = PhaseChange {
        player,
        from,
        to: from,
        turn_switched: false,
        inaction_damage: 0,
        cards_drawn: 0,
        expired: Vec::new(),
    };

    if from == Phase::Attack && !state.has_targeted_enemy_this_phase {
        change.inaction_damage = cost_of_inaction(state, config, player);
        if state.game_over {
            return change;
        }
    }

    for unit in &mut state.units {
        unit.revert_attack();
    }
    state.compact();

    match from.next() {
        Some(next) => state.current_phase = next,
        None => {
            change.cards_drawn = draw_up(state, registry, rng, player, config.hand_limit);
            change.expired = state.active_effects.tick();
            for effect in &change.expired {
                state.log(format!("{} has worn off.", effect.name));
            }
            state.current_player = player.opponent();
            state.turn_number += 1;
            state.current_phase = Phase::FIRST;
            change.turn_switched = true;
            debug!("turn {} begins for {}", state.turn_number, state.current_player);
        }
    }

    enter_phase(state);
    change.to = state.current_phase;
    debug!("{} enters the {} phase", state.current_player, state.current_phase);
    change
}

/// Reset per-phase bookkeeping for the phase just entered.
fn enter_phase(state: &mut GameState) {
    let phase = state.current_phase;
    if !phase.resets_actions() {
        return;
    }

    let player = state.current_player;
    for unit in state.units.iter_mut().filter(|u| u.owner == player) {
        unit.reset_phase_flags(phase == Phase::Move);
    }
    if let Some(budget) = state.budget_mut(phase) {
        budget.clear();
    }
    if phase == Phase::Attack {
        state.has_targeted_enemy_this_phase = false;
    }
}

/// Apply the end-of-Attack penalty to `player`'s summoner.
///
/// Returns the damage that landed.
fn cost_of_inaction(state: &mut GameState, config: &RulesConfig, player: PlayerId) -> u32 {
    if config.inaction_penalty == 0 {
        return 0;
    }
    let Some(index) = state
        .summoner(player)
        .map(|s| s.id)
        .and_then(|id| state.unit_index(id))
    else {
        return 0;
    };

    let report = apply_damage(state, config, index, config.inaction_penalty, None);
    let line = format!(
        "Cost of inaction! {} takes {} damage.",
        state.units[index].label(),
        report.landed
    );
    debug!("{}", line);
    state.log(line);
    victory::settle(state);
    report.landed
}

/// Top `player`'s hand up to `limit` cards from their faction pool.
///
/// Returns the number of cards drawn.
pub fn draw_up(
    state: &mut GameState,
    registry: &CardRegistry,
    rng: &mut dyn RandomSource,
    player: PlayerId,
    limit: usize,
) -> usize {
    let faction = state.factions[player];
    let mut drawn = 0;
    while state.hand(player).len() < limit {
        let Some(template) = registry.draw(faction, rng) else {
            break;
        };
        state.add_card(player, template);
        drawn += 1;
    }
    if drawn > 0 {
        state.log(format!("{} draws {} cards.", player, drawn));
    }
    drawn
}
