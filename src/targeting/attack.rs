//! Attack targeting.

use std::collections::BTreeSet;

use super::eligibility::{can_act, Activity};
use crate::board::{Cell, Direction};
use crate::core::{GameState, RulesConfig, UnitId};

/// Cells holding an enemy that `unit` can attack right now.
///
/// Each of the four directions is scanned outward up to the unit's attack
/// radius (1 for melee, 3 for ranged). The scan stops at the first
/// occupied cell; that cell is a target if it holds a living enemy, and
/// nothing behind it is. Melee attacks are the radius-1 case of the same
/// rule.
///
/// Empty if the unit does not exist or fails the eligibility gate.
#[must_use]
pub fn valid_attack_cells(state: &GameState, config: &RulesConfig, unit: UnitId) -> BTreeSet<Cell> {
    let mut targets = BTreeSet::new();
    let Some(attacker) = state.unit(unit) else {
        return targets;
    };
    if !can_act(state, config, attacker, Activity::Attack) {
        return targets;
    }

    let radius = attacker.attack_radius(config) as i32;
    for dir in Direction::ALL {
        for steps in 1..=radius {
            let cell = attacker.cell.step(dir, steps);
            if !state.board.is_on_board(cell) {
                break;
            }
            if let Some(occupant) = state.unit_at(cell) {
                if occupant.owner != attacker.owner {
                    targets.insert(cell);
                }
                break;
            }
        }
    }

    targets
}

/// Is `cell` a legal target for `unit` in the current state?
#[must_use]
pub fn is_valid_attack(state: &GameState, config: &RulesConfig, unit: UnitId, cell: Cell) -> bool {
    valid_attack_cells(state, config, unit).contains(&cell)
}
