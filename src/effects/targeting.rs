//! Legal targets for event cards.

use std::collections::BTreeSet;

use super::effect::EventEffect;
use crate::board::Cell;
use crate::core::{ActionError, GameState, PlayerId};

/// Cells `owner` may target with `effect`.
///
/// - `DirectDamage`: living enemies within `radius` (Manhattan) of at
///   least one living friendly unit
/// - `Mend`: wounded living friendly units
/// - untargeted effects: always empty
#[must_use]
pub fn event_target_cells(state: &GameState, owner: PlayerId, effect: EventEffect) -> BTreeSet<Cell> {
    match effect {
        EventEffect::DirectDamage { radius, .. } => state
            .living_units(owner.opponent())
            .filter(|enemy| {
                state
                    .living_units(owner)
                    .any(|friend| friend.cell.distance(enemy.cell) <= radius)
            })
            .map(|enemy| enemy.cell)
            .collect(),
        EventEffect::Mend { .. } => state
            .living_units(owner)
            .filter(|u| u.current_life < u.max_life)
            .map(|u| u.cell)
            .collect(),
        EventEffect::Rally { .. } | EventEffect::Standing(_) => BTreeSet::new(),
    }
}

/// Validate the target supplied with an event.
///
/// Targeted effects need a cell from [`event_target_cells`]; untargeted
/// effects must not be given one.
pub fn check_event_target(
    state: &GameState,
    owner: PlayerId,
    effect: EventEffect,
    target: Option<Cell>,
) -> Result<(), ActionError> {
    match (effect.needs_target(), target) {
        (true, Some(cell)) if event_target_cells(state, owner, effect).contains(&cell) => Ok(()),
        (false, None) => Ok(()),
        _ => Err(ActionError::IllegalTarget),
    }
}
