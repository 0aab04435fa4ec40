//! Movement reachability.

use std::collections::{BTreeSet, VecDeque};

use rustc_hash::FxHashSet;

use super::eligibility::{can_act, Activity};
use crate::board::Cell;
use crate::core::{GameState, RulesConfig, UnitId};

/// Cells `unit` can move to right now.
///
/// Breadth-first search over empty cells, up to `config.move_range`
/// orthogonal steps. Occupied cells are never entered or passed through,
/// and the origin is excluded. Empty if the unit does not exist or fails
/// the eligibility gate.
///
/// ```
/// use summoner_tactics::board::Cell;
/// use summoner_tactics::cards::Faction;
/// use summoner_tactics::core::{GameState, PlayerId, PlayerMap, RulesConfig};
/// use summoner_tactics::targeting::reachable_move_cells;
/// use summoner_tactics::units::{Unit, UnitKind};
///
/// let config = RulesConfig::default();
/// let mut state = GameState::new(&config, PlayerMap::with_value(Faction::Horde));
/// let id = state.spawn_unit(|id| Unit::of_kind(id, UnitKind::Scout, PlayerId::A, Cell::new(0, 0)));
///
/// let cells = reachable_move_cells(&state, &config, id);
/// assert_eq!(cells.len(), 5);
/// assert!(!cells.contains(&Cell::new(0, 0)));
/// ```
#[must_use]
pub fn reachable_move_cells(state: &GameState, config: &RulesConfig, unit: UnitId) -> BTreeSet<Cell> {
    let mut reachable = BTreeSet::new();
    let Some(unit) = state.unit(unit) else {
        return reachable;
    };
    if !can_act(state, config, unit, Activity::Move) {
        return reachable;
    }

    let mut visited = FxHashSet::default();
    visited.insert(unit.cell);
    let mut frontier = VecDeque::from([(unit.cell, 0u32)]);

    while let Some((cell, steps)) = frontier.pop_front() {
        if steps == config.move_range {
            continue;
        }
        for next in state.board.neighbors(cell) {
            if !visited.insert(next) || !state.is_empty(next) {
                continue;
            }
            reachable.insert(next);
            frontier.push_back((next, steps + 1));
        }
    }

    reachable
}
