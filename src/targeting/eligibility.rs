//! The eligibility gate shared by movement and attack targeting.

use crate::core::{ActionError, GameState, Phase, RulesConfig};
use crate::units::Unit;

/// The two budgeted activities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Activity {
    Move,
    Attack,
}

impl Activity {
    /// The phase in which this activity is budgeted.
    #[must_use]
    pub fn phase(self) -> Phase {
        match self {
            Activity::Move => Phase::Move,
            Activity::Attack => Phase::Attack,
        }
    }

    /// Distinct-actor cap for one phase.
    #[must_use]
    pub fn cap(self, config: &RulesConfig) -> usize {
        match self {
            Activity::Move => config.max_movers_per_phase,
            Activity::Attack => config.max_attackers_per_phase,
        }
    }

    fn already_done(self, unit: &Unit) -> bool {
        match self {
            Activity::Move => unit.has_moved_this_phase,
            Activity::Attack => unit.has_attacked_this_phase,
        }
    }
}

/// Check that `unit` may perform `activity` right now.
///
/// The unit must be alive, must not have performed the activity this
/// phase, and the phase's distinct-actor budget must have room. Turn and
/// phase ownership are the caller's concern.
pub fn check_eligible(
    state: &GameState,
    config: &RulesConfig,
    unit: &Unit,
    activity: Activity,
) -> Result<(), ActionError> {
    if !unit.is_alive() || unit.pending_removal || activity.already_done(unit) {
        return Err(ActionError::UnitIneligible(unit.id));
    }

    let phase = activity.phase();
    let full = state
        .budget(phase)
        .is_some_and(|b| b.is_full(activity.cap(config)) && !b.contains(unit.id));
    if full {
        return Err(ActionError::ActionBudgetExhausted { phase });
    }
    Ok(())
}

/// Boolean form of [`check_eligible`].
#[must_use]
pub fn can_act(state: &GameState, config: &RulesConfig, unit: &Unit, activity: Activity) -> bool {
    check_eligible(state, config, unit, activity).is_ok()
}
