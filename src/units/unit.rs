//! Units: the combatants on the board.
//!
//! A `Unit` is created when a summon commits (or at game start for the
//! summoners). When its life reaches zero it is flagged `pending_removal`
//! but stays in the roster until the next refresh, so effects resolving in
//! the same action can still read it.

use serde::{Deserialize, Serialize};

use super::ability::Ability;
use crate::board::Cell;
use crate::core::{PlayerId, RulesConfig, UnitId};

/// Unit category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    Summoner,
    Archer,
    Warrior,
    Spearman,
    Brute,
    Scout,
    Guard,
}

impl UnitKind {
    /// Every recruitable kind (excludes the summoner).
    pub const RECRUITS: [UnitKind; 6] = [
        UnitKind::Archer,
        UnitKind::Warrior,
        UnitKind::Spearman,
        UnitKind::Brute,
        UnitKind::Scout,
        UnitKind::Guard,
    ];

    /// Default stat block.
    #[must_use]
    pub fn base_stats(self) -> UnitStats {
        let (attack, life, range) = match self {
            UnitKind::Summoner => (2, 6, RangeType::Melee),
            UnitKind::Archer => (1, 3, RangeType::Ranged),
            UnitKind::Warrior => (3, 4, RangeType::Melee),
            UnitKind::Spearman => (2, 3, RangeType::Ranged),
            UnitKind::Brute => (3, 5, RangeType::Melee),
            UnitKind::Scout => (1, 2, RangeType::Ranged),
            UnitKind::Guard => (2, 5, RangeType::Melee),
        };
        UnitStats { attack, life, range }
    }

    /// Default summon cost.
    #[must_use]
    pub fn base_cost(self) -> u32 {
        match self {
            UnitKind::Summoner => 0,
            UnitKind::Scout => 2,
            UnitKind::Archer | UnitKind::Spearman => 3,
            UnitKind::Warrior | UnitKind::Guard => 4,
            UnitKind::Brute => 5,
        }
    }
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Melee units strike adjacent cells; ranged units shoot along lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeType {
    Melee,
    Ranged,
}

impl RangeType {
    /// Attack radius under `config`.
    #[must_use]
    pub fn radius(self, config: &RulesConfig) -> u32 {
        match self {
            RangeType::Melee => config.melee_range,
            RangeType::Ranged => config.ranged_range,
        }
    }
}

/// A stat block for a unit kind or card template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitStats {
    pub attack: u32,
    pub life: u32,
    pub range: RangeType,
}

/// A unit on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    pub owner: PlayerId,
    pub cell: Cell,
    pub kind: UnitKind,
    pub range: RangeType,

    /// Dice rolled per attack, including temporary modifiers.
    pub attack_value: u32,

    /// Attack value without temporary modifiers.
    pub base_attack: u32,

    pub max_life: u32,
    pub current_life: u32,

    pub has_moved_this_phase: bool,
    pub has_attacked_this_phase: bool,

    /// Set by `Pin`: the next Move phase starts with the move flag raised.
    pub move_locked: bool,

    /// Extra dice earned by `Bloodlust`, spent on this unit's next attack.
    /// Phase boundaries leave it alone.
    pub banked_dice: u32,

    pub is_summoner: bool,
    pub ability: Option<Ability>,

    /// Destroyed this action; compacted away at the next refresh.
    pub pending_removal: bool,
}

impl Unit {
    /// Create a unit from a stat block.
    #[must_use]
    pub fn new(
        id: UnitId,
        name: impl Into<String>,
        kind: UnitKind,
        owner: PlayerId,
        cell: Cell,
        stats: UnitStats,
        ability: Option<Ability>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            owner,
            cell,
            kind,
            range: stats.range,
            attack_value: stats.attack,
            base_attack: stats.attack,
            max_life: stats.life,
            current_life: stats.life,
            has_moved_this_phase: false,
            has_attacked_this_phase: false,
            move_locked: false,
            banked_dice: 0,
            is_summoner: kind == UnitKind::Summoner,
            ability,
            pending_removal: false,
        }
    }

    /// Create a unit with its kind's default stats and no ability.
    #[must_use]
    pub fn of_kind(id: UnitId, kind: UnitKind, owner: PlayerId, cell: Cell) -> Self {
        Self::new(id, kind.to_string(), kind, owner, cell, kind.base_stats(), None)
    }

    /// Create a player's summoner.
    #[must_use]
    pub fn summoner(id: UnitId, owner: PlayerId, cell: Cell, attack: u32, life: u32) -> Self {
        let stats = UnitStats {
            attack,
            life,
            range: RangeType::Melee,
        };
        Self::new(id, "Summoner", UnitKind::Summoner, owner, cell, stats, None)
    }

    /// Attach an ability (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.ability = Some(ability);
        self
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.current_life > 0
    }

    /// Attack radius under `config`.
    #[must_use]
    pub fn attack_radius(&self, config: &RulesConfig) -> u32 {
        self.range.radius(config)
    }

    /// Apply incoming damage and return the amount that actually landed.
    ///
    /// The bearer's own `Ward` plus `aura_reduction` is subtracted first;
    /// any positive incoming damage still lands at least 1. Life floors at 0.
    pub fn take_damage(&mut self, amount: u32, aura_reduction: u32) -> u32 {
        if amount == 0 {
            return 0;
        }
        let own = self.ability.map_or(0, |a| a.damage_reduction());
        let landed = amount.saturating_sub(own + aura_reduction).max(1);
        let landed = landed.min(self.current_life);
        self.current_life -= landed;
        landed
    }

    /// Restore life up to the maximum and return the amount healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_life - self.current_life);
        self.current_life += healed;
        healed
    }

    /// Temporarily raise attack until the next phase boundary.
    pub fn boost_attack(&mut self, bonus: u32) {
        self.attack_value += bonus;
    }

    /// Is attack currently modified by a temporary effect?
    #[must_use]
    pub fn has_temporary_attack(&self) -> bool {
        self.attack_value != self.base_attack
    }

    /// Drop temporary attack modifiers.
    pub fn revert_attack(&mut self) {
        self.attack_value = self.base_attack;
    }

    /// Permanently lower attack, never below 1. Returns the amount lost.
    ///
    /// A unit that never had attack dice keeps none.
    pub fn weaken(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.base_attack.saturating_sub(1));
        self.base_attack -= lost;
        self.attack_value = self.attack_value.saturating_sub(lost);
        lost
    }

    /// Clear per-phase flags at the start of a Move or Attack phase.
    ///
    /// A pinned unit starts its Move phase already marked as moved.
    pub fn reset_phase_flags(&mut self, entering_move: bool) {
        if entering_move {
            self.has_moved_this_phase = self.move_locked;
            self.move_locked = false;
        } else {
            self.has_attacked_this_phase = false;
        }
    }

    /// Owner tag used in battle log lines, e.g. `Archer(P1)`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}({})", self.name, self.owner)
    }
}
