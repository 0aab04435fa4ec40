//! Rules configuration.
//!
//! Every tunable constant of the rule engine lives in `RulesConfig`.
//! The defaults reproduce the standard game: a 6×8 board, 5 starting mana,
//! 3-card opening hands topped up to 5 at the end of each turn, and a
//! 3-unit action budget per Move and Attack phase.
//!
//! Configs are plain serde data, so a presentation layer can load
//! variants from JSON without touching engine code. Because a decoded
//! config skips the `with_*` setters, [`RulesConfig::validate`] runs once
//! when an engine is built.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Complete rules configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Board height.
    pub rows: i32,

    /// Board width.
    pub cols: i32,

    /// Mana each player starts with.
    pub starting_mana: u32,

    /// Cards dealt to each player at game start.
    pub initial_hand_size: usize,

    /// Hand size restored at the end of a player's Draw phase.
    pub hand_limit: usize,

    /// Maximum distinct units that may move in one Move phase.
    pub max_movers_per_phase: usize,

    /// Maximum distinct units that may attack in one Attack phase.
    pub max_attackers_per_phase: usize,

    /// Orthogonal steps a unit may take in one move.
    pub move_range: u32,

    /// Attack radius of melee units.
    pub melee_range: u32,

    /// Attack radius of ranged units.
    pub ranged_range: u32,

    /// Faces on a combat die.
    pub die_sides: u8,

    /// Minimum face that scores a hit without abilities.
    pub hit_threshold: u8,

    /// Mana awarded to a player whose unit destroys an enemy.
    pub kill_reward: u32,

    /// Mana gained by scrapping a card from hand.
    pub scrap_reward: u32,

    /// Damage a summoner takes when its Attack phase ends without an attack.
    pub inaction_penalty: u32,

    /// Summoner attack dice.
    pub summoner_attack: u32,

    /// Summoner life.
    pub summoner_life: u32,

    /// Turns a standing event stays active, counting the turn it was played in.
    pub standing_effect_turns: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 8,
            starting_mana: 5,
            initial_hand_size: 3,
            hand_limit: 5,
            max_movers_per_phase: 3,
            max_attackers_per_phase: 3,
            move_range: 2,
            melee_range: 1,
            ranged_range: 3,
            die_sides: 6,
            hit_threshold: 3,
            kill_reward: 1,
            scrap_reward: 1,
            inaction_penalty: 1,
            summoner_attack: 2,
            summoner_life: 6,
            standing_effect_turns: 2,
        }
    }
}

impl RulesConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board dimensions.
    #[must_use]
    pub fn with_board(mut self, rows: i32, cols: i32) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the starting mana.
    #[must_use]
    pub fn with_starting_mana(mut self, mana: u32) -> Self {
        self.starting_mana = mana;
        self
    }

    /// Set the opening hand size and the end-of-turn hand limit.
    #[must_use]
    pub fn with_hand_sizes(mut self, initial: usize, limit: usize) -> Self {
        self.initial_hand_size = initial;
        self.hand_limit = limit;
        self
    }

    /// Set the per-phase actor budgets.
    #[must_use]
    pub fn with_action_budget(mut self, movers: usize, attackers: usize) -> Self {
        self.max_movers_per_phase = movers;
        self.max_attackers_per_phase = attackers;
        self
    }

    /// Set the summoner stat block.
    #[must_use]
    pub fn with_summoner(mut self, attack: u32, life: u32) -> Self {
        self.summoner_attack = attack;
        self.summoner_life = life;
        self
    }

    /// Set the cost-of-inaction penalty.
    #[must_use]
    pub fn with_inaction_penalty(mut self, damage: u32) -> Self {
        self.inaction_penalty = damage;
        self
    }

    /// Check the values a game cannot start with.
    ///
    /// The board needs two rows so the summoners start on different home
    /// rows, a die needs at least one face, and a summoner must start alive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 2 || self.cols < 1 {
            return Err(ConfigError::BoardTooSmall {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.die_sides == 0 {
            return Err(ConfigError::NoDieFaces);
        }
        if self.summoner_life == 0 {
            return Err(ConfigError::SummonerStartsDead);
        }
        Ok(())
    }
}
