//! Special abilities.
//!
//! Abilities are a closed set: each variant carries exactly the parameters
//! it needs, and combat dispatches on the variant with an exhaustive
//! `match`, so a new ability cannot silently fall through to default
//! behavior. A unit carries at most one ability.

use serde::{Deserialize, Serialize};

/// Predicate on the movement state of the combatants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrikeCondition {
    /// The attacker moved earlier this turn.
    AttackerMoved,
    /// The attacker has not moved this turn.
    AttackerStationary,
    /// The defender did not move during its last Move phase.
    DefenderStationary,
}

impl StrikeCondition {
    /// Evaluate against the combatants' move flags.
    #[must_use]
    pub fn holds(self, attacker_moved: bool, defender_moved: bool) -> bool {
        match self {
            StrikeCondition::AttackerMoved => attacker_moved,
            StrikeCondition::AttackerStationary => !attacker_moved,
            StrikeCondition::DefenderStationary => !defender_moved,
        }
    }
}

/// A unit's special ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    /// Dice hit on `threshold` or better instead of the default.
    Accuracy { threshold: u8 },

    /// Roll extra attack dice.
    ExtraDice { dice: u32 },

    /// Flat damage added when the condition holds and at least one die hit.
    BonusDamage { amount: u32, when: StrikeCondition },

    /// After the first hit, roll one more die.
    BonusStrike,

    /// Passive: incoming damage is reduced, but never below 1.
    Ward { reduction: u32 },

    /// On hit, push the defender one cell directly away from the attacker.
    Knockback,

    /// On hit, the defender cannot move in its owner's next Move phase.
    Pin,

    /// On hit, permanently lower the defender's attack (minimum 1).
    Weaken { amount: u32 },

    /// Extra mana when this unit destroys an enemy.
    Bounty { mana: u32 },

    /// After destroying an enemy, bank extra dice for this unit's next attack.
    Bloodlust { bonus: u32 },
}

impl Ability {
    /// Short name for battle log annotations.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Ability::Accuracy { .. } => "Accuracy",
            Ability::ExtraDice { .. } => "Extra Dice",
            Ability::BonusDamage { .. } => "Bonus Damage",
            Ability::BonusStrike => "Bonus Strike",
            Ability::Ward { .. } => "Ward",
            Ability::Knockback => "Knockback",
            Ability::Pin => "Pin",
            Ability::Weaken { .. } => "Weaken",
            Ability::Bounty { .. } => "Bounty",
            Ability::Bloodlust { .. } => "Bloodlust",
        }
    }

    /// Damage reduction this ability grants its bearer.
    #[must_use]
    pub fn damage_reduction(&self) -> u32 {
        match self {
            Ability::Ward { reduction } => *reduction,
            _ => 0,
        }
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ability::Accuracy { threshold } => write!(f, "Accuracy (hits on {}+)", threshold),
            Ability::ExtraDice { dice } => write!(f, "Extra Dice (+{})", dice),
            Ability::BonusDamage { amount, when } => {
                write!(f, "Bonus Damage (+{} when {:?})", amount, when)
            }
            Ability::Ward { reduction } => write!(f, "Ward (-{})", reduction),
            Ability::Weaken { amount } => write!(f, "Weaken (-{} attack)", amount),
            Ability::Bounty { mana } => write!(f, "Bounty (+{} mana)", mana),
            Ability::Bloodlust { bonus } => write!(f, "Bloodlust (+{} dice next attack)", bonus),
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strike_conditions() {
        assert!(StrikeCondition::AttackerMoved.holds(true, true));
        assert!(!StrikeCondition::AttackerMoved.holds(false, true));
        assert!(StrikeCondition::AttackerStationary.holds(false, true));
        assert!(StrikeCondition::DefenderStationary.holds(true, false));
        assert!(!StrikeCondition::DefenderStationary.holds(true, true));
    }

    #[test]
    fn test_damage_reduction_only_from_ward() {
        assert_eq!(Ability::Ward { reduction: 2 }.damage_reduction(), 2);
        assert_eq!(Ability::Knockback.damage_reduction(), 0);
        assert_eq!(Ability::Accuracy { threshold: 2 }.damage_reduction(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Ability::Accuracy { threshold: 2 }.to_string(), "Accuracy (hits on 2+)");
        assert_eq!(Ability::Pin.to_string(), "Pin");
    }
}
