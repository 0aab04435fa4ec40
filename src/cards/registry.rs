//! Faction card pools.
//!
//! The `CardRegistry` maps each `Faction` to the templates its players
//! draw from. Draws pick a template uniformly at random through the
//! game's `RandomSource`, so a seeded game always deals the same hands.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::CardTemplate;
use crate::core::{Phase, RandomSource};
use crate::effects::{Aura, EventEffect};
use crate::units::{Ability, StrikeCondition, UnitKind};

/// A player's faction, which selects the card pool they draw from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    /// Disciplined troops: accuracy, wards, and support magic.
    Vanguard,
    /// Brutal warbands: knockback, pins, and bounties.
    Horde,
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Registry of faction card pools.
///
/// ## Example
///
/// ```
/// use summoner_tactics::cards::{CardRegistry, CardTemplate, Faction};
/// use summoner_tactics::units::UnitKind;
///
/// let mut registry = CardRegistry::new();
/// registry.register(Faction::Horde, CardTemplate::unit(UnitKind::Brute));
///
/// assert_eq!(registry.pool(Faction::Horde).len(), 1);
/// assert!(registry.pool(Faction::Vanguard).is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    pools: FxHashMap<Faction, Vec<CardTemplate>>,
}

impl CardRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard two-faction card pool.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();

        let fireball = CardTemplate::event(
            "Fireball",
            2,
            Phase::Magic,
            EventEffect::DirectDamage { amount: 2, radius: 2 },
        );

        registry.register_all(
            Faction::Vanguard,
            [
                CardTemplate::unit(UnitKind::Archer).with_ability(Ability::Accuracy { threshold: 2 }),
                CardTemplate::unit(UnitKind::Warrior).with_ability(Ability::BonusStrike),
                CardTemplate::unit(UnitKind::Guard)
                    .with_ability(Ability::Ward { reduction: 1 })
                    .with_phase(Phase::Build),
                CardTemplate::unit(UnitKind::Scout),
                fireball.clone(),
                CardTemplate::event(
                    "Shield Wall",
                    2,
                    Phase::Magic,
                    EventEffect::Standing(Aura::Ward { reduction: 1 }),
                ),
                CardTemplate::event("Battle Cry", 1, Phase::Attack, EventEffect::Rally { bonus: 1 }),
                CardTemplate::event("Mend", 1, Phase::Magic, EventEffect::Mend { amount: 2 }),
            ],
        );

        registry.register_all(
            Faction::Horde,
            [
                CardTemplate::unit(UnitKind::Brute).with_ability(Ability::Knockback),
                CardTemplate::unit(UnitKind::Spearman).with_ability(Ability::Pin),
                CardTemplate::unit(UnitKind::Scout).with_ability(Ability::Bounty { mana: 1 }),
                CardTemplate::unit(UnitKind::Warrior).with_ability(Ability::Bloodlust { bonus: 1 }),
                CardTemplate::unit(UnitKind::Archer).with_ability(Ability::BonusDamage {
                    amount: 1,
                    when: StrikeCondition::DefenderStationary,
                }),
                CardTemplate::unit(UnitKind::Guard)
                    .with_ability(Ability::Weaken { amount: 1 })
                    .with_phase(Phase::Build),
                fireball,
                CardTemplate::event(
                    "War Drums",
                    3,
                    Phase::Magic,
                    EventEffect::Standing(Aura::ExtraDice { dice: 1 }),
                ),
            ],
        );

        registry
    }

    /// Add a template to a faction's pool.
    pub fn register(&mut self, faction: Faction, template: CardTemplate) {
        self.pools.entry(faction).or_default().push(template);
    }

    /// Add several templates to a faction's pool.
    pub fn register_all(
        &mut self,
        faction: Faction,
        templates: impl IntoIterator<Item = CardTemplate>,
    ) {
        self.pools.entry(faction).or_default().extend(templates);
    }

    /// A faction's templates in registration order.
    #[must_use]
    pub fn pool(&self, faction: Faction) -> &[CardTemplate] {
        self.pools.get(&faction).map_or(&[], Vec::as_slice)
    }

    /// Draw a uniformly random template from a faction's pool.
    ///
    /// Returns `None` if the pool is empty.
    pub fn draw(&self, faction: Faction, rng: &mut dyn RandomSource) -> Option<CardTemplate> {
        let pool = self.pool(faction);
        if pool.is_empty() {
            return None;
        }
        pool.get(rng.pick_index(pool.len())).cloned()
    }

    /// Total number of templates across all pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
