//! Fluent construction of a [`GameEngine`].
//!
//! Defaults: the standard rules, the standard card pools, Vanguard (P1)
//! against Horde (P2), and a `GameRng` seeded with 0.

use super::engine::GameEngine;
use crate::cards::{CardRegistry, Faction};
use crate::core::{ConfigError, GameRng, PlayerId, PlayerMap, RandomSource, RulesConfig};

/// Builder for [`GameEngine`].
///
/// ```
/// use summoner_tactics::cards::Faction;
/// use summoner_tactics::core::{PlayerId, RulesConfig};
/// use summoner_tactics::rules::GameBuilder;
///
/// let engine = GameBuilder::new()
///     .config(RulesConfig::default().with_starting_mana(8))
///     .factions(Faction::Horde, Faction::Horde)
///     .seed(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(engine.state().mana[PlayerId::B], 8);
/// assert_eq!(engine.state().factions[PlayerId::A], Faction::Horde);
/// ```
pub struct GameBuilder {
    config: RulesConfig,
    registry: CardRegistry,
    factions: PlayerMap<Faction>,
    rng: Option<Box<dyn RandomSource>>,
    seed: u64,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: RulesConfig::default(),
            registry: CardRegistry::standard(),
            factions: PlayerMap::new(|p| {
                if p == PlayerId::A {
                    Faction::Vanguard
                } else {
                    Faction::Horde
                }
            }),
            rng: None,
            seed: 0,
        }
    }

    #[must_use]
    pub fn config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn registry(mut self, registry: CardRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Factions for P1 and P2.
    #[must_use]
    pub fn factions(mut self, a: Faction, b: Faction) -> Self {
        self.factions = PlayerMap::new(|p| if p == PlayerId::A { a } else { b });
        self
    }

    /// Seed for the default `GameRng`. Ignored when a random source is set.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use `rng` instead of a seeded `GameRng`, e.g. scripted dice in tests.
    #[must_use]
    pub fn random_source(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Deal the opening position and hand over the engine.
    ///
    /// The config is checked here, so a variant loaded from JSON with an
    /// unusable board comes back as an error.
    pub fn build(self) -> Result<GameEngine, ConfigError> {
        let rng = self
            .rng
            .unwrap_or_else(|| Box::new(GameRng::new(self.seed)));
        GameEngine::new(self.config, self.registry, self.factions, rng)
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}
