//! Card templates - static card data.
//!
//! A `CardTemplate` describes what a card does: either the unit it
//! summons (stats, kind, optional ability) or the event it resolves.
//! Every template records its mana cost and the phase in which it may
//! be played.
//!
//! Per-copy data (the `CardId` of a card sitting in a hand) lives in
//! [`Card`](super::Card).

use serde::{Deserialize, Serialize};

use crate::core::Phase;
use crate::effects::EventEffect;
use crate::units::{Ability, UnitKind, UnitStats};

/// What playing the card produces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    /// Summons a unit next to the owner's summoner.
    Unit {
        unit_kind: UnitKind,
        stats: UnitStats,
        ability: Option<Ability>,
    },

    /// Resolves an event effect.
    Event(EventEffect),
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use summoner_tactics::cards::CardTemplate;
/// use summoner_tactics::core::Phase;
/// use summoner_tactics::units::{Ability, UnitKind};
///
/// let guard = CardTemplate::unit(UnitKind::Guard)
///     .with_ability(Ability::Ward { reduction: 1 })
///     .with_phase(Phase::Build);
///
/// assert_eq!(guard.cost, 4);
/// assert_eq!(guard.phase, Phase::Build);
/// assert!(!guard.is_event());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTemplate {
    /// Display name, also used for summoned units.
    pub name: String,

    /// Mana cost.
    pub cost: u32,

    /// The only phase in which the card can be played.
    pub phase: Phase,

    pub kind: CardKind,
}

impl CardTemplate {
    /// A unit card with the kind's default stats and cost, played in Summon.
    #[must_use]
    pub fn unit(unit_kind: UnitKind) -> Self {
        Self {
            name: unit_kind.to_string(),
            cost: unit_kind.base_cost(),
            phase: Phase::Summon,
            kind: CardKind::Unit {
                unit_kind,
                stats: unit_kind.base_stats(),
                ability: None,
            },
        }
    }

    /// An event card.
    #[must_use]
    pub fn event(name: impl Into<String>, cost: u32, phase: Phase, effect: EventEffect) -> Self {
        Self {
            name: name.into(),
            cost,
            phase,
            kind: CardKind::Event(effect),
        }
    }

    /// Attach an ability to a unit card (builder pattern).
    ///
    /// Has no effect on event cards.
    #[must_use]
    pub fn with_ability(mut self, new_ability: Ability) -> Self {
        if let CardKind::Unit { ability, .. } = &mut self.kind {
            *ability = Some(new_ability);
        }
        self
    }

    #[must_use]
    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn is_event(&self) -> bool {
        matches!(self.kind, CardKind::Event(_))
    }

    /// The event effect, if this is an event card.
    #[must_use]
    pub fn event_effect(&self) -> Option<EventEffect> {
        match self.kind {
            CardKind::Event(effect) => Some(effect),
            CardKind::Unit { .. } => None,
        }
    }

    /// The summoned unit's ability, if any.
    #[must_use]
    pub fn ability(&self) -> Option<Ability> {
        match self.kind {
            CardKind::Unit { ability, .. } => ability,
            CardKind::Event(_) => None,
        }
    }
}
