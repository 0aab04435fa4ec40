//! Cards in hand.
//!
//! A `Card` is one drawn copy of a template, tagged with a `CardId` that
//! is unique for the whole game so intents can name it unambiguously.

use serde::{Deserialize, Serialize};

use super::definition::{CardKind, CardTemplate};
use crate::board::Cell;
use crate::core::{CardId, Phase, PlayerId, UnitId};
use crate::units::Unit;

/// A card held in a player's hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub template: CardTemplate,
}

impl Card {
    #[must_use]
    pub fn new(id: CardId, template: CardTemplate) -> Self {
        Self { id, template }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.template.name
    }

    #[must_use]
    pub fn cost(&self) -> u32 {
        self.template.cost
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.template.phase
    }

    #[must_use]
    pub fn is_event(&self) -> bool {
        self.template.is_event()
    }

    /// Can the card be paid for out of `mana`?
    #[must_use]
    pub fn is_affordable(&self, mana: u32) -> bool {
        self.cost() <= mana
    }

    /// Instantiate the unit this card summons.
    ///
    /// Returns `None` for event cards.
    #[must_use]
    pub fn create_unit(&self, id: UnitId, owner: PlayerId, cell: Cell) -> Option<Unit> {
        match &self.template.kind {
            CardKind::Unit {
                unit_kind,
                stats,
                ability,
            } => Some(Unit::new(
                id,
                self.template.name.clone(),
                *unit_kind,
                owner,
                cell,
                *stats,
                *ability,
            )),
            CardKind::Event(_) => None,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{} mana]", self.template.name, self.template.cost)
    }
}
