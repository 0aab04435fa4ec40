//! Card plays: summons, scraps, and events.
//!
//! Each play is split into a `validate_*` step that only reads the state
//! and a `commit_*` step that performs the mutation, so a rejected play
//! never leaves a partial change behind.

use std::collections::BTreeSet;

use log::debug;

use super::victory;
use crate::board::Cell;
use crate::cards::Card;
use crate::core::{ActionError, CardId, GameState, Phase, PlayerId, RulesConfig, UnitId};
use crate::effects::{check_event_target, resolve_event, EventEffect};
use crate::units::Unit;

/// The only phase in which cards can be scrapped.
pub const SCRAP_PHASE: Phase = Phase::Magic;

/// Look up a card in the current player's hand.
fn hand_card(state: &GameState, card: CardId) -> Result<&Card, ActionError> {
    match state.find_card(card) {
        Some((holder, found)) if holder == state.current_player => Ok(found),
        Some(_) => Err(ActionError::NotYourTurn),
        None => Err(ActionError::UnknownCard(card)),
    }
}

fn check_phase(state: &GameState, card: &Card, action: &'static str) -> Result<(), ActionError> {
    if state.current_phase == card.phase() {
        Ok(())
    } else {
        Err(ActionError::WrongPhase {
            action,
            phase: state.current_phase,
        })
    }
}

fn check_mana(state: &GameState, player: PlayerId, card: &Card) -> Result<(), ActionError> {
    let have = state.mana[player];
    if card.is_affordable(have) {
        Ok(())
    } else {
        Err(ActionError::InsufficientMana {
            have,
            need: card.cost(),
        })
    }
}

/// Empty cells orthogonally adjacent to `player`'s living summoner.
#[must_use]
pub fn summon_cells(state: &GameState, player: PlayerId) -> BTreeSet<Cell> {
    let Some(summoner) = state.summoner(player) else {
        return BTreeSet::new();
    };
    state
        .board
        .neighbors(summoner.cell)
        .into_iter()
        .filter(|&cell| state.is_empty(cell))
        .collect()
}

/// Check that the current player may summon `card` at `cell`.
pub fn validate_summon(state: &GameState, card: CardId, cell: Cell) -> Result<(), ActionError> {
    let player = state.current_player;
    let found = hand_card(state, card)?;
    if found.is_event() {
        return Err(ActionError::WrongCardType(card));
    }
    check_phase(state, found, "summon")?;
    check_mana(state, player, found)?;
    if state.summoner(player).is_none() {
        return Err(ActionError::NoSummoner);
    }
    if !summon_cells(state, player).contains(&cell) {
        return Err(ActionError::IllegalDestination);
    }
    Ok(())
}

/// Pay for `card`, remove it from hand, and place its unit at `cell`.
pub fn commit_summon(state: &mut GameState, card: CardId, cell: Cell) -> Result<Unit, ActionError> {
    let player = state.current_player;
    let played = hand_card(state, card)?.clone();
    let blueprint = played
        .create_unit(UnitId::new(0), player, cell)
        .ok_or(ActionError::WrongCardType(card))?;

    state.take_card(player, card);
    state.mana[player] -= played.cost();
    let id = state.spawn_unit(|id| Unit { id, ..blueprint });

    let line = format!("{} summons {} at {}.", player, played.name(), cell);
    debug!("{}", line);
    state.log(line);
    state
        .unit(id)
        .cloned()
        .ok_or(ActionError::UnitIneligible(id))
}

/// Check that the current player may scrap `card`.
pub fn validate_scrap(state: &GameState, card: CardId) -> Result<(), ActionError> {
    hand_card(state, card)?;
    if state.current_phase != SCRAP_PHASE {
        return Err(ActionError::WrongPhase {
            action: "scrap",
            phase: state.current_phase,
        });
    }
    Ok(())
}

/// Discard `card` for mana.
pub fn commit_scrap(state: &mut GameState, config: &RulesConfig, card: CardId) -> Result<(), ActionError> {
    let player = state.current_player;
    let scrapped = state
        .take_card(player, card)
        .ok_or(ActionError::UnknownCard(card))?;
    state.mana[player] += config.scrap_reward;

    let line = format!("{} scraps {} for +{} mana.", player, scrapped.name(), config.scrap_reward);
    debug!("{}", line);
    state.log(line);
    Ok(())
}

/// Check that the current player may play event `card` at `target`.
///
/// Returns the card's effect.
pub fn validate_event(
    state: &GameState,
    card: CardId,
    target: Option<Cell>,
) -> Result<EventEffect, ActionError> {
    let player = state.current_player;
    let found = hand_card(state, card)?;
    let effect = found
        .template
        .event_effect()
        .ok_or(ActionError::WrongCardType(card))?;
    check_phase(state, found, "event")?;
    check_mana(state, player, found)?;
    check_event_target(state, player, effect, target)?;
    Ok(effect)
}

/// Pay for event `card`, remove it from hand, and resolve it.
pub fn commit_event(
    state: &mut GameState,
    config: &RulesConfig,
    card: CardId,
    target: Option<Cell>,
) -> Result<(), ActionError> {
    let player = state.current_player;
    let played = state
        .take_card(player, card)
        .ok_or(ActionError::UnknownCard(card))?;
    let effect = played
        .template
        .event_effect()
        .ok_or(ActionError::WrongCardType(card))?;
    state.mana[player] -= played.cost();

    let line = resolve_event(state, config, player, played.name(), effect, target);
    let line = format!("{} plays {}. {}", player, played.name(), line);
    debug!("{}", line);
    state.log(line);
    victory::settle(state);
    Ok(())
}
