//! The game engine: single owner and single writer of the game state.
//!
//! `GameEngine` is the boundary a presentation layer talks to. Intents go
//! in through the `request_*` methods and `end_phase`; read-only queries
//! and `snapshot` come out. Every request is validated in full before
//! anything is written, so a rejected request leaves the state exactly as
//! it was and adds nothing to the battle log.

use std::collections::BTreeSet;

use log::{debug, info};

use super::builder::GameBuilder;
use super::play;
use super::turn::{self, PhaseChange};
use super::victory::{self, GameResult};
use crate::board::Cell;
use crate::cards::{CardRegistry, Faction};
use crate::combat::{resolve_attack, CombatResult};
use crate::core::{
    ActionError, CardId, ConfigError, GameRng, GameState, Intent, Phase, PlayerId, PlayerMap, RandomSource,
    RulesConfig, UnitId,
};
use crate::effects;
use crate::targeting::{self, check_eligible, Activity};
use crate::units::Unit;

/// What an accepted intent produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Moved(Unit),
    Attacked(CombatResult),
    Summoned(Unit),
    Scrapped,
    EventPlayed,
    PhaseEnded(PhaseChange),
}

/// Rules engine for one game.
///
/// ## Example
///
/// ```
/// use summoner_tactics::core::{Phase, PlayerId};
/// use summoner_tactics::rules::GameEngine;
///
/// let mut engine = GameEngine::builder().seed(7).build().unwrap();
/// assert_eq!(engine.state().current_phase, Phase::Summon);
/// assert_eq!(engine.state().hand(PlayerId::A).len(), 3);
///
/// engine.end_phase().unwrap();
/// assert_eq!(engine.state().current_phase, Phase::Move);
/// ```
pub struct GameEngine {
    config: RulesConfig,
    registry: CardRegistry,
    rng: Box<dyn RandomSource>,
    state: GameState,
}

impl GameEngine {
    /// Start a new game: place both summoners and deal opening hands.
    ///
    /// Fails if `config` cannot hold a game; nothing is dealt in that case.
    pub fn new(
        config: RulesConfig,
        registry: CardRegistry,
        factions: PlayerMap<Faction>,
        mut rng: Box<dyn RandomSource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = opening_state(&config, &registry, factions, rng.as_mut());
        Ok(Self {
            config,
            registry,
            rng,
            state,
        })
    }

    /// Resume from an arbitrary position.
    #[must_use]
    pub fn from_state(
        config: RulesConfig,
        registry: CardRegistry,
        state: GameState,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            config,
            registry,
            rng,
            state,
        }
    }

    #[must_use]
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// An owned copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    /// The outcome, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.state.game_over {
            return None;
        }
        Some(match self.state.winner {
            Some(player) => GameResult::Winner(player),
            None => GameResult::Draw,
        })
    }

    /// Cells `unit` can move to right now.
    #[must_use]
    pub fn reachable_move_cells(&self, unit: UnitId) -> BTreeSet<Cell> {
        targeting::reachable_move_cells(&self.state, &self.config, unit)
    }

    /// Cells `unit` can attack right now.
    #[must_use]
    pub fn valid_attack_cells(&self, unit: UnitId) -> BTreeSet<Cell> {
        targeting::valid_attack_cells(&self.state, &self.config, unit)
    }

    /// Placement cells for unit card `card`, for whichever player holds it.
    #[must_use]
    pub fn valid_summon_cells(&self, card: CardId) -> BTreeSet<Cell> {
        match self.state.find_card(card) {
            Some((holder, found)) if !found.is_event() => play::summon_cells(&self.state, holder),
            _ => BTreeSet::new(),
        }
    }

    /// Legal target cells for event card `card`.
    #[must_use]
    pub fn event_target_cells(&self, card: CardId) -> BTreeSet<Cell> {
        self.state
            .find_card(card)
            .and_then(|(holder, found)| {
                found
                    .template
                    .event_effect()
                    .map(|effect| effects::event_target_cells(&self.state, holder, effect))
            })
            .unwrap_or_default()
    }

    /// Every intent the current player could make right now.
    ///
    /// Each returned intent is accepted if submitted against the current
    /// state. `EndPhase` is always included while the game is running.
    #[must_use]
    pub fn legal_intents(&self) -> Vec<Intent> {
        let mut intents = Vec::new();
        if self.state.game_over {
            return intents;
        }
        let player = self.state.current_player;
        let phase = self.state.current_phase;

        for unit in self.state.living_units(player) {
            match phase {
                Phase::Move => intents.extend(
                    self.reachable_move_cells(unit.id)
                        .into_iter()
                        .map(|to| Intent::Move { unit: unit.id, to }),
                ),
                Phase::Attack => intents.extend(
                    self.valid_attack_cells(unit.id)
                        .into_iter()
                        .map(|target| Intent::Attack {
                            attacker: unit.id,
                            target,
                        }),
                ),
                _ => {}
            }
        }

        let mana = self.state.mana[player];
        for card in self.state.hand(player) {
            if card.phase() == phase && card.is_affordable(mana) {
                match card.template.event_effect() {
                    Some(effect) if effect.needs_target() => intents.extend(
                        effects::event_target_cells(&self.state, player, effect)
                            .into_iter()
                            .map(|cell| Intent::PlayEvent {
                                card: card.id,
                                target: Some(cell),
                            }),
                    ),
                    Some(_) => intents.push(Intent::PlayEvent {
                        card: card.id,
                        target: None,
                    }),
                    None => intents.extend(
                        play::summon_cells(&self.state, player)
                            .into_iter()
                            .map(|at| Intent::Summon { card: card.id, at }),
                    ),
                }
            }
            if phase == play::SCRAP_PHASE {
                intents.push(Intent::Scrap { card: card.id });
            }
        }

        intents.push(Intent::EndPhase);
        intents
    }

    // === Intents ===

    /// Drop destroyed units from the roster.
    ///
    /// Every accepted request and every phase boundary refreshes before
    /// mutating, so destroyed units linger for exactly one action.
    pub fn refresh(&mut self) -> usize {
        self.state.compact()
    }

    /// Submit any intent.
    pub fn apply(&mut self, intent: Intent) -> Result<Outcome, ActionError> {
        match intent {
            Intent::Move { unit, to } => self.request_move(unit, to).map(Outcome::Moved),
            Intent::Attack { attacker, target } => {
                self.request_attack(attacker, target).map(Outcome::Attacked)
            }
            Intent::Summon { card, at } => self.request_summon(card, at).map(Outcome::Summoned),
            Intent::Scrap { card } => self.request_scrap(card).map(|()| Outcome::Scrapped),
            Intent::PlayEvent { card, target } => {
                self.request_play_event(card, target).map(|()| Outcome::EventPlayed)
            }
            Intent::EndPhase => self.advance().map(Outcome::PhaseEnded),
        }
    }

    /// Move `unit` to `to`.
    pub fn request_move(&mut self, unit: UnitId, to: Cell) -> Result<Unit, ActionError> {
        let intent = Intent::Move { unit, to };
        self.validate_move(unit, to).map_err(|e| rejected(intent, e))?;

        self.refresh();
        let player = self.state.current_player;
        let moved = self
            .state
            .unit_mut(unit)
            .ok_or(ActionError::UnitIneligible(unit))?;
        let from = moved.cell;
        moved.cell = to;
        moved.has_moved_this_phase = true;
        let moved = moved.clone();
        self.state.units_moved_this_phase.record(unit);

        let line = format!("{} moves {} -> {}.", moved.label(), from, to);
        debug!("{}", line);
        self.state.log(line);
        self.state.record(player, intent);
        Ok(moved)
    }

    /// Attack the unit at `target` with `attacker`.
    pub fn request_attack(&mut self, attacker: UnitId, target: Cell) -> Result<CombatResult, ActionError> {
        let intent = Intent::Attack { attacker, target };
        self.validate_attack(attacker, target)
            .map_err(|e| rejected(intent, e))?;

        self.refresh();
        let player = self.state.current_player;
        let result = resolve_attack(
            &mut self.state,
            &self.config,
            self.rng.as_mut(),
            attacker,
            target,
        )?;
        self.state.record(player, intent);
        Ok(result)
    }

    /// Summon the unit on `card` at `at`.
    pub fn request_summon(&mut self, card: CardId, at: Cell) -> Result<Unit, ActionError> {
        let intent = Intent::Summon { card, at };
        self.ensure_running()
            .and_then(|()| play::validate_summon(&self.state, card, at))
            .map_err(|e| rejected(intent, e))?;

        self.refresh();
        let player = self.state.current_player;
        let unit = play::commit_summon(&mut self.state, card, at)?;
        self.state.record(player, intent);
        Ok(unit)
    }

    /// Discard `card` for mana.
    pub fn request_scrap(&mut self, card: CardId) -> Result<(), ActionError> {
        let intent = Intent::Scrap { card };
        self.ensure_running()
            .and_then(|()| play::validate_scrap(&self.state, card))
            .map_err(|e| rejected(intent, e))?;

        self.refresh();
        let player = self.state.current_player;
        play::commit_scrap(&mut self.state, &self.config, card)?;
        self.state.record(player, intent);
        Ok(())
    }

    /// Play event `card`, aimed at `target` if the effect needs one.
    pub fn request_play_event(&mut self, card: CardId, target: Option<Cell>) -> Result<(), ActionError> {
        let intent = Intent::PlayEvent { card, target };
        self.ensure_running()
            .and_then(|()| play::validate_event(&self.state, card, target).map(|_| ()))
            .map_err(|e| rejected(intent, e))?;

        self.refresh();
        let player = self.state.current_player;
        play::commit_event(&mut self.state, &self.config, card, target)?;
        self.state.record(player, intent);
        Ok(())
    }

    /// End the current phase.
    pub fn end_phase(&mut self) -> Result<&GameState, ActionError> {
        self.advance()?;
        Ok(&self.state)
    }

    /// Start over with fresh summoners and hands, keeping both factions.
    ///
    /// With a seed the random source is replaced by a fresh `GameRng`;
    /// without one the current source keeps its stream.
    pub fn reset_game(&mut self, seed: Option<u64>) -> &GameState {
        if let Some(seed) = seed {
            self.rng = Box::new(GameRng::new(seed));
        }
        let factions = self.state.factions.clone();
        self.state = opening_state(&self.config, &self.registry, factions, self.rng.as_mut());
        &self.state
    }

    // === Validation ===

    fn ensure_running(&self) -> Result<(), ActionError> {
        if self.state.game_over {
            Err(ActionError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }

    /// Shared checks for unit actions, in rejection order.
    fn validate_actor(&self, unit: UnitId, activity: Activity) -> Result<&Unit, ActionError> {
        self.ensure_running()?;
        let actor = self
            .state
            .unit(unit)
            .filter(|u| u.is_alive())
            .ok_or(ActionError::UnitIneligible(unit))?;
        if actor.owner != self.state.current_player {
            return Err(ActionError::NotYourTurn);
        }
        if self.state.current_phase != activity.phase() {
            return Err(ActionError::WrongPhase {
                action: match activity {
                    Activity::Move => "move",
                    Activity::Attack => "attack",
                },
                phase: self.state.current_phase,
            });
        }
        check_eligible(&self.state, &self.config, actor, activity)?;
        Ok(actor)
    }

    fn validate_move(&self, unit: UnitId, to: Cell) -> Result<(), ActionError> {
        self.validate_actor(unit, Activity::Move)?;
        if !self.reachable_move_cells(unit).contains(&to) {
            return Err(ActionError::IllegalDestination);
        }
        Ok(())
    }

    fn validate_attack(&self, attacker: UnitId, target: Cell) -> Result<(), ActionError> {
        self.validate_actor(attacker, Activity::Attack)?;
        if !self.valid_attack_cells(attacker).contains(&target) {
            return Err(ActionError::IllegalTarget);
        }
        Ok(())
    }

    fn advance(&mut self) -> Result<PhaseChange, ActionError> {
        self.ensure_running()
            .map_err(|e| rejected(Intent::EndPhase, e))?;

        let player = self.state.current_player;
        self.state.record(player, Intent::EndPhase);
        let change = turn::advance_phase(
            &mut self.state,
            &self.config,
            &self.registry,
            self.rng.as_mut(),
        );
        if self.state.game_over {
            debug!("game ended at the end of {}'s {} phase", player, change.from);
        }
        Ok(change)
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

fn rejected(intent: Intent, error: ActionError) -> ActionError {
    debug!("rejected {}: {}", intent.name(), error);
    error
}

/// Both summoners on their home rows and opening hands dealt alternately.
fn opening_state(
    config: &RulesConfig,
    registry: &CardRegistry,
    factions: PlayerMap<Faction>,
    rng: &mut dyn RandomSource,
) -> GameState {
    let mut state = GameState::new(config, factions);
    let col = (config.cols / 2 - 1).max(0);
    state.spawn_summoner(config, PlayerId::A, Cell::new(config.rows - 1, col));
    state.spawn_summoner(config, PlayerId::B, Cell::new(0, col));

    for _ in 0..config.initial_hand_size {
        for player in PlayerId::all() {
            if let Some(template) = registry.draw(state.factions[player], rng) {
                state.add_card(player, template);
            }
        }
    }

    let line = format!(
        "New game: {} ({}) vs {} ({}).",
        PlayerId::A,
        state.factions[PlayerId::A],
        PlayerId::B,
        state.factions[PlayerId::B]
    );
    info!("{}", line);
    state.log(line);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardTemplate;
    use crate::core::ScriptedRolls;
    use crate::units::UnitKind;

    fn engine() -> GameEngine {
        GameEngine::builder().seed(42).build().unwrap()
    }

    /// Empty-handed position with both summoners, on a scripted die.
    fn scripted(rolls: impl IntoIterator<Item = u8>) -> (GameEngine, UnitId, UnitId) {
        let config = RulesConfig::default();
        let mut state = GameState::new(&config, PlayerMap::with_value(Faction::Vanguard));
        let a = state.spawn_summoner(&config, PlayerId::A, Cell::new(5, 3));
        let b = state.spawn_summoner(&config, PlayerId::B, Cell::new(0, 3));
        let engine = GameEngine::from_state(
            config,
            CardRegistry::standard(),
            state,
            Box::new(ScriptedRolls::new(rolls)),
        );
        (engine, a, b)
    }

    #[test]
    fn test_opening_position() {
        let engine = engine();
        let state = engine.state();

        assert_eq!(state.summoner(PlayerId::A).map(|u| u.cell), Some(Cell::new(5, 3)));
        assert_eq!(state.summoner(PlayerId::B).map(|u| u.cell), Some(Cell::new(0, 3)));
        assert_eq!(state.hand(PlayerId::A).len(), 3);
        assert_eq!(state.hand(PlayerId::B).len(), 3);
        assert_eq!(state.mana, PlayerMap::with_value(5));
        assert_eq!(state.battle_log.len(), 1);
    }

    #[test]
    fn test_move_flow() {
        let (mut engine, a, b) = scripted([]);
        assert_eq!(
            engine.request_move(a, Cell::new(4, 3)),
            Err(ActionError::WrongPhase {
                action: "move",
                phase: Phase::Summon
            })
        );

        engine.end_phase().unwrap();
        assert_eq!(engine.request_move(b, Cell::new(1, 3)), Err(ActionError::NotYourTurn));
        assert_eq!(
            engine.request_move(a, Cell::new(2, 3)),
            Err(ActionError::IllegalDestination)
        );

        let moved = engine.request_move(a, Cell::new(4, 3)).unwrap();
        assert_eq!(moved.cell, Cell::new(4, 3));
        assert!(moved.has_moved_this_phase);
        assert_eq!(engine.state().last_log, "Summoner(P1) moves (5,3) -> (4,3).");
        assert_eq!(
            engine.request_move(a, Cell::new(3, 3)),
            Err(ActionError::UnitIneligible(a))
        );
        assert!(engine.reachable_move_cells(a).is_empty());
    }

    #[test]
    fn test_unknown_unit_is_ineligible() {
        let (mut engine, _, _) = scripted([]);
        engine.end_phase().unwrap();
        assert_eq!(
            engine.request_move(UnitId(77), Cell::new(2, 2)),
            Err(ActionError::UnitIneligible(UnitId(77)))
        );
    }

    #[test]
    fn test_rejection_changes_nothing() {
        let (mut engine, a, _) = scripted([]);
        let before = engine.state().encode().unwrap();

        let _ = engine.request_move(a, Cell::new(4, 3));
        let _ = engine.request_attack(a, Cell::new(4, 3));
        let _ = engine.request_scrap(CardId(3));

        assert_eq!(engine.state().encode().unwrap(), before);
    }

    #[test]
    fn test_game_over_rejects_everything() {
        let (engine, a, _) = scripted([]);
        let mut state = engine.snapshot();
        state.units[0].current_life = 1;
        let mut engine = GameEngine::from_state(
            engine.config().clone(),
            CardRegistry::standard(),
            state,
            Box::new(ScriptedRolls::new([])),
        );

        for _ in 0..4 {
            engine.end_phase().unwrap();
        }
        assert!(engine.state().game_over);
        assert_eq!(engine.result(), Some(GameResult::Winner(PlayerId::B)));
        assert!(engine.legal_intents().is_empty());

        assert_eq!(engine.end_phase().err(), Some(ActionError::GameAlreadyOver));
        assert_eq!(
            engine.request_move(a, Cell::new(4, 3)),
            Err(ActionError::GameAlreadyOver)
        );

        engine.reset_game(Some(1));
        assert!(!engine.state().game_over);
        assert_eq!(engine.state().hand(PlayerId::A).len(), 3);
    }

    #[test]
    fn test_summon_through_engine() {
        let (engine, _, _) = scripted([]);
        let mut state = engine.snapshot();
        let card = state.add_card(PlayerId::A, CardTemplate::unit(UnitKind::Scout));
        let mut engine = GameEngine::from_state(
            engine.config().clone(),
            CardRegistry::standard(),
            state,
            Box::new(ScriptedRolls::new([])),
        );

        assert_eq!(engine.valid_summon_cells(card).len(), 3);
        let unit = engine.request_summon(card, Cell::new(4, 3)).unwrap();
        assert_eq!(engine.state().unit_at(Cell::new(4, 3)).map(|u| u.id), Some(unit.id));
        assert_eq!(engine.state().mana[PlayerId::A], 3);
        assert_eq!(engine.state().history.len(), 1);
        assert!(engine.valid_summon_cells(card).is_empty());
    }

    #[test]
    fn test_legal_intents_are_accepted() {
        let mut engine = engine();
        for _ in 0..40 {
            if engine.state().game_over {
                break;
            }
            let intents = engine.legal_intents();
            assert_eq!(intents.last(), Some(&Intent::EndPhase));
            let pick = intents[0];
            assert!(engine.apply(pick).is_ok(), "{:?} was listed but rejected", pick);
        }
    }

    #[test]
    fn test_reset_with_seed_is_reproducible() {
        let mut engine = engine();
        engine.end_phase().unwrap();
        let first = engine.reset_game(Some(9)).clone();
        let second = engine.reset_game(Some(9)).clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_refresh_compacts() {
        let (engine, _, _) = scripted([]);
        let mut state = engine.snapshot();
        let scout = state.spawn_unit(|id| Unit::of_kind(id, UnitKind::Scout, PlayerId::B, Cell::new(2, 2)));
        if let Some(unit) = state.unit_mut(scout) {
            unit.current_life = 0;
            unit.pending_removal = true;
        }
        let mut engine = GameEngine::from_state(
            engine.config().clone(),
            CardRegistry::standard(),
            state,
            Box::new(ScriptedRolls::new([])),
        );

        assert_eq!(engine.refresh(), 1);
        assert!(engine.state().unit(scout).is_none());
    }
}
