//! Game state: the aggregate root.
//!
//! ## GameState
//!
//! Everything the rules read or write lives here:
//! - Board extent and the unit roster (occupancy is derived from the roster)
//! - Hands, mana pools, and each player's faction
//! - Current player, phase, and turn number
//! - Per-phase actor budgets and the "targeted an enemy" flag
//! - Game-over status and winner
//! - Battle log, action history, and active standing effects
//!
//! The state is a plain value. `GameEngine` owns the only mutable copy
//! and changes it exclusively through the intent API; `snapshot()` hands
//! out clones. The log and history use `im` persistent vectors, so clones
//! share their storage.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{ActionRecord, Intent};
use super::config::RulesConfig;
use super::entity::{CardId, UnitId};
use super::phase::Phase;
use super::player::{PlayerId, PlayerMap};
use crate::board::{Board, Cell};
use crate::cards::{Card, CardTemplate, Faction};
use crate::effects::ActiveEffects;
use crate::units::Unit;

/// Distinct units that have acted in the current Move or Attack phase.
///
/// ## Example
///
/// ```
/// use summoner_tactics::core::{ActorBudget, UnitId};
///
/// let mut budget = ActorBudget::default();
/// budget.record(UnitId(1));
/// budget.record(UnitId(1));
/// budget.record(UnitId(2));
///
/// assert_eq!(budget.len(), 2);
/// assert!(budget.is_full(2));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorBudget {
    actors: SmallVec<[UnitId; 3]>,
}

impl ActorBudget {
    #[must_use]
    pub fn contains(&self, unit: UnitId) -> bool {
        self.actors.contains(&unit)
    }

    /// Record an actor. Recording the same unit twice is a no-op.
    pub fn record(&mut self, unit: UnitId) {
        if !self.contains(unit) {
            self.actors.push(unit);
        }
    }

    /// Has the budget reached `cap` distinct actors?
    #[must_use]
    pub fn is_full(&self, cap: usize) -> bool {
        self.actors.len() >= cap
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn clear(&mut self) {
        self.actors.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.actors.iter().copied()
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,

    /// Unit roster. Destroyed units stay here, flagged `pending_removal`,
    /// until the next refresh compacts them away.
    pub units: Vec<Unit>,

    pub hands: PlayerMap<Vec<Card>>,
    pub mana: PlayerMap<u32>,
    pub factions: PlayerMap<Faction>,

    pub current_player: PlayerId,
    pub current_phase: Phase,

    /// Turn number (starts at 1, increments at every player switch).
    pub turn_number: u32,

    pub units_moved_this_phase: ActorBudget,
    pub units_attacked_this_phase: ActorBudget,

    /// Did the current player damage an enemy during this Attack phase?
    pub has_targeted_enemy_this_phase: bool,

    pub game_over: bool,
    pub winner: Option<PlayerId>,

    /// Battle-log line of the most recently resolved action.
    pub last_log: String,

    /// Every battle-log line, oldest first.
    pub battle_log: Vector<String>,

    /// Accepted intents, oldest first.
    pub history: Vector<ActionRecord>,

    pub active_effects: ActiveEffects,

    next_unit_id: u32,
    next_card_id: u32,
}

impl GameState {
    /// An empty board at the start of player A's first Summon phase.
    ///
    /// No units are placed and hands are empty; `GameEngine` deals the
    /// opening position. Tests build custom positions from here.
    #[must_use]
    pub fn new(config: &RulesConfig, factions: PlayerMap<Faction>) -> Self {
        Self {
            board: Board::new(config.rows, config.cols),
            units: Vec::new(),
            hands: PlayerMap::new(|_| Vec::new()),
            mana: PlayerMap::with_value(config.starting_mana),
            factions,
            current_player: PlayerId::A,
            current_phase: Phase::FIRST,
            turn_number: 1,
            units_moved_this_phase: ActorBudget::default(),
            units_attacked_this_phase: ActorBudget::default(),
            has_targeted_enemy_this_phase: false,
            game_over: false,
            winner: None,
            last_log: String::new(),
            battle_log: Vector::new(),
            history: Vector::new(),
            active_effects: ActiveEffects::new(),
            next_unit_id: 0,
            next_card_id: 0,
        }
    }

    // === Units ===

    /// Add a unit built with a freshly allocated id.
    ///
    /// ```
    /// use summoner_tactics::board::Cell;
    /// use summoner_tactics::cards::Faction;
    /// use summoner_tactics::core::{GameState, PlayerId, PlayerMap, RulesConfig};
    /// use summoner_tactics::units::{Unit, UnitKind};
    ///
    /// let config = RulesConfig::default();
    /// let mut state = GameState::new(&config, PlayerMap::with_value(Faction::Vanguard));
    /// let id = state.spawn_unit(|id| Unit::of_kind(id, UnitKind::Scout, PlayerId::A, Cell::new(2, 2)));
    ///
    /// assert_eq!(state.unit_at(Cell::new(2, 2)).map(|u| u.id), Some(id));
    /// ```
    pub fn spawn_unit(&mut self, build: impl FnOnce(UnitId) -> Unit) -> UnitId {
        let id = UnitId::new(self.next_unit_id);
        self.next_unit_id += 1;
        self.units.push(build(id));
        id
    }

    /// Place `owner`'s summoner using the configured stats.
    pub fn spawn_summoner(&mut self, config: &RulesConfig, owner: PlayerId, cell: Cell) -> UnitId {
        self.spawn_unit(|id| {
            Unit::summoner(id, owner, cell, config.summoner_attack, config.summoner_life)
        })
    }

    /// Look up a unit by id, including units pending removal.
    #[must_use]
    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.iter_mut().find(|u| u.id == id)
    }

    /// Roster index of a unit.
    #[must_use]
    pub fn unit_index(&self, id: UnitId) -> Option<usize> {
        self.units.iter().position(|u| u.id == id)
    }

    /// First living unit occupying `cell`.
    #[must_use]
    pub fn unit_at(&self, cell: Cell) -> Option<&Unit> {
        self.board.unit_at(&self.units, cell)
    }

    /// Is `cell` on the board and unoccupied?
    #[must_use]
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.board.is_empty(&self.units, cell)
    }

    /// `player`'s summoner, if still alive.
    #[must_use]
    pub fn summoner(&self, player: PlayerId) -> Option<&Unit> {
        self.units
            .iter()
            .find(|u| u.is_summoner && u.owner == player && u.is_alive())
    }

    /// Living units owned by `player`, in roster order.
    pub fn living_units(&self, player: PlayerId) -> impl Iterator<Item = &Unit> {
        self.units
            .iter()
            .filter(move |u| u.owner == player && u.is_alive())
    }

    /// Drop every unit flagged for removal. Returns how many were removed.
    pub fn compact(&mut self) -> usize {
        let before = self.units.len();
        self.units.retain(|u| !u.pending_removal);
        before - self.units.len()
    }

    // === Cards ===

    /// Put a new copy of `template` into `owner`'s hand.
    pub fn add_card(&mut self, owner: PlayerId, template: CardTemplate) -> CardId {
        let id = CardId::new(self.next_card_id);
        self.next_card_id += 1;
        self.hands[owner].push(Card::new(id, template));
        id
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[Card] {
        &self.hands[player]
    }

    /// Find a card in any hand, with its holder.
    #[must_use]
    pub fn find_card(&self, id: CardId) -> Option<(PlayerId, &Card)> {
        self.hands
            .iter()
            .find_map(|(player, hand)| hand.iter().find(|c| c.id == id).map(|c| (player, c)))
    }

    /// Remove a card from `player`'s hand, preserving the order of the rest.
    pub fn take_card(&mut self, player: PlayerId, id: CardId) -> Option<Card> {
        let hand = &mut self.hands[player];
        let index = hand.iter().position(|c| c.id == id)?;
        Some(hand.remove(index))
    }

    // === Phase bookkeeping ===

    /// The actor budget tracked for `phase`, if it has one.
    #[must_use]
    pub fn budget(&self, phase: Phase) -> Option<&ActorBudget> {
        match phase {
            Phase::Move => Some(&self.units_moved_this_phase),
            Phase::Attack => Some(&self.units_attacked_this_phase),
            _ => None,
        }
    }

    pub fn budget_mut(&mut self, phase: Phase) -> Option<&mut ActorBudget> {
        match phase {
            Phase::Move => Some(&mut self.units_moved_this_phase),
            Phase::Attack => Some(&mut self.units_attacked_this_phase),
            _ => None,
        }
    }

    // === Log ===

    /// Record a battle-log line.
    pub fn log(&mut self, line: impl Into<String>) {
        let line = line.into();
        self.battle_log.push_back(line.clone());
        self.last_log = line;
    }

    /// Record an accepted intent.
    pub fn record(&mut self, player: PlayerId, intent: Intent) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord::new(
            player,
            intent,
            self.turn_number,
            self.current_phase,
            sequence,
        ));
    }

    /// Compact binary image of the whole state.
    ///
    /// Two states encode to the same bytes exactly when they are equal,
    /// which makes this the cheapest way to assert that a rejected intent
    /// changed nothing.
    pub fn encode(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Rebuild a state from [`GameState::encode`] output.
    pub fn decode(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}
