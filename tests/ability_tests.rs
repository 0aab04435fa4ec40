//! Special-ability integration tests.
//!
//! Every ability is exercised through `GameEngine::request_attack` with
//! scripted dice, so the hook order (roll, hits, damage, kill) is checked
//! end to end.

use summoner_tactics::effects::Aura;
use summoner_tactics::{
    Ability, ActionError, CardRegistry, Cell, Faction, GameEngine, GameState, Phase, PlayerId,
    PlayerMap, RulesConfig, ScriptedRolls, StrikeCondition, Unit, UnitId, UnitKind,
};

/// An empty board in P1's Attack phase.
fn attack_phase() -> GameState {
    let config = RulesConfig::default();
    let mut state = GameState::new(&config, PlayerMap::with_value(Faction::Horde));
    state.current_phase = Phase::Attack;
    state
}

fn engine_with(state: GameState, rolls: impl IntoIterator<Item = u8>) -> GameEngine {
    GameEngine::from_state(
        RulesConfig::default(),
        CardRegistry::standard(),
        state,
        Box::new(ScriptedRolls::new(rolls)),
    )
}

fn place(state: &mut GameState, kind: UnitKind, owner: PlayerId, cell: Cell) -> UnitId {
    state.spawn_unit(|id| Unit::of_kind(id, kind, owner, cell))
}

fn place_with(
    state: &mut GameState,
    kind: UnitKind,
    owner: PlayerId,
    cell: Cell,
    ability: Ability,
) -> UnitId {
    state.spawn_unit(|id| Unit::of_kind(id, kind, owner, cell).with_ability(ability))
}

/// Test that a hit pushes the defender one cell away.
#[test]
fn test_knockback_pushes() {
    let mut state = attack_phase();
    let brute = place_with(&mut state, UnitKind::Brute, PlayerId::A, Cell::new(3, 3), Ability::Knockback);
    let guard = place(&mut state, UnitKind::Guard, PlayerId::B, Cell::new(2, 3));
    let mut engine = engine_with(state, [6, 1, 1]);

    let result = engine.request_attack(brute, Cell::new(2, 3)).unwrap();

    let pushed = engine.state().unit(guard).unwrap();
    assert_eq!(pushed.cell, Cell::new(1, 3));
    assert_eq!(pushed.current_life, 4);
    assert!(result.notes.contains(&"Knockback to (1,3)".to_string()));
}

/// Test that a push off the board fails without cancelling damage.
#[test]
fn test_knockback_blocked_at_edge() {
    let mut state = attack_phase();
    let brute = place_with(&mut state, UnitKind::Brute, PlayerId::A, Cell::new(1, 3), Ability::Knockback);
    let guard = place(&mut state, UnitKind::Guard, PlayerId::B, Cell::new(0, 3));
    let mut engine = engine_with(state, [6, 6, 1]);

    let result = engine.request_attack(brute, Cell::new(0, 3)).unwrap();

    let held = engine.state().unit(guard).unwrap();
    assert_eq!(held.cell, Cell::new(0, 3));
    assert_eq!(held.current_life, 3);
    assert_eq!(result.damage_dealt, 2);
    assert!(result.log.contains("[Knockback blocked]"));
}

/// Test that a miss triggers no side effect.
#[test]
fn test_knockback_needs_a_hit() {
    let mut state = attack_phase();
    let brute = place_with(&mut state, UnitKind::Brute, PlayerId::A, Cell::new(3, 3), Ability::Knockback);
    let guard = place(&mut state, UnitKind::Guard, PlayerId::B, Cell::new(2, 3));
    let mut engine = engine_with(state, [1, 2, 1]);

    let result = engine.request_attack(brute, Cell::new(2, 3)).unwrap();
    assert_eq!(result.hits, 0);
    assert!(result.notes.is_empty());
    assert_eq!(engine.state().unit(guard).unwrap().cell, Cell::new(2, 3));
}

/// Test that a pinned unit sits out its owner's next Move phase.
#[test]
fn test_pin_locks_next_move() {
    let mut state = attack_phase();
    let spear = place_with(&mut state, UnitKind::Spearman, PlayerId::A, Cell::new(4, 3), Ability::Pin);
    let brute = place(&mut state, UnitKind::Brute, PlayerId::B, Cell::new(2, 3));
    let mut engine = engine_with(state, [6, 1]);

    engine.request_attack(spear, Cell::new(2, 3)).unwrap();
    assert!(engine.state().unit(brute).unwrap().move_locked);

    while engine.state().current_phase != Phase::Move {
        engine.end_phase().unwrap();
    }
    assert_eq!(engine.state().current_player, PlayerId::B);
    assert!(engine.reachable_move_cells(brute).is_empty());
    assert_eq!(
        engine.request_move(brute, Cell::new(1, 3)),
        Err(ActionError::UnitIneligible(brute))
    );
    assert!(!engine.state().unit(brute).unwrap().move_locked);
}

/// Test that Weaken lowers attack permanently, never below 1.
#[test]
fn test_weaken_floor() {
    let mut state = attack_phase();
    let hexer = place_with(
        &mut state,
        UnitKind::Guard,
        PlayerId::A,
        Cell::new(3, 3),
        Ability::Weaken { amount: 5 },
    );
    let brute = place(&mut state, UnitKind::Brute, PlayerId::B, Cell::new(2, 3));
    let mut engine = engine_with(state, [3, 1]);

    let result = engine.request_attack(hexer, Cell::new(2, 3)).unwrap();

    let weakened = engine.state().unit(brute).unwrap();
    assert_eq!(weakened.attack_value, 1);
    assert_eq!(weakened.base_attack, 1);
    assert!(result.notes.contains(&"Weaken -2 attack".to_string()));
}

/// Test Bounty pays extra mana on a kill.
#[test]
fn test_bounty_on_kill() {
    let mut state = attack_phase();
    let hunter = place_with(
        &mut state,
        UnitKind::Scout,
        PlayerId::A,
        Cell::new(4, 3),
        Ability::Bounty { mana: 1 },
    );
    let prey = place(&mut state, UnitKind::Scout, PlayerId::B, Cell::new(2, 3));
    state.unit_mut(prey).unwrap().current_life = 1;
    let mut engine = engine_with(state, [6]);

    let result = engine.request_attack(hunter, Cell::new(2, 3)).unwrap();
    assert!(result.defender_destroyed);
    assert_eq!(result.mana_awarded, 2);
    assert_eq!(engine.state().mana[PlayerId::A], 7);
    assert!(result.log.ends_with("Scout(P2) destroyed! +2 mana."));
}

/// Test Bloodlust banks dice on a kill and spends them on the next attack.
#[test]
fn test_bloodlust_feeds_next_attack() {
    let mut state = attack_phase();
    let berserker = place_with(
        &mut state,
        UnitKind::Warrior,
        PlayerId::A,
        Cell::new(3, 3),
        Ability::Bloodlust { bonus: 1 },
    );
    place(&mut state, UnitKind::Scout, PlayerId::B, Cell::new(2, 3));
    let brute = place(&mut state, UnitKind::Brute, PlayerId::B, Cell::new(3, 4));
    let mut engine = engine_with(state, [6, 6, 1, 1, 1, 1, 6]);

    let kill = engine.request_attack(berserker, Cell::new(2, 3)).unwrap();
    assert!(kill.defender_destroyed);
    assert!(kill.notes.contains(&"Bloodlust banks +1 dice".to_string()));

    let unit = engine.state().unit(berserker).unwrap();
    assert_eq!(unit.attack_value, 3);
    assert_eq!(unit.banked_dice, 1);

    // The bank outlives the phase boundary and the opponent's turn.
    engine.end_phase().unwrap();
    assert_eq!(engine.state().unit(berserker).unwrap().banked_dice, 1);
    while engine.state().current_player != PlayerId::A
        || engine.state().current_phase != Phase::Attack
    {
        engine.end_phase().unwrap();
    }

    let result = engine.request_attack(berserker, Cell::new(3, 4)).unwrap();
    assert_eq!(result.rolls.as_slice(), &[1, 1, 1, 6]);
    assert_eq!(result.hits, 1);
    assert!(result.notes.contains(&"Bloodlust +1 dice".to_string()));
    assert_eq!(engine.state().unit(brute).unwrap().current_life, 4);
    assert_eq!(engine.state().unit(berserker).unwrap().banked_dice, 0);
}

/// Test BonusStrike rolls one more die after the first hit.
#[test]
fn test_bonus_strike() {
    let mut state = attack_phase();
    let warrior = place_with(&mut state, UnitKind::Warrior, PlayerId::A, Cell::new(3, 3), Ability::BonusStrike);
    let brute = place(&mut state, UnitKind::Brute, PlayerId::B, Cell::new(2, 3));
    let mut engine = engine_with(state, [4, 1, 1, 5]);

    let result = engine.request_attack(warrior, Cell::new(2, 3)).unwrap();
    assert_eq!(result.rolls.as_slice(), &[4, 1, 1, 5]);
    assert_eq!(result.hits, 2);
    assert_eq!(engine.state().unit(brute).unwrap().current_life, 3);
}

/// Test BonusDamage against a defender that stayed put.
#[test]
fn test_bonus_damage_condition() {
    let mut state = attack_phase();
    let archer = place_with(
        &mut state,
        UnitKind::Archer,
        PlayerId::A,
        Cell::new(4, 3),
        Ability::BonusDamage {
            amount: 1,
            when: StrikeCondition::DefenderStationary,
        },
    );
    let still = place(&mut state, UnitKind::Brute, PlayerId::B, Cell::new(2, 3));
    let moved = place(&mut state, UnitKind::Brute, PlayerId::B, Cell::new(4, 5));
    state.unit_mut(moved).unwrap().has_moved_this_phase = true;
    let mut engine = engine_with(state, [3]);

    let result = engine.request_attack(archer, Cell::new(2, 3)).unwrap();
    assert_eq!(result.bonus_damage, 1);
    assert_eq!(result.damage_dealt, 2);
    assert_eq!(engine.state().unit(still).unwrap().current_life, 3);

    let mut state = engine.snapshot();
    state.unit_mut(archer).unwrap().has_attacked_this_phase = false;
    state.units_attacked_this_phase.clear();
    let mut engine = engine_with(state, [3]);
    let result = engine.request_attack(archer, Cell::new(4, 5)).unwrap();
    assert_eq!(result.bonus_damage, 0);
    assert_eq!(result.damage_dealt, 1);
}

/// Test Ward: reduced damage, but a hit always lands at least 1.
#[test]
fn test_ward_defender() {
    let mut state = attack_phase();
    let warrior = place(&mut state, UnitKind::Warrior, PlayerId::A, Cell::new(3, 3));
    let spare = place(&mut state, UnitKind::Warrior, PlayerId::A, Cell::new(1, 2));
    let guard = place_with(
        &mut state,
        UnitKind::Guard,
        PlayerId::B,
        Cell::new(2, 3),
        Ability::Ward { reduction: 1 },
    );
    let other = place_with(
        &mut state,
        UnitKind::Guard,
        PlayerId::B,
        Cell::new(0, 2),
        Ability::Ward { reduction: 3 },
    );
    let mut engine = engine_with(state, [6, 6, 1, 6, 1, 1]);

    assert_eq!(engine.request_attack(warrior, Cell::new(2, 3)).unwrap().damage_dealt, 1);
    assert_eq!(engine.state().unit(guard).unwrap().current_life, 4);

    assert_eq!(engine.request_attack(spare, Cell::new(0, 2)).unwrap().damage_dealt, 1);
    assert_eq!(engine.state().unit(other).unwrap().current_life, 4);
}

/// Test a standing extra-dice aura adds dice to friendly attacks.
#[test]
fn test_extra_dice_aura() {
    let config = RulesConfig::default();
    let mut state = attack_phase();
    let summoner = state.spawn_summoner(&config, PlayerId::A, Cell::new(3, 3));
    place(&mut state, UnitKind::Brute, PlayerId::B, Cell::new(2, 3));
    state
        .active_effects
        .add("War Drums", PlayerId::A, Aura::ExtraDice { dice: 1 }, 2);
    let mut engine = engine_with(state, [1, 1, 1]);

    let result = engine.request_attack(summoner, Cell::new(2, 3)).unwrap();
    assert_eq!(result.rolls.len(), 3);
    assert_eq!(result.hits, 0);
    assert_eq!(
        result.log,
        "Summoner(P1) attacks Brute(P2)! Rolls: [1, 1, 1] -> 0 hits. [Aura +1 dice]"
    );
}

/// Test a standing ward aura protects the owner's units.
#[test]
fn test_ward_aura() {
    let mut state = attack_phase();
    let warrior = place(&mut state, UnitKind::Warrior, PlayerId::A, Cell::new(3, 3));
    let brute = place(&mut state, UnitKind::Brute, PlayerId::B, Cell::new(2, 3));
    state
        .active_effects
        .add("Shield Wall", PlayerId::B, Aura::Ward { reduction: 1 }, 2);
    let mut engine = engine_with(state, [6, 6, 6]);

    assert_eq!(engine.request_attack(warrior, Cell::new(2, 3)).unwrap().damage_dealt, 2);
    assert_eq!(engine.state().unit(brute).unwrap().current_life, 3);
}
