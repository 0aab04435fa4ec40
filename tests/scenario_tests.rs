//! Reference scenarios for the rule engine.
//!
//! Each test builds a small position by hand, drives it through the
//! public `GameEngine` API, and pins dice with `ScriptedRolls` so the
//! outcome is exact.

use summoner_tactics::{
    Ability, ActionError, CardRegistry, CardTemplate, Cell, Faction, GameEngine, GameResult,
    GameRng, GameState, Phase, PlayerId, PlayerMap, RulesConfig, ScriptedRolls, Unit, UnitId,
    UnitKind,
};

fn empty_state(config: &RulesConfig) -> GameState {
    GameState::new(config, PlayerMap::with_value(Faction::Vanguard))
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

/// Test a summoner attack that wounds but does not kill.
#[test]
fn test_scenario_a_summoner_attack() {
    let config = RulesConfig::default();
    let mut state = empty_state(&config);
    let summoner = state.spawn_summoner(&config, PlayerId::A, Cell::new(3, 3));
    let archer = place(&mut state, UnitKind::Archer, PlayerId::B, Cell::new(2, 3));
    state.current_phase = Phase::Attack;
    let mut engine = engine_with(state, [5, 1]);

    let result = engine.request_attack(summoner, Cell::new(2, 3)).unwrap();

    assert_eq!(result.rolls.as_slice(), &[5, 1]);
    assert_eq!(result.hits, 1);
    assert!(!result.defender_destroyed);
    assert_eq!(result.mana_awarded, 0);

    let state = engine.state();
    assert_eq!(state.unit(archer).unwrap().current_life, 2);
    assert_eq!(state.mana[PlayerId::A], 5);
    assert!(state.has_targeted_enemy_this_phase);
    assert_eq!(
        state.last_log,
        "Summoner(P1) attacks Archer(P2)! Rolls: [5, 1] -> 1 hit. 1 damage."
    );
}

/// Test that a friendly unit blocks a ranged line of fire.
#[test]
fn test_scenario_b_ranged_blocked_by_friend() {
    let config = RulesConfig::default();
    let mut state = empty_state(&config);
    let archer = place(&mut state, UnitKind::Archer, PlayerId::A, Cell::new(4, 4));
    place(&mut state, UnitKind::Guard, PlayerId::A, Cell::new(3, 4));
    place(&mut state, UnitKind::Scout, PlayerId::B, Cell::new(2, 4));
    state.current_phase = Phase::Attack;
    let mut engine = engine_with(state, []);

    assert!(engine.valid_attack_cells(archer).is_empty());
    assert_eq!(
        engine.request_attack(archer, Cell::new(2, 4)).unwrap_err(),
        ActionError::IllegalTarget
    );
}

/// Test that an enemy blocker is the only target in its line.
#[test]
fn test_ranged_stops_at_first_enemy() {
    let config = RulesConfig::default();
    let mut state = empty_state(&config);
    let archer = place(&mut state, UnitKind::Archer, PlayerId::A, Cell::new(4, 4));
    place(&mut state, UnitKind::Scout, PlayerId::B, Cell::new(2, 4));
    place(&mut state, UnitKind::Scout, PlayerId::B, Cell::new(1, 4));
    place(&mut state, UnitKind::Scout, PlayerId::B, Cell::new(4, 0));
    state.current_phase = Phase::Attack;
    let engine = engine_with(state, []);

    let cells: Vec<Cell> = engine.valid_attack_cells(archer).into_iter().collect();
    assert_eq!(cells, vec![Cell::new(2, 4)]);
}

/// Test accuracy against the same rolls with and without the ability.
#[test]
fn test_scenario_c_accuracy() {
    let config = RulesConfig::default();
    let mut state = empty_state(&config);
    let sharp = state.spawn_unit(|id| {
        Unit::of_kind(id, UnitKind::Warrior, PlayerId::A, Cell::new(4, 1))
            .with_ability(Ability::Accuracy { threshold: 2 })
    });
    let plain = place(&mut state, UnitKind::Warrior, PlayerId::A, Cell::new(4, 6));
    place(&mut state, UnitKind::Brute, PlayerId::B, Cell::new(3, 1));
    place(&mut state, UnitKind::Brute, PlayerId::B, Cell::new(3, 6));
    state.current_phase = Phase::Attack;
    let mut engine = engine_with(state, [2, 2, 6, 2, 2, 6]);

    let with = engine.request_attack(sharp, Cell::new(3, 1)).unwrap();
    let without = engine.request_attack(plain, Cell::new(3, 6)).unwrap();

    assert_eq!(with.hits, 3);
    assert_eq!(with.threshold, 2);
    assert_eq!(without.hits, 1);
    assert_eq!(without.threshold, 3);
}

/// Test the cost of inaction, including a fatal penalty.
#[test]
fn test_scenario_d_cost_of_inaction() {
    let config = RulesConfig::default();
    let mut state = empty_state(&config);
    state.spawn_summoner(&config, PlayerId::A, Cell::new(5, 3));
    state.spawn_summoner(&config, PlayerId::B, Cell::new(0, 3));
    state.current_phase = Phase::Attack;
    let mut engine = engine_with(state.clone(), []);

    engine.end_phase().unwrap();
    assert_eq!(engine.state().summoner(PlayerId::A).unwrap().current_life, 5);
    assert_eq!(engine.state().current_phase, Phase::Magic);
    assert!(!engine.state().game_over);

    state.units[0].current_life = 1;
    let mut engine = engine_with(state, []);
    engine.end_phase().unwrap();

    assert!(engine.state().game_over);
    assert_eq!(engine.state().winner, Some(PlayerId::B));
    assert_eq!(engine.result(), Some(GameResult::Winner(PlayerId::B)));
    assert_eq!(engine.state().last_log, "Game Over! P2 wins!");
}

/// Test that the inaction penalty is reduced by the summoner's Ward.
#[test]
fn test_cost_of_inaction_is_ability_adjusted() {
    let config = RulesConfig::default().with_inaction_penalty(3);
    let mut state = empty_state(&config);
    let summoner = state.spawn_summoner(&config, PlayerId::A, Cell::new(5, 3));
    state.unit_mut(summoner).unwrap().ability = Some(Ability::Ward { reduction: 1 });
    state.current_phase = Phase::Attack;
    let mut engine = GameEngine::from_state(
        config,
        CardRegistry::standard(),
        state,
        Box::new(ScriptedRolls::new([])),
    );

    engine.end_phase().unwrap();
    assert_eq!(engine.state().unit(summoner).unwrap().current_life, 4);
}

/// Test that an unaffordable summon is rejected without touching the state.
#[test]
fn test_scenario_e_insufficient_mana() {
    let config = RulesConfig::default();
    let mut state = empty_state(&config);
    state.spawn_summoner(&config, PlayerId::A, Cell::new(5, 3));
    state.spawn_summoner(&config, PlayerId::B, Cell::new(0, 3));
    let brute = state.add_card(PlayerId::A, CardTemplate::unit(UnitKind::Brute));
    state.mana[PlayerId::A] = 4;
    let mut engine = engine_with(state, []);

    let before = engine.state().encode().unwrap();
    let err = engine.request_summon(brute, Cell::new(4, 3)).unwrap_err();

    assert_eq!(err, ActionError::InsufficientMana { have: 4, need: 5 });
    assert_eq!(engine.state().encode().unwrap(), before);
}

/// Test that a fixed seed replays an attack exactly.
#[test]
fn test_dice_determinism() {
    let run = || {
        let config = RulesConfig::default();
        let mut state = empty_state(&config);
        let warrior = place(&mut state, UnitKind::Warrior, PlayerId::A, Cell::new(3, 3));
        place(&mut state, UnitKind::Brute, PlayerId::B, Cell::new(2, 3));
        state.current_phase = Phase::Attack;
        let mut engine = GameEngine::from_state(
            config,
            CardRegistry::standard(),
            state,
            Box::new(GameRng::new(1234)),
        );
        engine.request_attack(warrior, Cell::new(2, 3)).unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first.rolls.len(), 3);
    assert_eq!(first.hits, second.hits);
    assert_eq!(first.log, second.log);
}

/// Test that a kill pays mana and the unit lingers until the next refresh.
#[test]
fn test_kill_defers_removal() {
    let config = RulesConfig::default();
    let mut state = empty_state(&config);
    let brute = place(&mut state, UnitKind::Brute, PlayerId::A, Cell::new(3, 3));
    let scout = place(&mut state, UnitKind::Scout, PlayerId::B, Cell::new(2, 3));
    state.current_phase = Phase::Attack;
    let mut engine = engine_with(state, [6, 6, 1]);

    let result = engine.request_attack(brute, Cell::new(2, 3)).unwrap();
    assert!(result.defender_destroyed);
    assert_eq!(result.mana_awarded, 1);
    assert_eq!(engine.state().mana[PlayerId::A], 6);

    let lingering = engine.state().unit(scout).unwrap();
    assert!(lingering.pending_removal);
    assert_eq!(lingering.current_life, 0);
    assert!(engine.state().unit_at(Cell::new(2, 3)).is_none());

    engine.refresh();
    assert!(engine.state().unit(scout).is_none());
}
