//! Game-mode integration tests
//!
//! Timers are driven with `ManualClock` so every end condition and the
//! sudden-death switch can be reached without waiting.

use twelve_snakes::core::config::GameConfig;
use twelve_snakes::core::types::{Direction, PlayerId, Position};
use twelve_snakes::interface::{ManualClock, NullSink, ScriptedInput};
use twelve_snakes::rules::GameMode;
use twelve_snakes::simulation::{DeathCause, Session, SimulationEvent};

fn session_for(mode: GameMode, tweak: impl FnOnce(&mut GameConfig)) -> (Session, ManualClock) {
    let clock = ManualClock::new();
    let mut config = GameConfig {
        mode,
        seed: Some(3),
        ..GameConfig::default()
    };
    tweak(&mut config);
    (Session::new(config, &clock), clock)
}

fn join(players: &[u8]) -> ScriptedInput {
    let mut input = ScriptedInput::new();
    for &p in players {
        input.join(p);
    }
    input
}

fn game_over(events: &[SimulationEvent]) -> Option<Option<PlayerId>> {
    events.iter().find_map(|e| match e {
        SimulationEvent::GameOver { winner, .. } => Some(*winner),
        _ => None,
    })
}

#[test]
fn test_free_for_all_never_ends() {
    let (mut session, mut clock) = session_for(GameMode::FreeForAll, |_| {});
    session.step(&join(&[0]), &clock, &mut NullSink).unwrap();

    clock.advance(100_000);
    let events = session.step(&ScriptedInput::new(), &clock, &mut NullSink).unwrap();

    assert_eq!(game_over(&events), None);
    assert!(!session.is_game_over());
}

#[test]
fn test_score_attack_ends_on_target_score() {
    let (mut session, clock) = session_for(GameMode::ScoreAttack, |c| c.max_score = 1);
    let snake = session.roster.get_mut(PlayerId(5));
    snake.spawn_at(Position::new(20, 15), Direction::Left);

    let events = session.step(&ScriptedInput::new(), &clock, &mut NullSink).unwrap();

    assert_eq!(game_over(&events), Some(Some(PlayerId(5))));
    assert!(session.is_game_over());

    // A finished session ignores further ticks
    let tick = session.current_tick;
    let events = session.step(&join(&[0]), &clock, &mut NullSink).unwrap();
    assert!(events.is_empty());
    assert_eq!(session.current_tick, tick);
    assert!(!session.roster.get(PlayerId(0)).active);
}

#[test]
fn test_survivor_ends_when_time_runs_out() {
    let (mut session, mut clock) = session_for(GameMode::Survivor, |c| c.max_time_seconds = 30);
    session.step(&join(&[0]), &clock, &mut NullSink).unwrap();

    clock.set(29);
    let events = session.step(&ScriptedInput::new(), &clock, &mut NullSink).unwrap();
    assert_eq!(game_over(&events), None);

    clock.set(30);
    let events = session.step(&ScriptedInput::new(), &clock, &mut NullSink).unwrap();
    assert_eq!(game_over(&events), Some(Some(PlayerId(0))));
    assert_eq!(session.roster.get(PlayerId(0)).stats.score, 3);
}

#[test]
fn test_king_of_the_hill_ranks_by_longest_length() {
    let (mut session, mut clock) =
        session_for(GameMode::KingOfTheHill, |c| c.max_time_seconds = 60);
    session.step(&join(&[0, 1]), &clock, &mut NullSink).unwrap();
    session.roster.get_mut(PlayerId(1)).grow(4);

    clock.set(60);
    let events = session.step(&ScriptedInput::new(), &clock, &mut NullSink).unwrap();

    assert_eq!(game_over(&events), Some(Some(PlayerId(1))));
    let standings = session.standings();
    assert_eq!(standings[0].player, PlayerId(1));
    assert_eq!(standings[0].score, 7);
    assert_eq!(standings[1].score, 3);
}

#[test]
fn test_battle_royale_sudden_death() {
    let (mut session, mut clock) = session_for(GameMode::BattleRoyale, |c| {
        c.max_time_seconds = 20;
        c.max_lives = 3;
    });
    session.step(&join(&[0, 1]), &clock, &mut NullSink).unwrap();

    // Time is up: sudden death starts, two players still in it
    clock.set(20);
    let events = session.step(&ScriptedInput::new(), &clock, &mut NullSink).unwrap();
    assert!(events
        .iter()
        .any(|e| matches!(e, SimulationEvent::SuddenDeathStarted { .. })));
    assert!(session.hazard.is_active());
    assert_eq!(game_over(&events), None);

    // Nobody may join once the hazard is running
    let events = session.step(&join(&[2]), &clock, &mut NullSink).unwrap();
    assert!(!events
        .iter()
        .any(|e| matches!(e, SimulationEvent::Spawned { .. })));
    assert!(!session.roster.get(PlayerId(2)).active);
    assert_eq!(session.hazard.filled_count(), 1);
    assert!(session.hazard.is_filled(Position::new(2, 6)));

    // Fill further down the first column, then steer player 1 into it
    for _ in 0..4 {
        session.hazard.advance();
    }
    assert!(session.hazard.is_filled(Position::new(2, 8)));
    session
        .roster
        .get_mut(PlayerId(0))
        .spawn_at(Position::new(3, 8), Direction::Left);

    let events = session.step(&ScriptedInput::new(), &clock, &mut NullSink).unwrap();

    assert!(events.contains(&SimulationEvent::Died {
        player: PlayerId(0),
        cause: Some(DeathCause::Hazard),
        tick: 3,
    }));
    assert_eq!(game_over(&events), Some(Some(PlayerId(1))));
    assert_eq!(session.roster.get(PlayerId(0)).stats.score, 2);
    assert_eq!(session.roster.get(PlayerId(1)).stats.score, 3);
}

#[test]
fn test_battle_royale_waits_out_the_grace_period() {
    let (mut session, mut clock) = session_for(GameMode::BattleRoyale, |c| c.max_lives = 1);
    let mut input = ScriptedInput::new();
    input.join(0).press(0, Direction::Up);
    session.step(&input, &clock, &mut NullSink).unwrap();
    session.step(&join(&[1]), &clock, &mut NullSink).unwrap();

    // Player 1 is out of lives but the session is too young to end
    assert_eq!(session.roster.get(PlayerId(0)).stats.deaths, 1);
    assert!(!session.is_game_over());

    clock.set(15);
    let events = session.step(&ScriptedInput::new(), &clock, &mut NullSink).unwrap();
    assert_eq!(game_over(&events), Some(Some(PlayerId(1))));
}

#[test]
fn test_battle_royale_out_of_lives_cannot_rejoin() {
    let (mut session, clock) = session_for(GameMode::BattleRoyale, |c| c.max_lives = 1);
    let mut input = ScriptedInput::new();
    input.join(0).press(0, Direction::Up);
    session.step(&input, &clock, &mut NullSink).unwrap();

    let events = session.step(&join(&[0]), &clock, &mut NullSink).unwrap();

    assert!(events.is_empty());
    assert!(!session.roster.get(PlayerId(0)).active);
    assert_eq!(session.roster.get(PlayerId(0)).stats.score, 0);
}
