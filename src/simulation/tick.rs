//! Tick system - runs one simulation step over the session
//!
//! Phases run strictly in this order, each finishing before the next:
//! spawn + movement -> hazard advance -> collision -> death sweep -> food -> rules.
//! Collisions therefore only ever see post-move heads.

use std::collections::HashSet;

use crate::arena::OFF_ARENA;
use crate::core::error::Result;
use crate::core::types::{PlayerId, Position, Tick, MAX_PLAYERS};
use crate::interface::{Clock, Glyph, InputSource, PresentationSink};
use crate::rules::{validate_scores, RuleContext};
use crate::simulation::collision::{self, Collision};
use crate::simulation::food;
use crate::simulation::hazard::HazardStep;
use crate::simulation::movement;
use crate::simulation::session::Session;

/// Why a snake was removed in the death sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    Wall,
    SelfBody,
    /// Ran into another snake's body
    Body { owner: PlayerId },
    /// Swallowed head-on by a snake at least twice as long
    Eaten { by: PlayerId },
    Hazard,
}

/// Events generated during a tick, for the front-end's action log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationEvent {
    Spawned {
        player: PlayerId,
        tick: Tick,
    },
    Died {
        player: PlayerId,
        cause: Option<DeathCause>,
        tick: Tick,
    },
    PlayerEaten {
        eater: PlayerId,
        victim: PlayerId,
        /// Length transferred to the eater
        gained: i32,
        tick: Tick,
    },
    AppleEaten {
        player: PlayerId,
        length: i32,
        tick: Tick,
    },
    SuddenDeathStarted {
        tick: Tick,
    },
    GameOver {
        winner: Option<PlayerId>,
        tick: Tick,
    },
}

/// Run one full tick. Does nothing once the session is over.
pub fn run_tick<I, C, S>(
    session: &mut Session,
    input: &I,
    clock: &C,
    sink: &mut S,
) -> Result<Vec<SimulationEvent>>
where
    I: InputSource + ?Sized,
    C: Clock + ?Sized,
    S: PresentationSink + ?Sized,
{
    let mut events = Vec::new();
    if session.is_game_over() {
        return Ok(events);
    }

    let elapsed = session.elapsed_seconds(clock);

    spawn_and_move(session, input, elapsed, sink, &mut events);
    advance_hazard(session, sink)?;
    let causes = resolve_collisions(session, &mut events);
    let erased = sweep_dead(session, &causes, sink, &mut events);
    consume_food(session, &erased, sink, &mut events)?;
    apply_rules(session, elapsed, &mut events);

    session.current_tick += 1;
    Ok(events)
}

/// Spawn joining players, then move every active snake one cell
fn spawn_and_move<I, S>(
    session: &mut Session,
    input: &I,
    elapsed: u64,
    sink: &mut S,
    events: &mut Vec<SimulationEvent>,
) where
    I: InputSource + ?Sized,
    S: PresentationSink + ?Sized,
{
    let tick = session.current_tick;
    let mode = session.config.mode;
    let ctx = RuleContext {
        config: &session.config,
        elapsed_seconds: elapsed,
        hazard_active: session.hazard.is_active(),
    };

    let mut erased = Vec::new();
    let mut placed = Vec::new();

    for snake in session.roster.iter_mut() {
        // Denied joins are dropped silently
        if !snake.active && input.join_requested(snake.controller) && mode.can_spawn(snake, &ctx) {
            snake.spawn();
            tracing::debug!("Player {} joined", snake.id.0 + 1);
            if let Some(head) = snake.head() {
                placed.push((head, Glyph::Snake(snake.glyph)));
            }
            events.push(SimulationEvent::Spawned { player: snake.id, tick });
        }

        if snake.active {
            if let Some(step) = movement::advance(snake, input.heading(snake.controller)) {
                erased.extend(step.vacated.filter(|&p| p != OFF_ARENA));
                placed.push((step.head, Glyph::Snake(snake.glyph)));
            }
        }
    }

    // Erase before drawing so a tail leaving a cell never blanks a head entering it
    for &pos in &erased {
        sink.erase(pos);
    }
    for (pos, glyph) in placed {
        sink.place(pos, glyph);
    }
    restore_hazard(session, erased, sink);
}

/// Re-place the hazard glyph on erased cells the spiral has already filled
fn restore_hazard<S>(session: &Session, erased: impl IntoIterator<Item = Position>, sink: &mut S)
where
    S: PresentationSink + ?Sized,
{
    for pos in erased {
        if session.hazard.is_filled(pos) {
            sink.place(pos, Glyph::Hazard);
        }
    }
}

/// Fill one more sudden-death cell while the hazard phase runs.
///
/// Food swallowed by the spiral moves to a free cell.
fn advance_hazard<S>(session: &mut Session, sink: &mut S) -> Result<()>
where
    S: PresentationSink + ?Sized,
{
    if !session.hazard.is_active() {
        return Ok(());
    }
    let HazardStep::Placed(pos) = session.hazard.advance() else {
        return Ok(());
    };
    sink.place(pos, Glyph::Hazard);

    if pos == session.food.position {
        session.food.position = food::place_food(&mut session.rng, &session.roster, &session.hazard)?;
        tracing::debug!("Hazard covered the food, moved to {:?}", session.food.position);
        sink.place(session.food.position, Glyph::Food);
    }
    Ok(())
}

/// Flag colliding snakes; returns the death cause per roster slot
fn resolve_collisions(
    session: &mut Session,
    events: &mut Vec<SimulationEvent>,
) -> [Option<DeathCause>; MAX_PLAYERS] {
    let tick = session.current_tick;
    let hits = collision::check_all(session.roster.as_mut_slice(), Some(&session.hazard));

    let mut causes = [None; MAX_PLAYERS];
    for (player, hit) in hits {
        let cause = match hit {
            Collision::Wall => DeathCause::Wall,
            Collision::SelfBody => DeathCause::SelfBody,
            Collision::Body { owner } => DeathCause::Body { owner },
            Collision::Hazard => DeathCause::Hazard,
            Collision::Ate { victim, gained } => {
                tracing::info!("Player {} ate player {}", player.0 + 1, victim.0 + 1);
                events.push(SimulationEvent::PlayerEaten {
                    eater: player,
                    victim,
                    gained,
                    tick,
                });
                causes[victim.index()] = Some(DeathCause::Eaten { by: player });
                continue;
            }
        };
        causes[player.index()].get_or_insert(cause);
    }
    causes
}

/// Remove dying snakes; returns the cells that were erased
fn sweep_dead<S>(
    session: &mut Session,
    causes: &[Option<DeathCause>; MAX_PLAYERS],
    sink: &mut S,
    events: &mut Vec<SimulationEvent>,
) -> HashSet<Position>
where
    S: PresentationSink + ?Sized,
{
    let tick = session.current_tick;
    let mut erased: HashSet<Position> = HashSet::new();

    for snake in session.roster.iter_mut() {
        if snake.active && snake.dying {
            let cause = causes[snake.id.index()];
            tracing::debug!("Player {} died: {:?}", snake.id.0 + 1, cause);
            for pos in snake.kill() {
                if pos != OFF_ARENA && erased.insert(pos) {
                    sink.erase(pos);
                }
            }
            events.push(SimulationEvent::Died { player: snake.id, cause, tick });
        }
    }

    // Survivors sharing a cell with a removed body (head-on eats) get redrawn
    if !erased.is_empty() {
        for snake in session.roster.active() {
            for pos in snake.body.segments().filter(|p| erased.contains(p)) {
                sink.place(pos, Glyph::Snake(snake.glyph));
            }
        }
        restore_hazard(session, erased.iter().copied(), sink);
    }

    erased
}

/// At most one snake eats the apple; the apple is redrawn wherever it ends up
fn consume_food<S>(
    session: &mut Session,
    erased: &HashSet<Position>,
    sink: &mut S,
    events: &mut Vec<SimulationEvent>,
) -> Result<()>
where
    S: PresentationSink + ?Sized,
{
    let tick = session.current_tick;
    let eater = food::check_consumption(
        &mut session.food,
        &mut session.roster,
        &session.hazard,
        &mut session.rng,
    )?;
    if let Some(player) = eater {
        let length = session.roster.get(player).current_length();
        events.push(SimulationEvent::AppleEaten { player, length, tick });
    }
    if eater.is_some() || erased.contains(&session.food.position) {
        sink.place(session.food.position, Glyph::Food);
    }

    Ok(())
}

/// Clamp and score, start sudden death when due, check for the end
fn apply_rules(session: &mut Session, elapsed: u64, events: &mut Vec<SimulationEvent>) {
    let tick = session.current_tick;
    let mode = session.config.mode;
    validate_scores(&mut session.roster, mode, &session.config);

    let ctx = RuleContext {
        config: &session.config,
        elapsed_seconds: elapsed,
        hazard_active: session.hazard.is_active(),
    };
    if mode.hazard_due(&ctx) {
        session.hazard.activate();
        tracing::info!("Sudden death started after {}s", elapsed);
        events.push(SimulationEvent::SuddenDeathStarted { tick });
    }

    let ctx = RuleContext {
        hazard_active: session.hazard.is_active(),
        ..ctx
    };
    if mode.is_finished(&session.roster, &ctx) {
        session.finish();
        let winner = session.winner();
        tracing::info!("{} over, winner: {:?}", mode.label(), winner);
        events.push(SimulationEvent::GameOver { winner, tick });
    }
}
