//! Session state: roster, food, hazard grid and options for one game

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::arena::OFF_ARENA;
use crate::core::config::{GameConfig, MAX_SLOWDOWN, MIN_SLOWDOWN};
use crate::core::error::Result;
use crate::core::types::{PlayerId, Tick};
use crate::entity::Roster;
use crate::interface::{Clock, Glyph, InputSource, PresentationSink};
use crate::rules::{standings, RankEntry};
use crate::simulation::food::Food;
use crate::simulation::hazard::HazardGrid;
use crate::simulation::tick::{run_tick, SimulationEvent};

pub struct Session {
    pub config: GameConfig,
    pub roster: Roster,
    pub food: Food,
    pub hazard: HazardGrid,
    pub current_tick: Tick,
    /// Clock reading when this session started
    pub session_start: u64,
    game_over: bool,
    pub(crate) rng: ChaCha8Rng,
}

impl Session {
    pub fn new<C: Clock + ?Sized>(config: GameConfig, clock: &C) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        tracing::info!("New {} session (seed {})", config.mode.label(), seed);

        Self {
            config,
            roster: Roster::new(),
            food: Food::new(),
            hazard: HazardGrid::for_arena(),
            current_tick: 0,
            session_start: clock.now_seconds(),
            game_over: false,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Advance the game by one tick
    pub fn step<I, C, S>(&mut self, input: &I, clock: &C, sink: &mut S) -> Result<Vec<SimulationEvent>>
    where
        I: InputSource + ?Sized,
        C: Clock + ?Sized,
        S: PresentationSink + ?Sized,
    {
        run_tick(self, input, clock, sink)
    }

    pub fn elapsed_seconds<C: Clock + ?Sized>(&self, clock: &C) -> u64 {
        clock.now_seconds().saturating_sub(self.session_start)
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub(crate) fn finish(&mut self) {
        self.game_over = true;
    }

    /// Start a fresh session with the same options: every snake removed,
    /// counters cleared, food and hazard grid back to their initial state.
    pub fn reset<C, S>(&mut self, clock: &C, sink: &mut S)
    where
        C: Clock + ?Sized,
        S: PresentationSink + ?Sized,
    {
        for snake in self.roster.active() {
            for pos in snake.body.segments().filter(|&p| p != OFF_ARENA) {
                sink.erase(pos);
            }
        }
        for pos in self.hazard.filled_cells() {
            sink.erase(pos);
        }
        sink.erase(self.food.position);

        self.roster.iter_mut().for_each(|s| s.reset());
        self.food = Food::new();
        self.hazard.reset();
        self.current_tick = 0;
        self.session_start = clock.now_seconds();
        self.game_over = false;

        sink.place(self.food.position, Glyph::Food);
        tracing::info!("Session reset ({})", self.config.mode.label());
    }

    /// Zero every player's counters; bodies stay where they are
    pub fn clear_scores(&mut self) {
        self.roster.iter_mut().for_each(|s| s.clear_stats());
        // Living snakes keep their current length as the longest reached
        for snake in self.roster.iter_mut().filter(|s| s.active) {
            snake.stats.max_length = snake.current_length();
        }
        tracing::info!("Scores cleared");
    }

    /// Fewer waits between ticks; returns the new slowdown
    pub fn speed_up(&mut self) -> u8 {
        self.config.slowdown = self.config.slowdown.saturating_sub(1).max(MIN_SLOWDOWN);
        self.config.slowdown
    }

    /// More waits between ticks; returns the new slowdown
    pub fn slow_down(&mut self) -> u8 {
        self.config.slowdown = (self.config.slowdown + 1).min(MAX_SLOWDOWN);
        self.config.slowdown
    }

    /// Emit every visible cell again
    pub fn redraw<S: PresentationSink + ?Sized>(&self, sink: &mut S) {
        for snake in self.roster.active() {
            for pos in snake.body.segments().filter(|&p| p != OFF_ARENA) {
                sink.place(pos, Glyph::Snake(snake.glyph));
            }
        }
        // Filled cells show the hazard even under a body
        for pos in self.hazard.filled_cells() {
            sink.place(pos, Glyph::Hazard);
        }
        sink.place(self.food.position, Glyph::Food);
    }

    /// Ranked table of players who are or were in the game
    pub fn standings(&self) -> Vec<RankEntry> {
        standings(&self.roster)
    }

    /// Top of the standings, if anyone played
    pub fn winner(&self) -> Option<PlayerId> {
        self.standings().first().map(|e| e.player)
    }
}
