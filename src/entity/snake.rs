//! A single player's snake: identity, heading, flags, body and counters

use serde::{Deserialize, Serialize};

use crate::arena;
use crate::core::types::{Direction, PlayerId, Position};
use crate::entity::body::{Body, SPAWN_LENGTH};

/// Port offset for players on the second multitap
const SECOND_TAP_OFFSET: u8 = 9;
/// Players per multitap
const PLAYERS_PER_TAP: u8 = 6;

/// One distinct glyph per player id
const GLYPHS: [char; 12] = ['█', '#', 'Γ', '▒', 'V', '&', '@', '8', '%', '0', 'Q', '§'];

/// Per-player counters, kept across deaths until the scores are cleared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeStats {
    pub apples: i32,
    pub deaths: i32,
    pub kills: i32,
    pub players_eaten: i32,
    pub max_length: i32,
    /// Recomputed every tick by the rules engine
    pub score: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    pub id: PlayerId,
    /// Input port this snake is steered from
    pub controller: u8,
    pub glyph: char,
    pub heading: Direction,
    pub active: bool,
    pub ever_active: bool,
    pub dying: bool,
    pub body: Body,
    pub stats: SnakeStats,
}

impl Snake {
    /// Inactive snake for roster slot `id`
    pub fn new(id: PlayerId) -> Self {
        let controller = if id.0 < PLAYERS_PER_TAP {
            id.0
        } else {
            id.0 + SECOND_TAP_OFFSET
        };

        Self {
            id,
            controller,
            glyph: GLYPHS[id.index()],
            heading: Direction::Up,
            active: false,
            ever_active: false,
            dying: false,
            body: Body::default(),
            stats: SnakeStats::default(),
        }
    }

    /// Bring the snake onto the arena at its spawn pit
    pub fn spawn(&mut self) {
        let (head, heading) = arena::spawn_point(self.id);
        self.spawn_at(head, heading);
    }

    /// Spawn with an explicit head position and heading
    pub fn spawn_at(&mut self, head: Position, heading: Direction) {
        self.body = Body::spawn(head);
        self.heading = heading;
        self.active = true;
        self.ever_active = true;
        self.dying = false;
        self.stats.max_length = self.stats.max_length.max(SPAWN_LENGTH as i32);
    }

    pub fn head(&self) -> Option<Position> {
        self.body.head()
    }

    pub fn current_length(&self) -> i32 {
        self.body.len() as i32
    }

    /// Add `amount` segments and track the longest length reached
    pub fn grow(&mut self, amount: usize) {
        self.body.grow(amount);
        self.stats.max_length = self.stats.max_length.max(self.current_length());
    }

    /// Death sweep for this snake: count the death, free the body, reset flags.
    ///
    /// Returns the released segment positions so they can be erased.
    pub fn kill(&mut self) -> Vec<Position> {
        let released = self.body.destroy();
        self.stats.deaths += 1;
        self.active = false;
        self.dying = false;
        self.heading = Direction::Up;
        released
    }

    /// Zero every counter without touching the body
    pub fn clear_stats(&mut self) {
        self.stats = SnakeStats::default();
    }

    /// Back to the never-joined state
    pub fn reset(&mut self) {
        *self = Snake::new(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_mapping_skips_to_second_tap() {
        assert_eq!(Snake::new(PlayerId(0)).controller, 0);
        assert_eq!(Snake::new(PlayerId(5)).controller, 5);
        assert_eq!(Snake::new(PlayerId(6)).controller, 15);
        assert_eq!(Snake::new(PlayerId(11)).controller, 20);
    }

    #[test]
    fn test_spawn_sets_flags_and_length() {
        let mut snake = Snake::new(PlayerId(7));
        assert!(!snake.active);

        snake.spawn();
        assert!(snake.active && snake.ever_active && !snake.dying);
        assert_eq!(snake.head(), Some(Position::new(9, 5)));
        assert_eq!(snake.heading, Direction::Down);
        assert_eq!(snake.current_length(), 3);
        assert_eq!(snake.stats.max_length, 3);
    }

    #[test]
    fn test_spawn_keeps_longer_max_length() {
        let mut snake = Snake::new(PlayerId(0));
        snake.stats.max_length = 10;
        snake.spawn();
        assert_eq!(snake.stats.max_length, 10);
    }

    #[test]
    fn test_grow_tracks_max_length() {
        let mut snake = Snake::new(PlayerId(0));
        snake.spawn();
        snake.grow(4);
        assert_eq!(snake.current_length(), 7);
        assert_eq!(snake.stats.max_length, 7);
    }

    #[test]
    fn test_kill_counts_death_and_clears_body() {
        let mut snake = Snake::new(PlayerId(2));
        snake.spawn();
        snake.dying = true;

        let released = snake.kill();
        assert_eq!(released.len(), 3);
        assert!(!snake.active && !snake.dying);
        assert!(snake.ever_active);
        assert_eq!(snake.stats.deaths, 1);
        assert_eq!(snake.current_length(), 0);
    }

    #[test]
    fn test_glyphs_are_distinct() {
        let mut glyphs: Vec<char> = GLYPHS.to_vec();
        glyphs.sort();
        glyphs.dedup();
        assert_eq!(glyphs.len(), GLYPHS.len());
    }
}
