//! Fixed twelve-slot player roster

use serde::{Deserialize, Serialize};

use crate::core::types::{PlayerId, Position, MAX_PLAYERS};
use crate::entity::snake::Snake;

/// Every player slot, indexed by `PlayerId`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    snakes: Vec<Snake>,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            snakes: PlayerId::all().map(Snake::new).collect(),
        }
    }

    pub fn get(&self, id: PlayerId) -> &Snake {
        &self.snakes[id.index()]
    }

    pub fn get_mut(&mut self, id: PlayerId) -> &mut Snake {
        &mut self.snakes[id.index()]
    }

    /// All slots in index order
    pub fn iter(&self) -> impl Iterator<Item = &Snake> {
        self.snakes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Snake> {
        self.snakes.iter_mut()
    }

    /// Active snakes in index order
    pub fn active(&self) -> impl Iterator<Item = &Snake> {
        self.snakes.iter().filter(|s| s.active)
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// True when any segment of any active snake sits on `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.active().any(|s| s.body.contains(pos))
    }

    pub fn as_slice(&self) -> &[Snake] {
        &self.snakes
    }

    pub fn as_mut_slice(&mut self) -> &mut [Snake] {
        &mut self.snakes
    }

    pub fn len(&self) -> usize {
        MAX_PLAYERS
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
