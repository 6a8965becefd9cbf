//! Segment chain of a snake
//!
//! Stored as a double-ended buffer, head at the front and tail at the back.
//! A normal step rotates the tail slot around to the front, so movement
//! never allocates once the buffer has grown to the snake's length.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::arena::OFF_ARENA;
use crate::core::types::Position;

/// Length every snake starts with
pub const SPAWN_LENGTH: usize = 3;

/// Ordered body segments, head first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    segments: VecDeque<Position>,
}

impl Body {
    /// Three-segment body: head at `head`, the rest parked off-arena
    pub fn spawn(head: Position) -> Self {
        let mut segments = VecDeque::with_capacity(SPAWN_LENGTH);
        segments.push_back(head);
        for _ in 1..SPAWN_LENGTH {
            segments.push_back(OFF_ARENA);
        }
        Self { segments }
    }

    pub fn head(&self) -> Option<Position> {
        self.segments.front().copied()
    }

    pub fn tail(&self) -> Option<Position> {
        self.segments.back().copied()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments from head to tail
    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.segments.iter().copied()
    }

    /// Segments after the head
    pub fn trailing(&self) -> impl Iterator<Item = Position> + '_ {
        self.segments.iter().skip(1).copied()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// Move the tail segment to `new_head`; returns where the tail was.
    ///
    /// The segment count never changes here.
    pub fn advance_head(&mut self, new_head: Position) -> Option<Position> {
        let vacated = self.segments.pop_back()?;
        self.segments.push_front(new_head);
        Some(vacated)
    }

    /// Append `amount` off-arena segments at the tail
    pub fn grow(&mut self, amount: usize) {
        self.segments.reserve(amount);
        for _ in 0..amount {
            self.segments.push_back(OFF_ARENA);
        }
    }

    /// Release every segment, head first, returning their last positions
    pub fn destroy(&mut self) -> Vec<Position> {
        self.segments.drain(..).collect()
    }
}
