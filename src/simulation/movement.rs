//! Movement engine: heading update and single-step advance

use crate::core::types::{Direction, Position};
use crate::entity::Snake;

/// Result of moving one snake by one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub head: Position,
    /// Cell the tail segment left
    pub vacated: Option<Position>,
}

/// Apply a requested heading unless it would reverse the snake onto itself
pub fn resolve_heading(current: Direction, requested: Option<Direction>) -> Direction {
    match requested {
        Some(dir) if dir != current.opposite() => dir,
        _ => current,
    }
}

/// Turn (if allowed) and move the snake one cell forward
pub fn advance(snake: &mut Snake, requested: Option<Direction>) -> Option<Step> {
    let current = snake.head()?;
    snake.heading = resolve_heading(snake.heading, requested);
    let head = current.step(snake.heading);
    let vacated = snake.body.advance_head(head);
    Some(Step { head, vacated })
}
