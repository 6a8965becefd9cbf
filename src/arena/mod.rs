//! Arena geometry: playable bounds, wall rule and spawn points
//!
//! The screen is a 40x26 character grid. Walls run along x = 1 and x = 38
//! and along y = 5 and y = 24; everything strictly between them is the
//! interior. Each spawn point sits in a pit cut into a wall, so a snake
//! starts on the wall line facing into the arena.

use crate::core::types::{Direction, PlayerId, Position, MAX_PLAYERS};

pub const WALL_LEFT: i32 = 1;
pub const WALL_RIGHT: i32 = 38;
pub const WALL_TOP: i32 = 5;
pub const WALL_BOTTOM: i32 = 24;

pub const INTERIOR_WIDTH: usize = (WALL_RIGHT - WALL_LEFT - 1) as usize;
pub const INTERIOR_HEIGHT: usize = (WALL_BOTTOM - WALL_TOP - 1) as usize;

/// Screen size including the pits that poke outside the wall lines
pub const SCREEN_WIDTH: usize = 40;
pub const SCREEN_HEIGHT: usize = 26;

/// Where unplaced body segments live until the snake has moved onto them
pub const OFF_ARENA: Position = Position::new(50, 50);

/// First food position of every session
pub const INITIAL_FOOD: Position = Position::new(19, 15);

/// Spawn head position and heading per player id
const SPAWN_POINTS: [(Position, Direction); MAX_PLAYERS] = [
    (Position::new(1, 9), Direction::Right),
    (Position::new(38, 21), Direction::Left),
    (Position::new(1, 21), Direction::Right),
    (Position::new(38, 9), Direction::Left),
    (Position::new(1, 15), Direction::Right),
    (Position::new(38, 15), Direction::Left),
    (Position::new(29, 24), Direction::Up),
    (Position::new(9, 5), Direction::Down),
    (Position::new(9, 24), Direction::Up),
    (Position::new(29, 5), Direction::Down),
    (Position::new(19, 24), Direction::Up),
    (Position::new(19, 5), Direction::Down),
];

/// Top-left cell of the interior
pub fn interior_origin() -> Position {
    Position::new(WALL_LEFT + 1, WALL_TOP + 1)
}

/// True for cells strictly inside the walls
pub fn is_interior(pos: Position) -> bool {
    pos.x > WALL_LEFT && pos.x < WALL_RIGHT && pos.y > WALL_TOP && pos.y < WALL_BOTTOM
}

/// Every interior cell, row by row
pub fn interior_cells() -> impl Iterator<Item = Position> {
    ((WALL_TOP + 1)..WALL_BOTTOM)
        .flat_map(|y| ((WALL_LEFT + 1)..WALL_RIGHT).map(move |x| Position::new(x, y)))
}

/// Wall rule: a head on or past a wall line dies unless it is heading
/// back into the arena on that axis.
pub fn hits_wall(head: Position, heading: Direction) -> bool {
    (head.y <= WALL_TOP && heading != Direction::Down)
        || (head.y >= WALL_BOTTOM && heading != Direction::Up)
        || (head.x <= WALL_LEFT && heading != Direction::Right)
        || (head.x >= WALL_RIGHT && heading != Direction::Left)
}

/// Head position and heading a freshly spawned snake starts with
pub fn spawn_point(id: PlayerId) -> (Position, Direction) {
    SPAWN_POINTS[id.index()]
}

/// Wall cells left open for the spawn pits
pub fn pit_openings() -> impl Iterator<Item = Position> {
    SPAWN_POINTS.iter().map(|(pos, _)| *pos)
}

/// True for cells on a wall line that are not pit openings
pub fn is_wall(pos: Position) -> bool {
    let on_vertical = (pos.x == WALL_LEFT || pos.x == WALL_RIGHT)
        && pos.y >= WALL_TOP
        && pos.y <= WALL_BOTTOM;
    let on_horizontal = (pos.y == WALL_TOP || pos.y == WALL_BOTTOM)
        && pos.x >= WALL_LEFT
        && pos.x <= WALL_RIGHT;
    (on_vertical || on_horizontal) && !pit_openings().any(|p| p == pos)
}
