//! Sudden-death hazard grid
//!
//! Fills the arena interior one cell per tick along an inward spiral:
//! down the left column, along the bottom, up the right side, back along
//! the top, and so on. A tick that hits the edge or an already filled cell
//! only turns the cursor; the next tick places again.

use crate::arena;
use crate::core::types::Position;
use crate::spatial::Grid;

/// Direction the fill cursor travels in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillDirection {
    Down,
    Left,
    Up,
    Right,
}

impl FillDirection {
    /// Down -> Right -> Up -> Left -> Down
    fn rotate(self) -> Self {
        match self {
            FillDirection::Down => FillDirection::Right,
            FillDirection::Right => FillDirection::Up,
            FillDirection::Up => FillDirection::Left,
            FillDirection::Left => FillDirection::Down,
        }
    }

    fn delta(self) -> (i32, i32) {
        match self {
            FillDirection::Down => (0, 1),
            FillDirection::Left => (-1, 0),
            FillDirection::Up => (0, -1),
            FillDirection::Right => (1, 0),
        }
    }
}

/// Outcome of one advancement call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardStep {
    /// A cell was filled at this world position
    Placed(Position),
    /// Blocked; the cursor turned and nothing was placed
    Turned,
    /// Every cell is already filled
    Complete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HazardGrid {
    cells: Grid<bool>,
    cursor: (i32, i32),
    direction: FillDirection,
    filled: usize,
    active: bool,
}

impl HazardGrid {
    /// Empty grid covering `width` x `height` cells from `origin`
    pub fn new(width: usize, height: usize, origin: Position) -> Self {
        Self {
            cells: Grid::new(width, height, origin),
            // One above the top-left cell so the first placement lands on it
            cursor: (0, -1),
            direction: FillDirection::Down,
            filled: 0,
            active: false,
        }
    }

    /// Grid sized to the arena interior
    pub fn for_arena() -> Self {
        Self::new(
            arena::INTERIOR_WIDTH,
            arena::INTERIOR_HEIGHT,
            arena::interior_origin(),
        )
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start advancing from the next tick on
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Empty, inactive, cursor back at the start
    pub fn reset(&mut self) {
        let (width, height, origin) = (self.cells.width, self.cells.height, self.cells.origin);
        *self = Self::new(width, height, origin);
    }

    pub fn filled_count(&self) -> usize {
        self.filled
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_complete(&self) -> bool {
        self.filled == self.cells.len()
    }

    pub fn direction(&self) -> FillDirection {
        self.direction
    }

    /// True when `pos` is a filled cell; positions off the grid are never filled
    pub fn is_filled(&self, pos: Position) -> bool {
        self.cells.sample(pos).copied().unwrap_or(false)
    }

    /// World positions of every filled cell
    pub fn filled_cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cells.height).flat_map(move |y| {
            (0..self.cells.width)
                .filter(move |&x| self.cells.get(x, y).copied().unwrap_or(false))
                .map(move |x| self.cells.cell_position(x, y))
        })
    }

    /// Try to fill the next cell along the spiral
    pub fn advance(&mut self) -> HazardStep {
        if self.is_complete() {
            return HazardStep::Complete;
        }

        let (dx, dy) = self.direction.delta();
        let (cx, cy) = (self.cursor.0 + dx, self.cursor.1 + dy);

        let free = cx >= 0
            && cy >= 0
            && matches!(self.cells.get(cx as usize, cy as usize), Some(false));

        if !free {
            self.direction = self.direction.rotate();
            return HazardStep::Turned;
        }

        self.cells.set(cx as usize, cy as usize, true);
        self.cursor = (cx, cy);
        self.filled += 1;
        HazardStep::Placed(self.cells.cell_position(cx as usize, cy as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placements(grid: &mut HazardGrid, calls: usize) -> Vec<Position> {
        (0..calls)
            .filter_map(|_| match grid.advance() {
                HazardStep::Placed(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_first_placement_is_top_left() {
        let mut grid = HazardGrid::for_arena();
        assert_eq!(grid.advance(), HazardStep::Placed(arena::interior_origin()));
        assert_eq!(grid.filled_count(), 1);
    }

    #[test]
    fn test_turn_tick_places_nothing() {
        let mut grid = HazardGrid::new(2, 2, Position::new(0, 0));
        assert_eq!(grid.advance(), HazardStep::Placed(Position::new(0, 0)));
        assert_eq!(grid.advance(), HazardStep::Placed(Position::new(0, 1)));
        assert_eq!(grid.advance(), HazardStep::Turned);
        assert_eq!(grid.direction(), FillDirection::Right);
        assert_eq!(grid.filled_count(), 2);
        assert_eq!(grid.advance(), HazardStep::Placed(Position::new(1, 1)));
    }

    #[test]
    fn test_spiral_order_on_small_grid() {
        let mut grid = HazardGrid::new(3, 3, Position::new(0, 0));
        let order = placements(&mut grid, 40);
        let expected: Vec<Position> = [
            (0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (2, 0), (1, 0), (1, 1),
        ]
        .iter()
        .map(|&(x, y)| Position::new(x, y))
        .collect();
        assert_eq!(order, expected);
        assert_eq!(grid.advance(), HazardStep::Complete);
    }

    #[test]
    fn test_arena_grid_fills_every_cell_once() {
        let mut grid = HazardGrid::for_arena();
        let total = grid.cell_count();
        let order = placements(&mut grid, total * 4);

        assert_eq!(order.len(), total);
        let mut unique = order.clone();
        unique.sort_by_key(|p| (p.x, p.y));
        unique.dedup();
        assert_eq!(unique.len(), total);
        assert!(grid.is_complete());
        assert!(order.iter().all(|&p| arena::is_interior(p)));
    }

    #[test]
    fn test_reset_empties_grid() {
        let mut grid = HazardGrid::for_arena();
        grid.activate();
        placements(&mut grid, 10);
        assert!(grid.is_filled(arena::interior_origin()));

        grid.reset();
        assert!(!grid.is_active());
        assert_eq!(grid.filled_count(), 0);
        assert!(!grid.is_filled(arena::interior_origin()));
        assert_eq!(grid.filled_cells().count(), 0);
    }

    #[test]
    fn test_off_grid_positions_never_filled() {
        let grid = HazardGrid::for_arena();
        assert!(!grid.is_filled(arena::OFF_ARENA));
        assert!(!grid.is_filled(Position::new(-3, -3)));
    }
}
