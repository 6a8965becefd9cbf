//! Character canvas fed by the simulation's draw commands

use crate::arena::{self, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::core::types::Position;
use crate::interface::{Glyph, PresentationSink};
use crate::spatial::Grid;

/// What the front-end shows in each screen cell
#[derive(Debug, Clone)]
pub struct Canvas {
    cells: Grid<Option<Glyph>>,
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            cells: Grid::new(SCREEN_WIDTH, SCREEN_HEIGHT, Position::default()),
        }
    }

    pub fn width(&self) -> usize {
        self.cells.width
    }

    pub fn height(&self) -> usize {
        self.cells.height
    }

    pub fn glyph_at(&self, pos: Position) -> Option<Glyph> {
        self.cells.sample(pos).copied().flatten()
    }

    /// Character for a cell: drawn glyph first, then wall, then blank
    pub fn symbol_at(&self, pos: Position) -> char {
        match self.glyph_at(pos) {
            Some(glyph) => glyph.symbol(),
            None if arena::is_wall(pos) => wall_symbol(pos),
            None => ' ',
        }
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

fn wall_symbol(pos: Position) -> char {
    let vertical = pos.x == arena::WALL_LEFT || pos.x == arena::WALL_RIGHT;
    let horizontal = pos.y == arena::WALL_TOP || pos.y == arena::WALL_BOTTOM;
    match (vertical, horizontal) {
        (true, true) => '+',
        (true, false) => '|',
        _ => '-',
    }
}

impl PresentationSink for Canvas {
    fn place(&mut self, pos: Position, glyph: Glyph) {
        if let Some((x, y)) = self.cells.world_to_cell(pos) {
            self.cells.set(x, y, Some(glyph));
        }
    }

    fn erase(&mut self, pos: Position) {
        if let Some((x, y)) = self.cells.world_to_cell(pos) {
            self.cells.set(x, y, None);
        }
    }
}
