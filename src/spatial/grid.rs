//! Generic dense grid over integer cells

use crate::core::types::Position;

/// Row-major 2D grid anchored at an origin cell
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T: Clone + Default> {
    pub width: usize,
    pub height: usize,
    pub origin: Position,
    data: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    pub fn new(width: usize, height: usize, origin: Position) -> Self {
        Self {
            width,
            height,
            origin,
            data: vec![T::default(); width * height],
        }
    }

    /// Flat index of a cell, `None` outside the grid
    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.index(x, y).map(|i| &self.data[i])
    }

    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        let i = self.index(x, y)?;
        self.data.get_mut(i)
    }

    /// Write a cell; writes outside the grid are dropped
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        if let Some(cell) = self.get_mut(x, y) {
            *cell = value;
        }
    }

    /// Convert a world position to cell coordinates, `None` when outside
    #[inline]
    pub fn world_to_cell(&self, pos: Position) -> Option<(usize, usize)> {
        let x = pos.x - self.origin.x;
        let y = pos.y - self.origin.y;
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((x as usize, y as usize))
    }

    /// Cell under a world position
    pub fn sample(&self, pos: Position) -> Option<&T> {
        let (x, y) = self.world_to_cell(pos)?;
        self.get(x, y)
    }

    /// World position of a cell
    pub fn cell_position(&self, x: usize, y: usize) -> Position {
        Position::new(self.origin.x + x as i32, self.origin.y + y as i32)
    }

    /// Reset every cell to the default value
    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|cell| *cell = T::default());
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
