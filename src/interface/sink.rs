use crate::core::types::Position;

/// What occupies a drawn cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Snake(char),
    Food,
    Hazard,
}

impl Glyph {
    pub fn symbol(self) -> char {
        match self {
            Glyph::Snake(c) => c,
            Glyph::Food => '*',
            Glyph::Hazard => 'X',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    Place { pos: Position, glyph: Glyph },
    Erase { pos: Position },
}

/// Receives the per-tick cell placements and removals
pub trait PresentationSink {
    fn place(&mut self, pos: Position, glyph: Glyph);
    fn erase(&mut self, pos: Position);
}

/// Records every command in order
impl PresentationSink for Vec<DrawCommand> {
    fn place(&mut self, pos: Position, glyph: Glyph) {
        self.push(DrawCommand::Place { pos, glyph });
    }

    fn erase(&mut self, pos: Position) {
        self.push(DrawCommand::Erase { pos });
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl PresentationSink for NullSink {
    fn place(&mut self, _pos: Position, _glyph: Glyph) {}
    fn erase(&mut self, _pos: Position) {}
}
