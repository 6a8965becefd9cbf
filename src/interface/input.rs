use std::collections::{HashMap, HashSet};

use crate::core::types::Direction;

/// Per-controller steering state read once per tick
pub trait InputSource {
    /// Most recently requested heading on `controller`, if any
    fn heading(&self, controller: u8) -> Option<Direction>;

    /// True while the join button on `controller` is down
    fn join_requested(&self, controller: u8) -> bool;
}

/// Input double holding fixed per-controller state
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    headings: HashMap<u8, Direction>,
    joins: HashSet<u8>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, controller: u8, dir: Direction) -> &mut Self {
        self.headings.insert(controller, dir);
        self
    }

    pub fn join(&mut self, controller: u8) -> &mut Self {
        self.joins.insert(controller);
        self
    }

    /// Release every button
    pub fn clear(&mut self) {
        self.headings.clear();
        self.joins.clear();
    }
}

impl InputSource for ScriptedInput {
    fn heading(&self, controller: u8) -> Option<Direction> {
        self.headings.get(&controller).copied()
    }

    fn join_requested(&self, controller: u8) -> bool {
        self.joins.contains(&controller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_reports_presses() {
        let mut input = ScriptedInput::new();
        input.press(3, Direction::Left).join(15);

        assert_eq!(input.heading(3), Some(Direction::Left));
        assert_eq!(input.heading(4), None);
        assert!(input.join_requested(15));
        assert!(!input.join_requested(3));

        input.clear();
        assert_eq!(input.heading(3), None);
        assert!(!input.join_requested(15));
    }
}
