//! Keyboard controls mapped onto player controllers
//!
//! Terminals only report key presses, not held keys, so presses are latched
//! until the next tick consumes them.
//!
//! | Player | Steer        | Join |
//! |--------|--------------|------|
//! | 1      | W A S D      | 1    |
//! | 2      | arrow keys   | 2    |
//! | 3      | I J K L      | 3    |
//! | 4      | T F G H      | 4    |
//!
//! Session keys: `+` faster, `-` slower, Enter score view, Esc quit. `z`
//! clears the scores while the score view is open.

use std::collections::{HashMap, HashSet};

use crossterm::event::KeyCode;

use crate::core::types::Direction;
use crate::interface::InputSource;

/// Session-level commands, handled outside the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SpeedUp,
    SlowDown,
    ToggleScores,
    ClearScores,
    Quit,
}

/// Result of routing one key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer { controller: u8, dir: Direction },
    Join { controller: u8 },
    Command(Command),
    Ignored,
}

/// Map a key to what it does
pub fn route_key(code: KeyCode) -> KeyAction {
    use Direction::*;

    match code {
        KeyCode::Up => KeyAction::Steer { controller: 1, dir: Up },
        KeyCode::Down => KeyAction::Steer { controller: 1, dir: Down },
        KeyCode::Left => KeyAction::Steer { controller: 1, dir: Left },
        KeyCode::Right => KeyAction::Steer { controller: 1, dir: Right },
        KeyCode::Enter => KeyAction::Command(Command::ToggleScores),
        KeyCode::Esc => KeyAction::Command(Command::Quit),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => KeyAction::Steer { controller: 0, dir: Up },
            's' => KeyAction::Steer { controller: 0, dir: Down },
            'a' => KeyAction::Steer { controller: 0, dir: Left },
            'd' => KeyAction::Steer { controller: 0, dir: Right },
            'i' => KeyAction::Steer { controller: 2, dir: Up },
            'k' => KeyAction::Steer { controller: 2, dir: Down },
            'j' => KeyAction::Steer { controller: 2, dir: Left },
            'l' => KeyAction::Steer { controller: 2, dir: Right },
            't' => KeyAction::Steer { controller: 3, dir: Up },
            'g' => KeyAction::Steer { controller: 3, dir: Down },
            'f' => KeyAction::Steer { controller: 3, dir: Left },
            'h' => KeyAction::Steer { controller: 3, dir: Right },
            '1'..='4' => KeyAction::Join { controller: c as u8 - b'1' },
            '+' | '=' => KeyAction::Command(Command::SpeedUp),
            '-' => KeyAction::Command(Command::SlowDown),
            'z' => KeyAction::Command(Command::ClearScores),
            _ => KeyAction::Ignored,
        },
        _ => KeyAction::Ignored,
    }
}

/// Latched keyboard state read by the simulation
#[derive(Debug, Default)]
pub struct KeyboardInput {
    headings: HashMap<u8, Direction>,
    joins: HashSet<u8>,
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch a key press; session commands are handed back to the caller
    pub fn handle_key(&mut self, code: KeyCode) -> Option<Command> {
        match route_key(code) {
            KeyAction::Steer { controller, dir } => {
                self.headings.insert(controller, dir);
                None
            }
            KeyAction::Join { controller } => {
                self.joins.insert(controller);
                None
            }
            KeyAction::Command(cmd) => Some(cmd),
            KeyAction::Ignored => None,
        }
    }

    /// Forget everything latched since the last tick
    pub fn end_tick(&mut self) {
        self.headings.clear();
        self.joins.clear();
    }
}

impl InputSource for KeyboardInput {
    fn heading(&self, controller: u8) -> Option<Direction> {
        self.headings.get(&controller).copied()
    }

    fn join_requested(&self, controller: u8) -> bool {
        self.joins.contains(&controller)
    }
}
