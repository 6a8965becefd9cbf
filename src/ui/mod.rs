//! UI module - terminal front-end for a live session

pub mod canvas;
pub mod input;
pub mod state;
pub mod terminal;

pub use canvas::Canvas;
pub use input::{Command, KeyboardInput};
pub use state::{GameUI, LogCategory, LogEntry, Screen};
