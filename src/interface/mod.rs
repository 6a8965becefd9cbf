//! Narrow contracts between the simulation core and its collaborators
//!
//! The core never polls hardware, reads wall-clock time or draws anything
//! itself. The front-end implements these traits; tests use the scripted
//! doubles defined alongside them.

pub mod clock;
pub mod input;
pub mod sink;

pub use clock::{Clock, ManualClock, SystemClock};
pub use input::{InputSource, ScriptedInput};
pub use sink::{DrawCommand, Glyph, NullSink, PresentationSink};
