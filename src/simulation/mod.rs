pub mod collision;
pub mod food;
pub mod hazard;
pub mod movement;
pub mod session;
pub mod tick;

pub use collision::{check_all, check_snake, Collision};
pub use food::{check_consumption, place_food, Food};
pub use hazard::{FillDirection, HazardGrid, HazardStep};
pub use movement::{advance, resolve_heading, Step};
pub use session::Session;
pub use tick::{run_tick, DeathCause, SimulationEvent};
