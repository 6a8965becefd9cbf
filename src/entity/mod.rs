pub mod body;
pub mod roster;
pub mod snake;

pub use body::{Body, SPAWN_LENGTH};
pub use roster::Roster;
pub use snake::{Snake, SnakeStats};
