//! Wings no Yaiba minigame.
//!
//! A real-time obstacle-avoidance game: the player sprite falls under gravity,
//! a tap pushes it upward, and a single pipe pair scrolls in from the right
//! with a random gap. Touching a pipe or the floor ends the round; every pipe
//! pass is worth 7 points.

pub mod collision;
pub mod logic;
pub mod obstacle;
pub mod session;
pub mod types;

pub use collision::Rect;
pub use logic::*;
pub use session::YaibaSession;
pub use types::*;
