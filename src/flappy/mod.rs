//! Flappy game core.
//!
//! A bird falls under constant gravity and flaps upward on each gesture
//! trigger while pipe pairs scroll in from the right. Hitting a pipe or
//! either screen edge ends the session; every pipe passed scores a point.

pub mod collision;
pub mod logic;
pub mod obstacles;
pub mod physics;
pub mod types;

pub use logic::*;
pub use types::*;
