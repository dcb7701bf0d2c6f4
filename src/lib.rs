//! Gym Flappy Bird - a side-scrolling flyer steered by raising your arms.
//!
//! This module exposes the game logic for testing and external use.

pub mod assets;
pub mod build_info;
pub mod cli;
pub mod core;
pub mod flappy;
pub mod gesture;
pub mod input;
pub mod logging;
pub mod scene;
pub mod ui;
