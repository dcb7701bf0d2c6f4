//! Flappy data structures: the bird, pipe pairs and their bounding boxes.

use crate::core::config::GameConfig;
use serde::{Deserialize, Serialize};

/// How rectangle edges that exactly touch are treated by collision checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionBounds {
    /// Rectangles are closed intervals: touching edges collide.
    #[default]
    Closed,
    /// Rectangles are half-open: overlap must have positive length on both axes.
    HalfOpen,
}

/// Axis-aligned rectangle in world pixels (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// The player-controlled bird.
///
/// `(x, y)` is the centre of the bird; `x` never changes during a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub x: f64,
    pub y: f64,
    /// Pixels per tick, positive = downward.
    pub velocity: f64,
    pub size: u32,
}

impl Bird {
    /// A bird at rest, vertically centred on the screen.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.bird_x,
            y: (config.screen_height / 2) as f64,
            velocity: 0.0,
            size: config.bird_size,
        }
    }
}

/// A top + bottom pipe with a gap between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge (float for smooth scrolling).
    pub x: f64,
    /// Top edge of the gap. The top pipe spans `0..gap_y`.
    pub gap_y: i32,
    pub width: u32,
    /// Set once when the bird has passed this pipe.
    pub scored: bool,
}
