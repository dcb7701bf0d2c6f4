//! Bird/pipe collision and pass-through scoring.

use super::types::{Bird, CollisionBounds, Pipe, Rect};
use crate::core::config::GameConfig;

impl Rect {
    /// Axis-aligned overlap test. Symmetric in `self` and `other`.
    pub fn overlaps(&self, other: &Rect, bounds: CollisionBounds) -> bool {
        match bounds {
            CollisionBounds::Closed => {
                self.x <= other.right()
                    && other.x <= self.right()
                    && self.y <= other.bottom()
                    && other.y <= self.bottom()
            }
            CollisionBounds::HalfOpen => {
                self.x < other.right()
                    && other.x < self.right()
                    && self.y < other.bottom()
                    && other.y < self.bottom()
            }
        }
    }
}

/// Whether the bird touches the top or bottom half of a pipe pair.
pub fn pipe_collides(pipe: &Pipe, bird: &Bird, config: &GameConfig) -> bool {
    let hitbox = bird.bounding_box();
    hitbox.overlaps(&pipe.top_rect(), config.collision)
        || hitbox.overlaps(&pipe.bottom_rect(config), config.collision)
}

/// Mark the pipe scored the first time its right edge is behind the bird.
///
/// Returns true only on that first transition.
pub fn try_score(pipe: &mut Pipe, bird: &Bird) -> bool {
    if !pipe.scored && pipe.x + (pipe.width as f64) < bird.x {
        pipe.scored = true;
        return true;
    }
    false
}
