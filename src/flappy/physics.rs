//! Bird physics: constant gravity and flap impulse on a single axis.

use super::types::{Bird, Rect};
use crate::core::config::GameConfig;

impl Bird {
    /// Override the current velocity with the flap impulse.
    pub fn flap(&mut self, config: &GameConfig) {
        self.velocity = config.flap_strength;
    }

    /// Advance one tick: integrate gravity, then clamp to the screen.
    ///
    /// Touching either edge zeroes the velocity.
    pub fn update(&mut self, config: &GameConfig) {
        self.velocity += config.gravity;
        self.y += self.velocity;

        if self.y < 0.0 {
            self.y = 0.0;
            self.velocity = 0.0;
        }
        let max_y = config.max_bird_y();
        if self.y > max_y {
            self.y = max_y;
            self.velocity = 0.0;
        }
    }

    /// True when the bird sits on the top or bottom edge. Either ends a session.
    pub fn is_out_of_bounds(&self, config: &GameConfig) -> bool {
        self.y <= 0.0 || self.y >= config.max_bird_y()
    }

    /// Square hitbox centred on the bird.
    pub fn bounding_box(&self) -> Rect {
        let size = self.size as f64;
        let half = (self.size / 2) as f64;
        Rect::new(self.x - half, self.y - half, size, size)
    }
}
