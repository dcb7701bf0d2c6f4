//! Runtime tuning loaded from an optional JSON file.
//!
//! Every field falls back to the constant in [`crate::core::constants`], so a
//! config file only needs the keys it wants to change.

use crate::core::constants::*;
use crate::flappy::types::CollisionBounds;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Largest accepted world dimension; gap coordinates are `i32`.
const MAX_DIMENSION: u32 = i32::MAX as u32;

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: u32,
    pub screen_height: u32,

    pub gravity: f64,
    /// Velocity assigned on flap (negative = upward).
    pub flap_strength: f64,
    pub bird_size: u32,
    pub bird_x: f64,

    pub pipe_width: u32,
    pub pipe_gap: u32,
    pub pipe_speed: f64,
    /// Horizontal distance between consecutive pipe spawns.
    pub pipe_spacing: f64,
    /// Minimum clearance between the gap and the top/bottom screen edges.
    pub gap_margin: u32,
    /// How far past the right edge the first pipe of a session is seeded.
    pub first_pipe_offset: f64,

    pub play_fps: u32,
    pub menu_fps: u32,

    pub raise_margin: f32,
    pub collision: CollisionBounds,
    /// Fold the in-progress score into the high score when a session is cancelled.
    pub high_score_on_cancel: bool,
    /// A successful calibration starts a session immediately.
    pub start_on_calibrate: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            gravity: GRAVITY,
            flap_strength: FLAP_STRENGTH,
            bird_size: BIRD_SIZE,
            bird_x: BIRD_X,
            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_speed: PIPE_SPEED,
            pipe_spacing: PIPE_SPACING,
            gap_margin: PIPE_GAP_MARGIN,
            first_pipe_offset: FIRST_PIPE_OFFSET,
            play_fps: PLAY_FPS,
            menu_fps: MENU_FPS,
            raise_margin: RAISE_MARGIN,
            collision: CollisionBounds::Closed,
            high_score_on_cancel: false,
            start_on_calibrate: true,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON text and validate it.
    pub fn from_json(text: &str) -> io::Result<Self> {
        let config: GameConfig = serde_json::from_str(text)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Location of the default config file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "gym-flappy").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load the config from the platform config dir.
    ///
    /// A missing file yields defaults. An unreadable or invalid file is
    /// logged and also yields defaults.
    pub fn load_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
                Self::default()
            }
        }
    }

    /// Reject values the game cannot run with.
    pub fn validate(&self) -> io::Result<()> {
        let invalid = |msg: String| Err(io::Error::new(io::ErrorKind::InvalidInput, msg));

        if self.screen_width == 0 || self.screen_height == 0 {
            return invalid("screen dimensions must be positive".to_string());
        }
        if self.screen_width > MAX_DIMENSION || self.screen_height > MAX_DIMENSION {
            return invalid(format!("screen dimensions must not exceed {}", MAX_DIMENSION));
        }
        if self.bird_size == 0 || self.bird_size >= self.screen_height {
            return invalid(format!(
                "bird_size {} must be positive and smaller than screen_height {}",
                self.bird_size, self.screen_height
            ));
        }
        if self.pipe_width == 0 || self.pipe_gap == 0 {
            return invalid("pipe_width and pipe_gap must be positive".to_string());
        }
        let needed = self
            .gap_margin
            .checked_mul(2)
            .and_then(|margins| margins.checked_add(self.pipe_gap));
        if !matches!(needed, Some(n) if n <= self.screen_height) {
            return invalid(format!(
                "pipe_gap {} plus two margins of {} does not fit in screen_height {}",
                self.pipe_gap, self.gap_margin, self.screen_height
            ));
        }
        if self.max_gap_y() < self.min_gap_y() {
            return invalid("pipe gap range is empty".to_string());
        }
        let finite = [
            ("gravity", self.gravity),
            ("flap_strength", self.flap_strength),
            ("bird_x", self.bird_x),
            ("pipe_speed", self.pipe_speed),
            ("pipe_spacing", self.pipe_spacing),
            ("first_pipe_offset", self.first_pipe_offset),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return invalid(format!("{} must be a finite number", name));
        }
        if !(self.pipe_speed > 0.0) || !(self.pipe_spacing > 0.0) {
            return invalid("pipe_speed and pipe_spacing must be positive".to_string());
        }
        if self.play_fps == 0 || self.menu_fps == 0 {
            return invalid("frame rates must be positive".to_string());
        }
        if !(self.raise_margin >= 0.0) || !self.raise_margin.is_finite() {
            return invalid("raise_margin must be a finite, non-negative number".to_string());
        }
        Ok(())
    }

    /// Lowest valid top edge for a pipe gap.
    pub fn min_gap_y(&self) -> i32 {
        clamp_i32(self.gap_margin as i64)
    }

    /// Highest valid top edge for a pipe gap.
    pub fn max_gap_y(&self) -> i32 {
        clamp_i32(self.screen_height as i64 - self.pipe_gap as i64 - self.gap_margin as i64)
    }

    /// Largest y the bird can occupy.
    pub fn max_bird_y(&self) -> f64 {
        (self.screen_height - self.bird_size) as f64
    }

    pub fn play_frame(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.play_fps as f64)
    }

    pub fn menu_frame(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.menu_fps as f64)
    }
}
