//! Pose and camera data exchanged with the landmark detector.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Landmarks below this visibility are treated as not detected.
pub const MIN_VISIBILITY: f32 = 0.5;

fn full_visibility() -> f32 {
    1.0
}

/// One body landmark in normalised image coordinates (0..1, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default = "full_visibility")]
    pub visibility: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            visibility: 1.0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visibility >= MIN_VISIBILITY
    }
}

/// The upper-body landmarks the arm-raise gesture needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseLandmarks {
    pub left_shoulder: Landmark,
    pub right_shoulder: Landmark,
    pub left_wrist: Landmark,
    pub right_wrist: Landmark,
}

impl PoseLandmarks {
    /// Mean shoulder height.
    pub fn shoulder_y(&self) -> f32 {
        (self.left_shoulder.y + self.right_shoulder.y) / 2.0
    }
}

/// A grayscale camera image, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraFrame {
    pub width: u16,
    pub height: u16,
    pub luma: Vec<u8>,
}

impl CameraFrame {
    /// Wrap a pixel buffer. Returns `None` when the buffer size does not match.
    pub fn new(width: u16, height: u16, luma: Vec<u8>) -> Option<Self> {
        if luma.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            luma,
        })
    }

    /// An all-black frame.
    pub fn blank(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            luma: vec![0; width as usize * height as usize],
        }
    }

    pub fn pixel(&self, x: u16, y: u16) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.luma[y as usize * self.width as usize + x as usize]
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, value: u8) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.luma[y as usize * self.width as usize + x as usize] = value;
    }

    /// Flip left/right so the player sees a mirror image.
    pub fn mirrored(&self) -> Self {
        let width = self.width as usize;
        let luma = if width == 0 {
            Vec::new()
        } else {
            self.luma
                .chunks(width)
                .flat_map(|row| row.iter().rev().copied())
                .collect()
        };
        Self {
            width: self.width,
            height: self.height,
            luma,
        }
    }
}

/// One detector result: landmarks if a body was found, and the source image if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoseFrame {
    pub landmarks: Option<PoseLandmarks>,
    pub image: Option<CameraFrame>,
}

/// Why a frame could not be acquired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// The recording or device has no more frames.
    EndOfStream,
    /// The source was released and can no longer produce frames.
    Released,
    /// The device failed to deliver a frame.
    Device(String),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::EndOfStream => write!(f, "end of pose stream"),
            CaptureError::Released => write!(f, "pose source already released"),
            CaptureError::Device(msg) => write!(f, "capture failed: {}", msg),
        }
    }
}

impl std::error::Error for CaptureError {}
