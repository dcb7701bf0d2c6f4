//! Keyboard-driven stand-in for the camera and pose model.
//!
//! The input layer calls [`SimulatedArms::raise`] on a key press; the
//! estimator then reports raised wrists for a few frames and renders a
//! stick figure so the camera thumbnail has something to show. A press
//! that lands while the arms are still up lowers them for one frame first,
//! so every press is its own rising edge.

use super::source::PoseEstimator;
use super::types::{CameraFrame, CaptureError, Landmark, PoseFrame, PoseLandmarks};
use std::cell::Cell;
use std::rc::Rc;

/// Synthetic camera resolution.
pub const SIM_FRAME_WIDTH: u16 = 64;
pub const SIM_FRAME_HEIGHT: u16 = 48;

const SHOULDER_Y: f32 = 0.45;
const WRIST_DOWN_Y: f32 = 0.75;
const WRIST_UP_Y: f32 = 0.15;

/// Handle shared between the input layer and the estimator.
#[derive(Debug, Clone, Default)]
pub struct SimulatedArms {
    pressed: Rc<Cell<bool>>,
    remaining: Rc<Cell<u32>>,
}

impl SimulatedArms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the arms on the next frame and hold them for the estimator's hold duration.
    /// Presses between two frames collapse into one.
    pub fn raise(&self) {
        self.pressed.set(true);
    }

    pub fn is_raised(&self) -> bool {
        self.pressed.get() || self.remaining.get() > 0
    }

    /// Advance one frame. Returns whether the arms are up on it.
    fn step(&self, hold_frames: u32) -> bool {
        if self.pressed.get() {
            if self.remaining.get() > 0 {
                // Still up from the last press: lower once, raise next frame
                self.remaining.set(0);
                return false;
            }
            self.pressed.set(false);
            self.remaining.set(hold_frames.max(1));
        }
        let remaining = self.remaining.get();
        if remaining == 0 {
            return false;
        }
        self.remaining.set(remaining - 1);
        true
    }
}

pub struct SimulatedPose {
    arms: SimulatedArms,
    hold_frames: u32,
}

impl SimulatedPose {
    pub fn new(arms: SimulatedArms, hold_frames: u32) -> Self {
        Self { arms, hold_frames }
    }

    fn landmarks(raised: bool) -> PoseLandmarks {
        let wrist_y = if raised { WRIST_UP_Y } else { WRIST_DOWN_Y };
        PoseLandmarks {
            left_shoulder: Landmark::new(0.40, SHOULDER_Y),
            right_shoulder: Landmark::new(0.60, SHOULDER_Y),
            left_wrist: Landmark::new(0.30, wrist_y),
            right_wrist: Landmark::new(0.70, wrist_y),
        }
    }

    /// Draw the pose as a bright stick figure on a dark background.
    fn render(pose: &PoseLandmarks) -> CameraFrame {
        let mut frame = CameraFrame::blank(SIM_FRAME_WIDTH, SIM_FRAME_HEIGHT);
        let w = SIM_FRAME_WIDTH as f32;
        let h = SIM_FRAME_HEIGHT as f32;
        let px = |lm: &Landmark| ((lm.x * w) as i32, (lm.y * h) as i32);

        let ls = px(&pose.left_shoulder);
        let rs = px(&pose.right_shoulder);
        let lw = px(&pose.left_wrist);
        let rw = px(&pose.right_wrist);
        let neck = ((ls.0 + rs.0) / 2, ls.1);
        let hip = (neck.0, (0.85 * h) as i32);

        draw_line(&mut frame, ls, rs, 255);
        draw_line(&mut frame, neck, hip, 255);
        draw_line(&mut frame, ls, lw, 200);
        draw_line(&mut frame, rs, rw, 200);

        // Head
        let head_r = (h * 0.08) as i32;
        let head_c = (neck.0, neck.1 - head_r - 1);
        for dy in -head_r..=head_r {
            for dx in -head_r..=head_r {
                if dx * dx + dy * dy <= head_r * head_r {
                    frame.set_pixel(head_c.0 + dx, head_c.1 + dy, 230);
                }
            }
        }
        frame
    }
}

/// Bresenham line.
fn draw_line(frame: &mut CameraFrame, from: (i32, i32), to: (i32, i32), value: u8) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        frame.set_pixel(x, y, value);
        if x == to.0 && y == to.1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

impl PoseEstimator for SimulatedPose {
    fn next_frame(&mut self) -> Result<PoseFrame, CaptureError> {
        let raised = self.arms.step(self.hold_frames);
        let landmarks = Self::landmarks(raised);
        Ok(PoseFrame {
            image: Some(Self::render(&landmarks)),
            landmarks: Some(landmarks),
        })
    }
}
