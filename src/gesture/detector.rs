//! Arm-raise detection with a calibrated shoulder baseline.
//!
//! A side counts as raised when its wrist is more than `margin` above its
//! shoulder (image y grows downward). Only the transition from "no arm
//! raised" to "an arm raised" triggers a flap, so holding the arms up
//! flaps once.

use super::types::{Landmark, PoseLandmarks};

#[derive(Debug, Clone)]
pub struct ArmRaiseDetector {
    margin: f32,
    baseline_shoulder_y: Option<f32>,
    last_raised: bool,
    arms_raised: bool,
}

impl ArmRaiseDetector {
    pub fn new(margin: f32) -> Self {
        Self {
            margin,
            baseline_shoulder_y: None,
            last_raised: false,
            arms_raised: false,
        }
    }

    /// Record the current shoulder height as the baseline. Replaces any earlier one.
    pub fn calibrate(&mut self, landmarks: &PoseLandmarks) {
        self.baseline_shoulder_y = Some(landmarks.shoulder_y());
        self.last_raised = false;
        self.arms_raised = false;
    }

    pub fn is_calibrated(&self) -> bool {
        self.baseline_shoulder_y.is_some()
    }

    pub fn baseline_shoulder_y(&self) -> Option<f32> {
        self.baseline_shoulder_y
    }

    /// Whether an arm was up on the last evaluated frame.
    pub fn arms_raised(&self) -> bool {
        self.arms_raised
    }

    /// Feed one frame's landmarks. Returns true on the rising edge only.
    ///
    /// Frames without a body, or any frame before calibration, leave the
    /// edge state untouched and never trigger.
    pub fn update(&mut self, landmarks: Option<&PoseLandmarks>) -> bool {
        let (Some(pose), Some(baseline)) = (landmarks, self.baseline_shoulder_y) else {
            return false;
        };

        let left = self.side_raised(&pose.left_wrist, &pose.left_shoulder, baseline);
        let right = self.side_raised(&pose.right_wrist, &pose.right_shoulder, baseline);
        let currently_raised = left || right;

        let triggered = currently_raised && !self.last_raised;
        self.last_raised = currently_raised;
        self.arms_raised = currently_raised;
        triggered
    }

    /// A hidden shoulder falls back to the calibrated baseline; a hidden wrist never counts.
    fn side_raised(&self, wrist: &Landmark, shoulder: &Landmark, baseline: f32) -> bool {
        if !wrist.is_visible() {
            return false;
        }
        let shoulder_y = if shoulder.is_visible() {
            shoulder.y
        } else {
            baseline
        };
        wrist.y < shoulder_y - self.margin
    }
}
