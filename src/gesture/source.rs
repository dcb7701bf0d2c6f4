//! The gesture signal consumed by the game, and its pose-detector backing.
//!
//! The game only sees [`GestureSource`]. [`PoseGestureSource`] adapts any
//! [`PoseEstimator`] (camera + landmark model, a recording, or the keyboard
//! simulator) into that interface.

use super::detector::ArmRaiseDetector;
use super::types::{CameraFrame, CaptureError, PoseFrame};
use tracing::{debug, info};

/// The camera + landmark model, treated as a black box.
pub trait PoseEstimator {
    /// Block until the next frame is captured and analysed.
    fn next_frame(&mut self) -> Result<PoseFrame, CaptureError>;

    /// Release the device. Called at most once.
    fn shutdown(&mut self) {}
}

impl<E: PoseEstimator + ?Sized> PoseEstimator for Box<E> {
    fn next_frame(&mut self) -> Result<PoseFrame, CaptureError> {
        (**self).next_frame()
    }

    fn shutdown(&mut self) {
        (**self).shutdown()
    }
}

/// Result of one gesture poll.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlapPoll {
    /// Rising edge of the arm raise on this poll.
    pub triggered: bool,
    /// Arms currently up (for the on-screen indicator).
    pub arms_raised: bool,
    /// Mirrored camera image for display, if the source has one.
    pub frame: Option<CameraFrame>,
}

/// Flap signal source polled once per tick.
pub trait GestureSource {
    /// Capture one frame and store it as the baseline. True on success.
    fn calibrate(&mut self) -> bool;

    fn is_calibrated(&self) -> bool;

    /// Capture one frame and report whether it starts an arm raise.
    fn poll_flap(&mut self) -> FlapPoll;

    /// Capture one frame purely for display (menu preview).
    fn preview_frame(&mut self) -> Option<CameraFrame>;

    /// Release the underlying device. Safe to call more than once.
    fn release(&mut self);
}

/// A [`GestureSource`] driven by a [`PoseEstimator`].
///
/// The estimator is shut down exactly once, either by [`GestureSource::release`]
/// or when the source is dropped.
pub struct PoseGestureSource<E: PoseEstimator> {
    estimator: E,
    detector: ArmRaiseDetector,
    released: bool,
}

impl<E: PoseEstimator> PoseGestureSource<E> {
    pub fn new(estimator: E, raise_margin: f32) -> Self {
        Self {
            estimator,
            detector: ArmRaiseDetector::new(raise_margin),
            released: false,
        }
    }

    pub fn detector(&self) -> &ArmRaiseDetector {
        &self.detector
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Read one frame, treating every failure as "no signal".
    fn capture(&mut self) -> Option<PoseFrame> {
        let result = if self.released {
            Err(CaptureError::Released)
        } else {
            self.estimator.next_frame()
        };
        match result {
            Ok(frame) => Some(frame),
            Err(e) => {
                debug!(error = %e, "no pose frame this tick");
                None
            }
        }
    }
}

impl<E: PoseEstimator> GestureSource for PoseGestureSource<E> {
    fn calibrate(&mut self) -> bool {
        let Some(frame) = self.capture() else {
            info!("calibration failed: no camera frame");
            return false;
        };
        match frame.landmarks {
            Some(landmarks) => {
                self.detector.calibrate(&landmarks);
                info!(
                    baseline_shoulder_y = landmarks.shoulder_y(),
                    "calibrated"
                );
                true
            }
            None => {
                info!("calibration failed: no body in frame");
                false
            }
        }
    }

    fn is_calibrated(&self) -> bool {
        self.detector.is_calibrated()
    }

    fn poll_flap(&mut self) -> FlapPoll {
        let Some(frame) = self.capture() else {
            return FlapPoll {
                triggered: false,
                arms_raised: self.detector.arms_raised(),
                frame: None,
            };
        };
        let triggered = self.detector.update(frame.landmarks.as_ref());
        FlapPoll {
            triggered,
            arms_raised: self.detector.arms_raised(),
            frame: frame.image.map(|image| image.mirrored()),
        }
    }

    fn preview_frame(&mut self) -> Option<CameraFrame> {
        self.capture()
            .and_then(|frame| frame.image)
            .map(|image| image.mirrored())
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.estimator.shutdown();
        info!("pose source released");
    }
}

impl<E: PoseEstimator> Drop for PoseGestureSource<E> {
    fn drop(&mut self) {
        self.release();
    }
}
