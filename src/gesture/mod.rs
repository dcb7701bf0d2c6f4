//! Arm-raise gesture signal.
//!
//! Landmarks come from a [`PoseEstimator`]; [`PoseGestureSource`] turns them
//! into a once-per-raise flap trigger behind the [`GestureSource`] trait.

pub mod detector;
pub mod replay;
pub mod simulated;
pub mod source;
pub mod types;

pub use detector::ArmRaiseDetector;
pub use replay::ReplayEstimator;
pub use simulated::{SimulatedArms, SimulatedPose};
pub use source::{FlapPoll, GestureSource, PoseEstimator, PoseGestureSource};
pub use types::*;
