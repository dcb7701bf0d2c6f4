//! Landmark recordings played back as a pose estimator.
//!
//! A recording is JSON Lines, one detector result per captured frame:
//!
//! ```text
//! {"landmarks": {"left_shoulder": {"x": 0.4, "y": 0.5}, ... }}
//! {"landmarks": null}
//! ```
//!
//! `null` marks a frame where no body was found. Blank lines are ignored.

use super::source::PoseEstimator;
use super::types::{CaptureError, PoseFrame, PoseLandmarks};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// One line of a recording.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedFrame {
    pub landmarks: Option<PoseLandmarks>,
}

pub struct ReplayEstimator {
    frames: Vec<Option<PoseLandmarks>>,
    cursor: usize,
    looping: bool,
}

impl ReplayEstimator {
    pub fn from_frames(frames: Vec<Option<PoseLandmarks>>, looping: bool) -> Self {
        Self {
            frames,
            cursor: 0,
            looping,
        }
    }

    /// Parse a recording. Errors name the offending line.
    pub fn from_reader<R: BufRead>(reader: R, looping: bool) -> io::Result<Self> {
        let mut frames = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: RecordedFrame = serde_json::from_str(&line).map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("line {}: {}", index + 1, e),
                )
            })?;
            frames.push(record.landmarks);
        }
        Ok(Self::from_frames(frames, looping))
    }

    pub fn open(path: &Path, looping: bool) -> io::Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), looping)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl PoseEstimator for ReplayEstimator {
    fn next_frame(&mut self) -> Result<PoseFrame, CaptureError> {
        if self.cursor >= self.frames.len() {
            if !self.looping || self.frames.is_empty() {
                return Err(CaptureError::EndOfStream);
            }
            self.cursor = 0;
        }
        let landmarks = self.frames[self.cursor];
        self.cursor += 1;
        Ok(PoseFrame {
            landmarks,
            image: None,
        })
    }
}
