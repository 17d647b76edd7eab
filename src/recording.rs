//! Serialized landmark recordings.
//!
//! A recording is JSON Lines: one frame per line, each frame listing the
//! detected hands with their handedness label and 21 normalized landmark
//! points. Capture tooling lives outside this crate; anything able to emit
//! this format can drive the replay application.

use crate::hand::{HandLabel, HandLandmarks, Point};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// One hand as stored in a recording
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedHand {
    /// Handedness label reported by the landmark model
    pub label: HandLabel,
    /// The 21 landmark points
    pub landmarks: Vec<Point>,
}

impl RecordedHand {
    /// Validate into the core landmark type.
    ///
    /// # Errors
    ///
    /// Returns an error when the point count is wrong or a coordinate is not
    /// finite.
    pub fn to_landmarks(&self) -> Result<HandLandmarks> {
        HandLandmarks::new(&self.landmarks)
    }
}

/// One camera frame's worth of detections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordedFrame {
    /// Hands detected in this frame; empty when none were found
    #[serde(default)]
    pub hands: Vec<RecordedHand>,
}

impl RecordedFrame {
    /// Parse one JSON line.
    ///
    /// # Errors
    ///
    /// Returns `Error::Recording` when the line is not a valid frame.
    pub fn from_json(line: &str) -> Result<Self> {
        serde_json::from_str(line).map_err(Error::from)
    }

    /// Serialize to one JSON line.
    ///
    /// # Errors
    ///
    /// Returns `Error::Recording` when serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::from)
    }
}

/// Iterator over the frames of a JSON Lines recording.
///
/// Yields one `Result` per non-empty line so a caller can skip bad frames
/// without abandoning the rest of the stream.
pub struct RecordingReader<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> RecordingReader<R> {
    /// Wrap a buffered reader positioned at the start of a recording.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }
}

impl<R: BufRead> Iterator for RecordingReader<R> {
    type Item = Result<RecordedFrame>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => return None,
                Ok(_) => {
                    let line = self.line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    return Some(RecordedFrame::from_json(line));
                }
                Err(e) => return Some(Err(Error::Io(e))),
            }
        }
    }
}
