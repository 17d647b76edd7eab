//! Hand landmark data model shared by all classification stages.

use crate::constants::{HAND_LANDMARK_COUNT, THUMB_IP};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// A single landmark position in normalized image coordinates.
///
/// `x` and `y` are in `[0, 1]` relative to the frame; `y` grows downward.
/// `z` is the model's relative depth estimate and does not participate in the
/// 2-D classification rules.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Point {
    /// Create a point on the image plane (z = 0).
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// True when every coordinate is finite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Handedness label reported by the landmark model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandLabel {
    Left,
    Right,
}

impl fmt::Display for HandLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "Left"),
            Self::Right => write!(f, "Right"),
        }
    }
}

/// One of the five fingers, mapped to its fixed tip landmark index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// All fingers, thumb first — the same order as `constants::TIP_INDICES`
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// Tip landmark index of this finger
    #[must_use]
    pub const fn tip(self) -> usize {
        match self {
            Self::Thumb => crate::constants::THUMB_TIP,
            Self::Index => crate::constants::INDEX_TIP,
            Self::Middle => crate::constants::MIDDLE_TIP,
            Self::Ring => crate::constants::RING_TIP,
            Self::Pinky => crate::constants::PINKY_TIP,
        }
    }

    /// Joint the tip is measured against: the pip (tip − 2) for fingers, the
    /// intermediate ip joint for the thumb.
    #[must_use]
    pub const fn reference(self) -> usize {
        match self {
            Self::Thumb => THUMB_IP,
            _ => self.tip() - 2,
        }
    }
}

/// Validated set of 21 landmarks for one detected hand in one frame.
///
/// Construction rejects malformed input up front so the geometric rules can
/// index fixed positions without further checks. Instances are immutable;
/// the landmark model owns the coordinates and a new set arrives every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarks {
    points: [Point; HAND_LANDMARK_COUNT],
}

impl HandLandmarks {
    /// Build from the landmark model's point list.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidLandmarks` if the list does not hold exactly
    /// 21 points or any coordinate is not finite.
    pub fn new(points: &[Point]) -> Result<Self> {
        if points.len() != HAND_LANDMARK_COUNT {
            return Err(Error::InvalidLandmarks(format!(
                "expected {HAND_LANDMARK_COUNT} landmarks, got {}",
                points.len()
            )));
        }
        for (index, point) in points.iter().enumerate() {
            if !point.is_finite() {
                return Err(Error::InvalidLandmarks(format!(
                    "non-finite coordinate at landmark {index}"
                )));
            }
        }

        let mut array = [Point::default(); HAND_LANDMARK_COUNT];
        array.copy_from_slice(points);
        Ok(Self { points: array })
    }

    /// All 21 landmark points
    #[must_use]
    pub fn points(&self) -> &[Point; HAND_LANDMARK_COUNT] {
        &self.points
    }
}

impl Index<usize> for HandLandmarks {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}
