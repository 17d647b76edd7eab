//! Hand orientation classification.

use crate::constants::{PINKY_MCP, THUMB_CMC, WRIST};
use crate::hand::HandLandmarks;

/// Gross alignment of a hand on the image plane.
///
/// On an upright hand the thumb base sits between the wrist and the pinky
/// base vertically; once it leaves that band the hand is lying on its side.
/// This single split decides which comparison axes every finger check uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Fingers extend vertically
    Upright,
    /// Fingers extend horizontally
    Sideways,
}

impl Orientation {
    /// Classify a hand. Image convention: y grows downward, so "above" means
    /// a smaller y value.
    #[must_use]
    pub fn of(hand: &HandLandmarks) -> Self {
        let thumb_cmc = &hand[THUMB_CMC];
        if thumb_cmc.y > hand[WRIST].y || thumb_cmc.y < hand[PINKY_MCP].y {
            Self::Sideways
        } else {
            Self::Upright
        }
    }

    /// True for a horizontally aligned hand
    #[must_use]
    pub fn is_sideways(self) -> bool {
        matches!(self, Self::Sideways)
    }
}
