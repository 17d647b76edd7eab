//! Per-frame hand analysis pipeline.

use crate::constants::DEFAULT_MOVEMENT_MARGIN;
use crate::fingers::count_raised;
use crate::gestures::{detect, Gesture};
use crate::hand::{HandLabel, HandLandmarks};
use crate::movement_detector::MovementDetector;
use log::debug;

/// Classification results for one hand in one frame — the three outputs the
/// display layer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandReport {
    /// Handedness of the analyzed hand
    pub label: HandLabel,
    /// Number of raised fingers, in `[0, 5]`
    pub finger_count: u8,
    /// First matching gesture, if any
    pub gesture: Option<Gesture>,
    /// Whether the hand moved since its previous frame
    pub moving: bool,
}

/// Runs the full classification pipeline for each detected hand.
///
/// Finger state and gesture matching are pure per-frame functions; only the
/// movement detector carries state between frames, keyed per hand label.
#[derive(Debug)]
pub struct FrameAnalyzer {
    movement: MovementDetector,
}

impl FrameAnalyzer {
    /// Create an analyzer with the given movement margin (normalized units).
    #[must_use]
    pub fn new(movement_margin: f32) -> Self {
        Self {
            movement: MovementDetector::new(movement_margin),
        }
    }

    /// Analyze a single hand.
    pub fn analyze_hand(&mut self, label: HandLabel, hand: &HandLandmarks) -> HandReport {
        let finger_count = count_raised(hand, label);
        let gesture = detect(hand, label);
        let moving = self.movement.update(label, hand);
        debug!("{label} hand: {finger_count} fingers, gesture {gesture:?}, moving {moving}");

        HandReport {
            label,
            finger_count,
            gesture,
            moving,
        }
    }

    /// Analyze every hand detected in one frame, each independently.
    pub fn analyze_frame(&mut self, hands: &[(HandLabel, HandLandmarks)]) -> Vec<HandReport> {
        hands
            .iter()
            .map(|(label, hand)| self.analyze_hand(*label, hand))
            .collect()
    }

    /// Drop all movement history.
    pub fn reset(&mut self) {
        self.movement.reset();
    }
}

impl Default for FrameAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_MOVEMENT_MARGIN)
    }
}
