//! Movement detection module for tracking hand movement between frames.
//!
//! Movement is the summed fingertip displacement between two consecutive
//! frames; there is no smoothing window, so the flag reflects the latest
//! frame pair only.

use crate::constants::{DEFAULT_MOVEMENT_MARGIN, TIP_INDICES};
use crate::geometry::distance;
use crate::hand::{HandLabel, HandLandmarks, Point};

/// Detects hand movement by comparing fingertip positions across
/// consecutive frames.
///
/// Positions are tracked per hand label so two simultaneous hands do not
/// disturb each other's deltas. Each slot seeds itself on its first
/// observation: the comparison then runs against the just-captured positions
/// and yields zero displacement, so the first frame never reports movement.
#[derive(Debug)]
pub struct MovementDetector {
    margin: f32,
    slots: [Slot; 2],
}

#[derive(Debug, Default)]
struct Slot {
    previous: Option<[Point; 5]>,
    last_displacement: Option<f32>,
}

impl MovementDetector {
    /// Create a detector with a custom movement margin (normalized units).
    #[must_use]
    pub fn new(margin: f32) -> Self {
        Self {
            margin,
            slots: [Slot::default(), Slot::default()],
        }
    }

    /// Update one hand's tracked fingertips and report whether it moved.
    ///
    /// The stored positions are overwritten unconditionally, so movement is
    /// always assessed over the delta between this frame and the one before.
    pub fn update(&mut self, label: HandLabel, hand: &HandLandmarks) -> bool {
        let current = fingertips(hand);
        let slot = &mut self.slots[slot_index(label)];
        let previous = slot.previous.unwrap_or(current);

        let displacement: f32 = previous
            .iter()
            .zip(current.iter())
            .map(|(prev, cur)| distance(prev, cur))
            .sum();

        slot.previous = Some(current);
        slot.last_displacement = Some(displacement);

        displacement > self.margin
    }

    /// Summed fingertip displacement from the most recent update of this
    /// hand, if it has been observed.
    #[must_use]
    pub fn last_displacement(&self, label: HandLabel) -> Option<f32> {
        self.slots[slot_index(label)].last_displacement
    }

    /// Forget all tracked positions, e.g. when a capture session restarts.
    pub fn reset(&mut self) {
        self.slots = [Slot::default(), Slot::default()];
    }
}

impl Default for MovementDetector {
    fn default() -> Self {
        Self::new(DEFAULT_MOVEMENT_MARGIN)
    }
}

fn slot_index(label: HandLabel) -> usize {
    match label {
        HandLabel::Left => 0,
        HandLabel::Right => 1,
    }
}

fn fingertips(hand: &HandLandmarks) -> [Point; 5] {
    TIP_INDICES.map(|index| hand[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{HAND_LANDMARK_COUNT, THUMB_TIP};

    fn hand() -> HandLandmarks {
        let points: Vec<Point> = (0..HAND_LANDMARK_COUNT)
            .map(|i| Point::new(0.3 + 0.01 * i as f32, 0.8 - 0.02 * i as f32))
            .collect();
        HandLandmarks::new(&points).unwrap()
    }

    fn hand_with_thumb_tip_x(x: f32) -> HandLandmarks {
        let mut points = hand().points().to_vec();
        points[THUMB_TIP] = Point::new(x, 0.5);
        HandLandmarks::new(&points).unwrap()
    }

    #[test]
    fn test_first_observation_reports_not_moving() {
        let mut detector = MovementDetector::default();
        assert!(!detector.update(HandLabel::Right, &hand()));
        assert_eq!(detector.last_displacement(HandLabel::Right), Some(0.0));
    }

    #[test]
    fn test_identical_consecutive_frames_report_not_moving() {
        let mut detector = MovementDetector::default();
        detector.update(HandLabel::Right, &hand());
        assert!(!detector.update(HandLabel::Right, &hand()));
    }

    #[test]
    fn test_displacement_at_margin_is_not_movement() {
        // Threshold comparison is strictly greater-than. A single tip moving
        // from x = 0 by exactly the margin gives a displacement sum equal to
        // the margin.
        let mut detector = MovementDetector::default();
        detector.update(HandLabel::Right, &hand_with_thumb_tip_x(0.0));
        let moving = detector.update(
            HandLabel::Right,
            &hand_with_thumb_tip_x(DEFAULT_MOVEMENT_MARGIN),
        );
        assert!(!moving);
        assert_eq!(
            detector.last_displacement(HandLabel::Right),
            Some(DEFAULT_MOVEMENT_MARGIN)
        );
    }

    #[test]
    fn test_displacement_above_margin_is_movement() {
        let mut detector = MovementDetector::default();
        detector.update(HandLabel::Right, &hand_with_thumb_tip_x(0.0));
        assert!(detector.update(HandLabel::Right, &hand_with_thumb_tip_x(0.0251)));
    }

    #[test]
    fn test_hands_are_tracked_independently() {
        let mut detector = MovementDetector::default();
        detector.update(HandLabel::Left, &hand_with_thumb_tip_x(0.0));
        detector.update(HandLabel::Right, &hand());

        // A large left-hand jump must not register on the right hand.
        assert!(detector.update(HandLabel::Left, &hand_with_thumb_tip_x(0.4)));
        assert!(!detector.update(HandLabel::Right, &hand()));
    }

    #[test]
    fn test_reset_reseeds_on_next_update() {
        let mut detector = MovementDetector::default();
        detector.update(HandLabel::Right, &hand_with_thumb_tip_x(0.0));
        detector.reset();
        assert_eq!(detector.last_displacement(HandLabel::Right), None);

        // After a reset the next frame seeds again instead of comparing
        // against pre-reset positions.
        assert!(!detector.update(HandLabel::Right, &hand_with_thumb_tip_x(0.4)));
    }
}
