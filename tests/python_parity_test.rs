//! Tests pinning the classifier to outcomes worked from the Python
//! reference implementation
//!
//! Each table is a full 21-point landmark set with the result the reference
//! rules produce for it. The coordinates are fixed here on purpose: any
//! change to a comparison direction or margin shows up as a concrete
//! mismatch instead of a silently shifted synthetic pose.

use hand_gesture_recognition::fingers::count_raised;
use hand_gesture_recognition::gestures::{detect, Gesture};
use hand_gesture_recognition::hand::{HandLabel, HandLandmarks, Point};
use hand_gesture_recognition::movement_detector::MovementDetector;
use hand_gesture_recognition::orientation::Orientation;

/// Upright right hand: thumb tucked across the palm, index and middle
/// extended, ring and pinky curled.
const PEACE_RIGHT: [(f32, f32); 21] = [
    (0.50, 0.90),
    (0.40, 0.80),
    (0.36, 0.74),
    (0.33, 0.70),
    (0.495, 0.72),
    (0.42, 0.60),
    (0.42, 0.50),
    (0.42, 0.42),
    (0.42, 0.34),
    (0.50, 0.58),
    (0.50, 0.48),
    (0.50, 0.40),
    (0.50, 0.32),
    (0.58, 0.60),
    (0.58, 0.50),
    (0.58, 0.54),
    (0.58, 0.60),
    (0.66, 0.63),
    (0.66, 0.55),
    (0.66, 0.59),
    (0.66, 0.65),
];

/// Sideways right hand: thumb extended upward, all four fingers curled back
/// toward the wrist.
const THUMBS_UP_RIGHT: [(f32, f32); 21] = [
    (0.80, 0.50),
    (0.72, 0.38),
    (0.70, 0.33),
    (0.69, 0.30),
    (0.68, 0.25),
    (0.62, 0.42),
    (0.52, 0.42),
    (0.55, 0.42),
    (0.60, 0.42),
    (0.62, 0.48),
    (0.50, 0.48),
    (0.53, 0.48),
    (0.58, 0.48),
    (0.62, 0.54),
    (0.52, 0.54),
    (0.55, 0.54),
    (0.60, 0.54),
    (0.62, 0.60),
    (0.54, 0.60),
    (0.57, 0.60),
    (0.62, 0.60),
];

/// Upright right hand with every finger extended.
const OPEN_PALM_RIGHT: [(f32, f32); 21] = [
    (0.50, 0.90),
    (0.40, 0.80),
    (0.36, 0.74),
    (0.33, 0.70),
    (0.30, 0.66),
    (0.42, 0.60),
    (0.42, 0.50),
    (0.42, 0.42),
    (0.42, 0.34),
    (0.50, 0.58),
    (0.50, 0.48),
    (0.50, 0.40),
    (0.50, 0.32),
    (0.58, 0.60),
    (0.58, 0.50),
    (0.58, 0.43),
    (0.58, 0.36),
    (0.66, 0.63),
    (0.66, 0.55),
    (0.66, 0.49),
    (0.66, 0.43),
];

fn hand(table: &[(f32, f32); 21]) -> HandLandmarks {
    let points: Vec<Point> = table.iter().map(|&(x, y)| Point::new(x, y)).collect();
    HandLandmarks::new(&points).unwrap()
}

fn mirrored(table: &[(f32, f32); 21]) -> HandLandmarks {
    let points: Vec<Point> = table.iter().map(|&(x, y)| Point::new(1.0 - x, y)).collect();
    HandLandmarks::new(&points).unwrap()
}

#[test]
fn test_peace_parity() {
    let right = hand(&PEACE_RIGHT);
    assert_eq!(Orientation::of(&right), Orientation::Upright);
    assert_eq!(count_raised(&right, HandLabel::Right), 2);
    assert_eq!(detect(&right, HandLabel::Right), Some(Gesture::Peace));

    let left = mirrored(&PEACE_RIGHT);
    assert_eq!(count_raised(&left, HandLabel::Left), 2);
    assert_eq!(detect(&left, HandLabel::Left), Some(Gesture::Peace));
}

#[test]
fn test_thumbs_up_parity() {
    let right = hand(&THUMBS_UP_RIGHT);
    assert_eq!(Orientation::of(&right), Orientation::Sideways);
    assert_eq!(count_raised(&right, HandLabel::Right), 1);
    assert_eq!(detect(&right, HandLabel::Right), Some(Gesture::ThumbsUp));

    let left = mirrored(&THUMBS_UP_RIGHT);
    assert_eq!(count_raised(&left, HandLabel::Left), 1);
    assert_eq!(detect(&left, HandLabel::Left), Some(Gesture::ThumbsUp));
}

#[test]
fn test_open_palm_parity() {
    let right = hand(&OPEN_PALM_RIGHT);
    assert_eq!(Orientation::of(&right), Orientation::Upright);
    assert_eq!(count_raised(&right, HandLabel::Right), 5);
    assert_eq!(detect(&right, HandLabel::Right), None);
}

#[test]
fn test_movement_sequence_parity() {
    // The reference seeds its previous positions on the first call, so the
    // expected movement flags over [still, still, shifted] are
    // [false, false, true].
    let still = hand(&OPEN_PALM_RIGHT);
    let shifted_points: Vec<Point> = OPEN_PALM_RIGHT
        .iter()
        .map(|&(x, y)| Point::new(x + 0.02, y))
        .collect();
    let shifted = HandLandmarks::new(&shifted_points).unwrap();

    let mut detector = MovementDetector::default();
    assert!(!detector.update(HandLabel::Right, &still));
    assert!(!detector.update(HandLabel::Right, &still));
    assert!(detector.update(HandLabel::Right, &shifted));
}
