//! Per-finger extension state.
//!
//! A finger counts as raised when its tip clears the reference joint in the
//! direction the finger extends. Which axis carries that comparison depends
//! on the hand's orientation, and the thumb additionally depends on which way
//! the palm faces.

use crate::constants::{PINKY_MCP, PINKY_TIP, THUMB_IP, THUMB_TIP};
use crate::hand::{Finger, HandLabel, HandLandmarks};
use crate::orientation::Orientation;

/// Check whether a finger is extended.
#[must_use]
pub fn is_raised(hand: &HandLandmarks, label: HandLabel, finger: Finger) -> bool {
    match (Orientation::of(hand), finger) {
        (Orientation::Upright, Finger::Thumb) => upright_thumb_raised(hand),
        (Orientation::Upright, _) => upright_finger_raised(hand, finger),
        (Orientation::Sideways, Finger::Thumb) => sideways_thumb_raised(hand),
        (Orientation::Sideways, _) => sideways_finger_raised(hand, label, finger),
    }
}

/// Number of raised fingers, in `[0, 5]`.
#[must_use]
pub fn count_raised(hand: &HandLandmarks, label: HandLabel) -> u8 {
    Finger::ALL
        .iter()
        .map(|&finger| u8::from(is_raised(hand, label, finger)))
        .sum()
}

/// Upright thumb: the palm facing is read from the thumb-to-pinky tip x
/// offset; extended means the tip clears its ip joint further in that same
/// direction. Handedness does not change the comparison once the facing is
/// known, so both labels share it.
fn upright_thumb_raised(hand: &HandLandmarks) -> bool {
    let tip = &hand[THUMB_TIP];
    let ip = &hand[THUMB_IP];
    let pinky_tip = &hand[PINKY_TIP];

    if tip.x < pinky_tip.x {
        tip.x < ip.x
    } else if tip.x > pinky_tip.x {
        tip.x > ip.x
    } else {
        false
    }
}

fn upright_finger_raised(hand: &HandLandmarks, finger: Finger) -> bool {
    hand[finger.tip()].y < hand[finger.reference()].y
}

/// Sideways thumb: the tip sitting above the pinky base means the thumb edge
/// of the hand is on top, which flips the vertical direction that counts as
/// extended.
fn sideways_thumb_raised(hand: &HandLandmarks) -> bool {
    let tip = &hand[THUMB_TIP];
    let ip = &hand[THUMB_IP];

    if tip.y < hand[PINKY_MCP].y {
        tip.y < ip.y
    } else {
        tip.y > ip.y
    }
}

/// Sideways hands extend their fingers in opposite screen directions per
/// handedness.
fn sideways_finger_raised(hand: &HandLandmarks, label: HandLabel, finger: Finger) -> bool {
    let tip = &hand[finger.tip()];
    let pip = &hand[finger.reference()];
    match label {
        HandLabel::Left => tip.x > pip.x,
        HandLabel::Right => tip.x < pip.x,
    }
}
