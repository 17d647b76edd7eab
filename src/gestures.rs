//! Named gesture matching over finger states.
//!
//! Each gesture is a conjunction of finger-state checks (plus one tip
//! distance check for the OK sign). Matching runs down a fixed priority
//! list and the first satisfied predicate wins; there is no blending.

use crate::constants::{INDEX_TIP, THUMB_IP, THUMB_TIP, TOUCH_MARGIN};
use crate::fingers::is_raised;
use crate::geometry::distance;
use crate::hand::{Finger, HandLabel, HandLandmarks};
use crate::orientation::Orientation;
use std::fmt;

/// The recognized gesture vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    ThumbsUp,
    ThumbsDown,
    Peace,
    RockNRoll,
    Surf,
    Ok,
    Loser,
}

impl Gesture {
    /// All gestures in match priority order; [`detect`] returns the first hit.
    pub const ALL: [Gesture; 7] = [
        Gesture::ThumbsUp,
        Gesture::ThumbsDown,
        Gesture::Peace,
        Gesture::RockNRoll,
        Gesture::Surf,
        Gesture::Ok,
        Gesture::Loser,
    ];

    /// Caption shown by the display layer
    #[must_use]
    pub const fn caption(self) -> &'static str {
        match self {
            Self::ThumbsUp => "Thumbs Up! :D",
            Self::ThumbsDown => "Thumbs Down... :(",
            Self::Peace => "Peace!",
            Self::RockNRoll => "Rock'n'Roll!",
            Self::Surf => "Surf's up!",
            Self::Ok => "Everything is OK",
            Self::Loser => "Loser >:D",
        }
    }

    /// Evaluate this gesture's predicate in isolation.
    #[must_use]
    pub fn matches(self, hand: &HandLandmarks, label: HandLabel) -> bool {
        match self {
            Self::ThumbsUp => thumbs_up(hand, label),
            Self::ThumbsDown => thumbs_down(hand, label),
            Self::Peace => peace(hand, label),
            Self::RockNRoll => rock_n_roll(hand, label),
            Self::Surf => surf(hand, label),
            Self::Ok => ok_sign(hand, label),
            Self::Loser => loser(hand, label),
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.caption())
    }
}

/// Detect the gesture of a hand: the first match in priority order, or
/// `None` when no predicate is satisfied.
#[must_use]
pub fn detect(hand: &HandLandmarks, label: HandLabel) -> Option<Gesture> {
    Gesture::ALL
        .into_iter()
        .find(|gesture| gesture.matches(hand, label))
}

/// Every finger outside `except` must be folded.
fn others_folded(hand: &HandLandmarks, label: HandLabel, except: &[Finger]) -> bool {
    Finger::ALL
        .iter()
        .all(|&finger| except.contains(&finger) || !is_raised(hand, label, finger))
}

/// Sideways hand, thumb extended toward the top of the frame, all fingers
/// folded.
fn thumbs_up(hand: &HandLandmarks, label: HandLabel) -> bool {
    if !Orientation::of(hand).is_sideways() {
        return false;
    }
    if !is_raised(hand, label, Finger::Thumb) || hand[THUMB_TIP].y > hand[THUMB_IP].y {
        return false;
    }
    others_folded(hand, label, &[Finger::Thumb])
}

/// Sideways hand, thumb extended toward the bottom of the frame, all fingers
/// folded.
fn thumbs_down(hand: &HandLandmarks, label: HandLabel) -> bool {
    if !Orientation::of(hand).is_sideways() {
        return false;
    }
    if !is_raised(hand, label, Finger::Thumb) || hand[THUMB_TIP].y < hand[THUMB_IP].y {
        return false;
    }
    others_folded(hand, label, &[Finger::Thumb])
}

/// Upright hand with index and middle raised, everything else folded.
fn peace(hand: &HandLandmarks, label: HandLabel) -> bool {
    if Orientation::of(hand).is_sideways() {
        return false;
    }
    if !is_raised(hand, label, Finger::Index) || !is_raised(hand, label, Finger::Middle) {
        return false;
    }
    others_folded(hand, label, &[Finger::Index, Finger::Middle])
}

/// Upright hand with thumb, index and pinky raised, middle and ring folded.
fn rock_n_roll(hand: &HandLandmarks, label: HandLabel) -> bool {
    if Orientation::of(hand).is_sideways() {
        return false;
    }
    if !is_raised(hand, label, Finger::Thumb)
        || !is_raised(hand, label, Finger::Index)
        || !is_raised(hand, label, Finger::Pinky)
    {
        return false;
    }
    others_folded(hand, label, &[Finger::Thumb, Finger::Index, Finger::Pinky])
}

/// Sideways hand with thumb and pinky extended, thumb toward the top of the
/// frame, remaining fingers folded.
fn surf(hand: &HandLandmarks, label: HandLabel) -> bool {
    if !Orientation::of(hand).is_sideways() {
        return false;
    }
    if !is_raised(hand, label, Finger::Thumb)
        || !is_raised(hand, label, Finger::Pinky)
        || hand[THUMB_TIP].y > hand[THUMB_IP].y
    {
        return false;
    }
    others_folded(hand, label, &[Finger::Thumb, Finger::Pinky])
}

/// Upright hand with middle, ring and pinky raised while the thumb and index
/// tips touch within `TOUCH_MARGIN`.
fn ok_sign(hand: &HandLandmarks, label: HandLabel) -> bool {
    if Orientation::of(hand).is_sideways() {
        return false;
    }
    if !is_raised(hand, label, Finger::Middle)
        || !is_raised(hand, label, Finger::Ring)
        || !is_raised(hand, label, Finger::Pinky)
    {
        return false;
    }
    distance(&hand[THUMB_TIP], &hand[INDEX_TIP]) <= TOUCH_MARGIN
}

/// Upright hand with thumb and index raised, remaining fingers folded.
fn loser(hand: &HandLandmarks, label: HandLabel) -> bool {
    if Orientation::of(hand).is_sideways() {
        return false;
    }
    if !is_raised(hand, label, Finger::Thumb) || !is_raised(hand, label, Finger::Index) {
        return false;
    }
    others_folded(hand, label, &[Finger::Thumb, Finger::Index])
}
