//! Constants used throughout the library.
//!
//! Landmark indices follow the 21-point hand layout produced by MediaPipe
//! Hands; every geometric rule addresses joints through this table instead of
//! repeating raw literals.

/// Number of landmarks produced per detected hand
pub const HAND_LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Fingertip landmark indices, thumb first
pub const TIP_INDICES: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// Maximum thumb-to-index tip distance for the OK sign (normalized units)
pub const TOUCH_MARGIN: f32 = 0.05;

/// Default minimum summed fingertip displacement between consecutive frames
/// to register as movement (normalized units)
pub const DEFAULT_MOVEMENT_MARGIN: f32 = 0.025;
