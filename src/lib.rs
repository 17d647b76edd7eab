//! Hand gesture recognition library for classifying hand landmarks.
//!
//! This library interprets the 21 hand landmarks produced by an external
//! pose-estimation model (MediaPipe Hands layout) against a fixed set of
//! geometric rules. Camera capture, the landmark model itself, and rendering
//! are external collaborators; the crate only consumes normalized landmark
//! coordinates.
//!
//! The classification pipeline consists of:
//! 1. Orientation: upright vs sideways hand
//! 2. Finger state: extended vs folded, per finger
//! 3. Gesture matching: first hit over a fixed priority list
//! 4. Movement detection across consecutive frames
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use hand_gesture_recognition::analysis::FrameAnalyzer;
//! use hand_gesture_recognition::hand::{HandLabel, HandLandmarks, Point};
//!
//! # fn main() -> hand_gesture_recognition::Result<()> {
//! // Landmarks arrive from an external hand-tracking model, one frame at a
//! // time, as normalized coordinates.
//! let points: Vec<Point> = (0..21)
//!     .map(|i| Point::new(0.5, 0.9 - 0.04 * i as f32))
//!     .collect();
//! let hand = HandLandmarks::new(&points)?;
//!
//! let mut analyzer = FrameAnalyzer::default();
//! let report = analyzer.analyze_hand(HandLabel::Right, &hand);
//!
//! assert!(report.finger_count <= 5);
//! assert!(!report.moving);
//! # Ok(())
//! # }
//! ```
//!
//! ## Movement Detection
//!
//! ```
//! use hand_gesture_recognition::hand::{HandLabel, HandLandmarks, Point};
//! use hand_gesture_recognition::movement_detector::MovementDetector;
//!
//! # fn main() -> hand_gesture_recognition::Result<()> {
//! let still: Vec<Point> = (0..21)
//!     .map(|i| Point::new(0.4, 0.8 - 0.03 * i as f32))
//!     .collect();
//! let moved: Vec<Point> = still.iter().map(|p| Point::new(p.x + 0.05, p.y)).collect();
//!
//! let mut detector = MovementDetector::default();
//! assert!(!detector.update(HandLabel::Right, &HandLandmarks::new(&still)?));
//! assert!(detector.update(HandLabel::Right, &HandLandmarks::new(&moved)?));
//! # Ok(())
//! # }
//! ```

/// Constants used throughout the library
pub mod constants;

/// Error types and result handling
pub mod error;

/// Hand landmark data model
pub mod hand;

/// Geometric helpers over normalized coordinates
pub mod geometry;

/// Hand orientation classification
pub mod orientation;

/// Per-finger extension state
pub mod fingers;

/// Named gesture matching
pub mod gestures;

/// Movement detection across consecutive frames
pub mod movement_detector;

/// Per-frame analysis pipeline
pub mod analysis;

/// Serialized landmark recordings
pub mod recording;

/// Configuration management
pub mod config;

/// Replay application
pub mod app;

pub use error::{Error, Result};
