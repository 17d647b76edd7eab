//! Geometric helpers over normalized landmark coordinates.

use crate::hand::Point;

/// Euclidean distance between two points on the 2-D image plane.
///
/// Depth is ignored; the classification rules operate on projected positions
/// only.
#[must_use]
pub fn distance(p1: &Point, p2: &Point) -> f32 {
    ((p2.x - p1.x).powi(2) + (p2.y - p1.y).powi(2)).sqrt()
}
