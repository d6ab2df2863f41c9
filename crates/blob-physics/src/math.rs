//! Small 2D helpers on top of [`glam::Vec2`].

use glam::Vec2;

/// Euclidean distance between two points.
pub fn distance_between(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}
