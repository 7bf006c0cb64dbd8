//! Collision detection
//!
//! Everything in this game collides as a circle: the ship's hull and both
//! obstacle shapes are tested by center distance against the sum of radii.

use glam::Vec2;

/// Strict circle overlap test.
///
/// Returns true when the Euclidean distance between the centers is strictly
/// less than the sum of the radii. Touching exactly at `ra + rb` is a miss.
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) < reach * reach
}
