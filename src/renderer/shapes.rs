//! Procedural shape geometry for the game's vector look
//!
//! Everything on screen is drawn from these point lists; there are no image
//! assets. Coordinates are local to the entity (origin at its position,
//! +y down, matching the canvas).

use glam::Vec2;
use std::f32::consts::{PI, TAU};

/// Spike count of the hazard star
pub const HAZARD_SPIKES: usize = 8;

/// Inner highlight radius of a pickup, as a fraction of its size
pub const PICKUP_CORE_RATIO: f32 = 1.0 / 3.0;

/// Ship hull: nose up, swept wings, notched tail
pub fn ship_hull(size: f32) -> [Vec2; 4] {
    [
        Vec2::new(0.0, -size),
        Vec2::new(size / 1.5, size),
        Vec2::new(0.0, size / 1.5),
        Vec2::new(-size / 1.5, size),
    ]
}

/// Engine flame triangle; `length` is how far the plume extends past the hull
pub fn engine_flame(size: f32, length: f32) -> [Vec2; 3] {
    [
        Vec2::new(-size / 3.0, size),
        Vec2::new(0.0, size + length),
        Vec2::new(size / 3.0, size),
    ]
}

/// Jagged star polygon for hazards: spikes at the outer radius `size`,
/// valleys at half of it
pub fn hazard_star(size: f32) -> Vec<Vec2> {
    let inner = size / 2.0;
    let mut points = Vec::with_capacity(HAZARD_SPIKES * 2);
    for i in 0..HAZARD_SPIKES {
        let theta = TAU * i as f32 / HAZARD_SPIKES as f32;
        points.push(Vec2::new(theta.cos() * size, theta.sin() * size));
        let mid = theta + PI / HAZARD_SPIKES as f32;
        points.push(Vec2::new(mid.cos() * inner, mid.sin() * inner));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hazard_star_alternates_radii() {
        let size = 20.0;
        let points = hazard_star(size);
        assert_eq!(points.len(), HAZARD_SPIKES * 2);

        for (i, p) in points.iter().enumerate() {
            let r = p.length();
            let expected = if i % 2 == 0 { size } else { size / 2.0 };
            assert!((r - expected).abs() < 1e-3, "point {i} at radius {r}");
        }
    }

    #[test]
    fn test_ship_hull_points_nose_up() {
        let hull = ship_hull(30.0);
        let nose = hull[0];
        // Nose is the topmost vertex (canvas +y is down)
        assert!(hull.iter().skip(1).all(|p| p.y > nose.y));
        // Wings are symmetric about the vertical axis
        assert_eq!(hull[1].x, -hull[3].x);
        assert_eq!(hull[1].y, hull[3].y);
    }

    #[test]
    fn test_engine_flame_extends_below_hull() {
        let size = 30.0;
        let flame = engine_flame(size, 25.0);
        assert_eq!(flame[1].y, size + 25.0);
        assert!(flame[0].y < flame[1].y && flame[2].y < flame[1].y);
    }
}
