//! Per-frame simulation tick
//!
//! Runs once per display refresh while the session is `Running`: spawn
//! decision, obstacle advance, collision pass, off-screen cull. Distances are
//! in surface pixels; speeds are pixels per tick.

use glam::Vec2;
use rand::Rng;

use super::circles_overlap;
use super::state::{GamePhase, GameState, Obstacle, ObstacleKind};
use crate::consts::*;

/// Advance the session by one tick. No-op unless `Running`.
pub fn tick(state: &mut GameState) {
    if state.phase != GamePhase::Running {
        return;
    }

    state.tick_count += 1;

    if state.tick_count % SPAWN_INTERVAL == 0 {
        spawn_obstacle(state);
    }

    for obstacle in &mut state.obstacles {
        obstacle.pos.y += obstacle.fall_speed;
    }

    let ship_pos = state.ship.pos;
    let ship_radius = state.ship.radius;

    let mut i = 0;
    while i < state.obstacles.len() {
        let obstacle = state.obstacles[i];
        if circles_overlap(ship_pos, ship_radius, obstacle.pos, obstacle.size) {
            match obstacle.kind {
                ObstacleKind::Hazard => {
                    // Terminal: freeze the remaining obstacles for the
                    // retained final frame
                    state.phase = GamePhase::Over;
                    state.best_score = state.best_score.max(state.score);
                    log::info!(
                        "session over at tick {} with score {} (best {})",
                        state.tick_count,
                        state.score,
                        state.best_score
                    );
                    return;
                }
                ObstacleKind::Pickup => {
                    // Order is irrelevant to gameplay
                    state.obstacles.swap_remove(i);
                    state.score += PICKUP_REWARD;
                    continue;
                }
            }
        }
        i += 1;
    }

    // Every hazard that falls off uncollided pays out, however many are in
    // flight at once
    let bottom = state.height + CULL_MARGIN;
    let mut dodged = 0u32;
    state.obstacles.retain(|obstacle| {
        if obstacle.pos.y > bottom {
            if obstacle.kind == ObstacleKind::Hazard {
                dodged += 1;
            }
            false
        } else {
            true
        }
    });
    state.score += dodged * SURVIVAL_REWARD;
}

/// Create one obstacle above the top edge. Random draws happen in a fixed
/// order (x position, variant, size) so runs replay exactly from a seed.
fn spawn_obstacle(state: &mut GameState) {
    let x = state.rng.random_range(0.0..state.width);
    let kind = if state.rng.random::<f32>() < PICKUP_CHANCE {
        ObstacleKind::Pickup
    } else {
        ObstacleKind::Hazard
    };
    let size = match kind {
        ObstacleKind::Pickup => PICKUP_SIZE,
        ObstacleKind::Hazard => HAZARD_SIZE_MIN + state.rng.random::<f32>() * HAZARD_SIZE_JITTER,
    };

    state.obstacles.push(Obstacle {
        pos: Vec2::new(x, -SPAWN_MARGIN),
        kind,
        fall_speed: BASE_FALL_SPEED + state.score as f32 * SPEED_GROWTH,
        size,
    });
}
