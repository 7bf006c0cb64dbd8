//! Horizon Velocity - the obstacle-dodging mini-game from the Horizon Studio site
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, movement, collisions, scoring)
//! - `renderer`: Procedural vector shapes + Canvas 2D painter
//! - `audio`: Procedural UI sound cues (Web Audio, wasm only)

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod renderer;
pub mod sim;

pub use sim::{GamePhase, GameState, ObstacleKind};

/// Game configuration constants
pub mod consts {
    /// Ship visual scale; also its collision radius
    pub const SHIP_SIZE: f32 = 30.0;
    /// Ship rests this far above the bottom edge
    pub const SHIP_BOTTOM_OFFSET: f32 = 80.0;

    /// Ticks between obstacle spawns
    pub const SPAWN_INTERVAL: u64 = 40;
    /// Probability that a spawned obstacle is a Pickup rather than a Hazard
    pub const PICKUP_CHANCE: f32 = 0.30;
    /// Pickups are a fixed size
    pub const PICKUP_SIZE: f32 = 15.0;
    /// Hazard size is HAZARD_SIZE_MIN + uniform(0..HAZARD_SIZE_JITTER)
    pub const HAZARD_SIZE_MIN: f32 = 20.0;
    pub const HAZARD_SIZE_JITTER: f32 = 10.0;

    /// Base fall speed in surface pixels per tick
    pub const BASE_FALL_SPEED: f32 = 5.0;
    /// Extra fall speed per point of score at spawn time
    pub const SPEED_GROWTH: f32 = 0.05;

    /// Obstacles spawn this far above the top edge
    pub const SPAWN_MARGIN: f32 = 50.0;
    /// Obstacles are culled once past the bottom edge by this margin
    pub const CULL_MARGIN: f32 = 50.0;

    /// Score for collecting a Pickup
    pub const PICKUP_REWARD: u32 = 10;
    /// Score for a Hazard leaving the screen uncollided
    pub const SURVIVAL_REWARD: u32 = 1;
}
