//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - No rendering or platform dependencies
//! - One tick per display refresh, driven by the page container

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::circles_overlap;
pub use state::{GamePhase, GameState, Obstacle, ObstacleKind, Ship};
pub use tick::tick;
