//! Game state and core simulation types
//!
//! The session state machine lives here; the per-tick algorithm is in
//! [`super::tick`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the launch command; ship hidden, no obstacles
    Idle,
    /// Active gameplay
    Running,
    /// Run ended on a hazard hit; last frame retained under the overlay
    Over,
}

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Ends the session on contact
    Hazard,
    /// Grants score on contact
    Pickup,
}

/// A falling obstacle
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    pub pos: Vec2,
    pub kind: ObstacleKind,
    /// Surface pixels per tick, fixed at spawn time
    pub fall_speed: f32,
    /// Visual and collision radius
    pub size: f32,
}

/// The player's ship
#[derive(Debug, Clone, Copy)]
pub struct Ship {
    pub pos: Vec2,
    /// Collision radius (also the visual scale)
    pub radius: f32,
}

impl Ship {
    /// Centered horizontally, resting near the bottom edge
    fn at_start(width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(width / 2.0, height - SHIP_BOTTOM_OFFSET),
            radius: SHIP_SIZE,
        }
    }
}

/// Complete session state (deterministic under a fixed seed)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Session score
    pub score: u32,
    /// Best score across sessions within the page's lifetime
    pub best_score: u32,
    /// Simulation tick counter; drives the spawn cadence
    pub tick_count: u64,
    /// Player ship
    pub ship: Ship,
    /// Live obstacles, insertion order = spawn order
    pub obstacles: Vec<Obstacle>,
    /// Surface bounds in pixels
    pub width: f32,
    pub height: f32,
    pub(super) rng: Pcg32,
}

impl GameState {
    /// Create a new session in `Idle` with the given seed and surface size
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        // A degenerate surface would make the uniform spawn range empty
        let width = width.max(1.0);
        let height = height.max(1.0);
        Self {
            seed,
            phase: GamePhase::Idle,
            score: 0,
            best_score: 0,
            tick_count: 0,
            ship: Ship::at_start(width, height),
            obstacles: Vec::new(),
            width,
            height,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Launch command. Valid only from `Idle`; no-op otherwise.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Idle {
            self.begin_run();
        }
    }

    /// Retry command. Valid only from `Over`; no-op otherwise.
    pub fn restart(&mut self) {
        if self.phase == GamePhase::Over {
            self.begin_run();
        }
    }

    fn begin_run(&mut self) {
        self.phase = GamePhase::Running;
        self.score = 0;
        self.tick_count = 0;
        self.obstacles.clear();
        self.ship = Ship::at_start(self.width, self.height);
        log::info!("session started (seed {})", self.seed);
    }

    /// Latest pointer/touch sample. Only the ship's x moves, and only while
    /// `Running`.
    pub fn pointer_moved(&mut self, x: f32) {
        if self.phase == GamePhase::Running {
            self.ship.pos.x = x;
        }
    }

    /// Surface was resized: record the new bounds and re-center the ship.
    /// Obstacle state is untouched.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        self.ship = Ship::at_start(self.width, self.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_and_empty() {
        let state = GameState::new(7, 800.0, 450.0);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_start_only_from_idle() {
        let mut state = GameState::new(7, 800.0, 450.0);
        state.start();
        assert_eq!(state.phase, GamePhase::Running);

        state.score = 25;
        state.start();
        // Already running: command ignored, score untouched
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 25);
    }

    #[test]
    fn test_restart_only_from_over() {
        let mut state = GameState::new(7, 800.0, 450.0);
        state.restart();
        assert_eq!(state.phase, GamePhase::Idle);

        state.start();
        state.restart();
        assert_eq!(state.phase, GamePhase::Running);

        state.phase = GamePhase::Over;
        state.score = 40;
        state.obstacles.push(Obstacle {
            pos: Vec2::new(100.0, 100.0),
            kind: ObstacleKind::Hazard,
            fall_speed: 5.0,
            size: 20.0,
        });
        state.restart();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.ship.pos, Vec2::new(400.0, 450.0 - 80.0));
    }

    #[test]
    fn test_pointer_ignored_unless_running() {
        let mut state = GameState::new(7, 800.0, 450.0);
        let initial_x = state.ship.pos.x;

        state.pointer_moved(10.0);
        assert_eq!(state.ship.pos.x, initial_x);

        state.start();
        state.pointer_moved(10.0);
        assert_eq!(state.ship.pos.x, 10.0);

        state.phase = GamePhase::Over;
        state.pointer_moved(600.0);
        assert_eq!(state.ship.pos.x, 10.0);
    }

    #[test]
    fn test_resize_recenters_ship_in_every_phase() {
        let mut state = GameState::new(7, 800.0, 450.0);
        state.resize(1000.0, 600.0);
        assert_eq!(state.ship.pos, Vec2::new(500.0, 600.0 - 80.0));

        state.start();
        state.pointer_moved(42.0);
        state.obstacles.push(Obstacle {
            pos: Vec2::new(200.0, 200.0),
            kind: ObstacleKind::Pickup,
            fall_speed: 5.0,
            size: 15.0,
        });
        state.resize(640.0, 360.0);
        assert_eq!(state.ship.pos, Vec2::new(320.0, 360.0 - 80.0));
        // Obstacles survive a resize
        assert_eq!(state.obstacles.len(), 1);
    }
}
