//! Immediate-mode Canvas 2D painter
//!
//! Clears and redraws the whole surface every frame from the current
//! simulation state. The painter owns the drawing surface exclusively;
//! nothing else writes to the canvas.

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes;
use crate::sim::{GameState, Obstacle, ObstacleKind};

const SHIP_COLOR: &str = "#fff";
const GLOW_BLUE: &str = "#3b82f6";
const HAZARD_COLOR: &str = "#ef4444";
const PICKUP_CORE_COLOR: &str = "#fff";

pub struct Painter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Painter {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// The page can tear the game section out of the DOM under us
    pub fn is_attached(&self) -> bool {
        self.canvas.is_connected()
    }

    /// Clear the surface and draw the ship and every live obstacle.
    /// `flame_length` is the current engine-flame flicker, render-only state.
    pub fn draw_frame(&self, state: &GameState, flame_length: f32) {
        self.ctx
            .clear_rect(0.0, 0.0, state.width as f64, state.height as f64);
        self.draw_ship(state.ship.pos, state.ship.radius, flame_length);
        for obstacle in &state.obstacles {
            self.draw_obstacle(obstacle);
        }
    }

    fn trace(&self, points: &[Vec2]) {
        self.ctx.begin_path();
        let Some(first) = points.first() else { return };
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in &points[1..] {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
    }

    fn draw_ship(&self, pos: Vec2, size: f32, flame_length: f32) {
        self.ctx.save();
        let _ = self.ctx.translate(pos.x as f64, pos.y as f64);

        self.ctx.set_shadow_blur(15.0);
        self.ctx.set_shadow_color(GLOW_BLUE);

        self.trace(&shapes::ship_hull(size));
        self.ctx.set_fill_style_str(SHIP_COLOR);
        self.ctx.fill();

        self.trace(&shapes::engine_flame(size, flame_length));
        self.ctx.set_fill_style_str(GLOW_BLUE);
        self.ctx.fill();

        self.ctx.restore();
    }

    fn draw_obstacle(&self, obstacle: &Obstacle) {
        self.ctx.save();
        let _ = self
            .ctx
            .translate(obstacle.pos.x as f64, obstacle.pos.y as f64);

        match obstacle.kind {
            ObstacleKind::Hazard => {
                self.ctx.set_shadow_blur(10.0);
                self.ctx.set_shadow_color(HAZARD_COLOR);
                self.trace(&shapes::hazard_star(obstacle.size));
                self.ctx.set_fill_style_str(HAZARD_COLOR);
                self.ctx.fill();
            }
            ObstacleKind::Pickup => {
                self.ctx.set_shadow_blur(15.0);
                self.ctx.set_shadow_color(GLOW_BLUE);

                self.ctx.begin_path();
                let _ = self.ctx.arc(0.0, 0.0, obstacle.size as f64, 0.0, TAU);
                self.ctx.set_fill_style_str(GLOW_BLUE);
                self.ctx.fill();

                let core = (obstacle.size * shapes::PICKUP_CORE_RATIO) as f64;
                self.ctx.begin_path();
                let _ = self.ctx.arc(0.0, 0.0, core, 0.0, TAU);
                self.ctx.set_fill_style_str(PICKUP_CORE_COLOR);
                self.ctx.fill();
            }
        }

        self.ctx.restore();
    }
}
