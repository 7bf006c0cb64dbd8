//! Rendering: pure shape geometry plus the wasm-only Canvas 2D painter

#[cfg(target_arch = "wasm32")]
pub mod painter;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use painter::Painter;
