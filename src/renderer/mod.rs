//! Rendering module
//!
//! Drawing goes through the [`Surface`] trait so the simulation never knows
//! what it is drawn on.

pub mod scene;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::draw;
pub use surface::{Color, DrawCmd, RecordingSurface, Surface, colors};
