//! Scene and camera layer for a 2D WebGL game engine
//!
//! This crate maps a world-coordinate (WC) viewing window onto a pixel
//! viewport of a shared rendering surface and derives the camera transform
//! matrix that renderables combine into their model-view-projection
//! matrices. It also provides the boundary collision and clamping queries
//! gameplay code uses to keep objects inside the visible world.
//!
//! # Overview
//! - [`scene::Camera`] owns the WC window (center + width), the pixel
//!   viewport/scissor pair and the derived transform matrix
//! - [`render::RenderSurface`] abstracts the graphics context the camera
//!   configures once per frame; a WebGL2 implementation is provided on
//!   `wasm32`, and [`render::DummySurface`] records commands for headless
//!   use and tests
//! - [`scene::BoundingBox`] and [`scene::Transform`] carry the geometry
//!   for collide/clamp queries
//!
//! Multiple cameras may share one surface: each clears only its own
//! scissor region, so neighboring viewports are untouched.

pub mod render;
pub mod scene;

pub use render::{Color, DummySurface, RenderSurface, SurfaceCommand, ViewportRect};
pub use scene::{
    BoundingBox, Camera, CameraError, CameraState, CameraUniformData, CollideStatus, ShakeSource,
    Transform, CAMERA_Z,
};

#[cfg(target_arch = "wasm32")]
pub use render::WebGlSurface;

// Web initialization helper
#[cfg(target_arch = "wasm32")]
pub fn init_web_logging() {
    // Set up panic hook for better error messages in console
    console_error_panic_hook::set_once();
    // Set up console logging for web
    console_log::init_with_level(log::Level::Info).expect("Failed to initialize logger");
}
