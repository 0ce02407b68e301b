//! Render-surface abstraction
//!
//! The camera never talks to a graphics API directly; it drives a
//! [`RenderSurface`], which exposes only the viewport, scissor and clear
//! primitives the per-frame setup needs. On `wasm32` the surface is backed
//! by a WebGL2 context; [`DummySurface`] records commands for headless use
//! and tests.

mod dummy;
mod surface;

pub use dummy::*;
pub use surface::*;

#[cfg(target_arch = "wasm32")]
mod webgl;

#[cfg(target_arch = "wasm32")]
pub use webgl::*;
