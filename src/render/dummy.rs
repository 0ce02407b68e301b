//! Command-recording surface for headless use and tests.

use log::trace;

use super::RenderSurface;

/// A single recorded surface call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceCommand {
    SetViewport {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    SetScissorRect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    SetClearColor {
        r: f32,
        g: f32,
        b: f32,
        a: f32,
    },
    EnableScissorTest,
    ClearColorBuffer,
    DisableScissorTest,
}

/// Render surface that records every call instead of touching a GPU.
///
/// Useful for running the frame loop headless and for asserting the exact
/// call sequence a camera issues.
#[derive(Debug, Default)]
pub struct DummySurface {
    commands: Vec<SurfaceCommand>,
}

impl DummySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far, in call order.
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Drop all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl RenderSurface for DummySurface {
    fn set_viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
        trace!("dummy surface: viewport {x},{y} {width}x{height}");
        self.commands.push(SurfaceCommand::SetViewport {
            x,
            y,
            width,
            height,
        });
    }

    fn set_scissor_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.commands.push(SurfaceCommand::SetScissorRect {
            x,
            y,
            width,
            height,
        });
    }

    fn set_clear_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.commands.push(SurfaceCommand::SetClearColor { r, g, b, a });
    }

    fn enable_scissor_test(&mut self) {
        self.commands.push(SurfaceCommand::EnableScissorTest);
    }

    fn clear_color_buffer(&mut self) {
        self.commands.push(SurfaceCommand::ClearColorBuffer);
    }

    fn disable_scissor_test(&mut self) {
        self.commands.push(SurfaceCommand::DisableScissorTest);
    }
}
