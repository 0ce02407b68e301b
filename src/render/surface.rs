//! Core render-surface trait and pixel-space value types.

/// A pixel-space rectangle on the rendering surface.
///
/// Origin is the lower-left corner, matching WebGL viewport conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ViewportRect {
    /// X coordinate of the lower-left corner.
    pub x: i32,
    /// Y coordinate of the lower-left corner.
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl ViewportRect {
    /// Create a new rectangle.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from dimensions with origin at (0, 0).
    pub fn from_dimensions(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Shrink the rectangle by `bound` pixels on every side.
    ///
    /// The result has `width - 2 * bound` by `height - 2 * bound` pixels
    /// and may be degenerate; callers are expected to validate.
    pub fn inset(self, bound: i32) -> Self {
        Self {
            x: self.x + bound,
            y: self.y + bound,
            width: self.width - 2 * bound,
            height: self.height - 2 * bound,
        }
    }
}

/// An RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Components as an array, in RGBA order.
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

/// Interface the camera drives on the shared graphics surface.
///
/// Implementations map these calls onto a concrete graphics context. The
/// surface is a single shared mutable resource: when several cameras draw
/// to regions of the same surface, the enable-scissor / clear /
/// disable-scissor sequence issued by each camera is what keeps one
/// camera's clear from bleeding into another's region, so implementations
/// must execute the calls in the order received.
pub trait RenderSurface {
    /// Set the pixel viewport subsequent draws are mapped into.
    fn set_viewport(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Set the scissor rectangle bounding clear operations.
    fn set_scissor_rect(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Set the color used by [`clear_color_buffer`](Self::clear_color_buffer).
    fn set_clear_color(&mut self, r: f32, g: f32, b: f32, a: f32);

    /// Enable the scissor test.
    fn enable_scissor_test(&mut self);

    /// Clear the color buffer (bounded by the scissor rect while enabled).
    fn clear_color_buffer(&mut self);

    /// Disable the scissor test.
    fn disable_scissor_test(&mut self);
}
