//! WebGL2-backed render surface (wasm32 only).

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext};

use super::RenderSurface;

/// Render surface backed by a `WebGl2RenderingContext`.
pub struct WebGlSurface {
    gl: WebGl2RenderingContext,
}

impl WebGlSurface {
    /// Wrap an existing WebGL2 context.
    pub fn from_context(gl: WebGl2RenderingContext) -> Self {
        Self { gl }
    }

    /// Acquire a WebGL2 context from the canvas with the given element id.
    pub fn from_canvas_id(id: &str) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str("canvas element not found"))?;
        let canvas: HtmlCanvasElement = canvas.dyn_into()?;
        let gl = canvas
            .get_context("webgl2")?
            .ok_or_else(|| JsValue::from_str("webgl2 context unavailable"))?
            .dyn_into::<WebGl2RenderingContext>()?;
        Ok(Self { gl })
    }

    /// Dimensions of the backing canvas in pixels.
    pub fn canvas_size(&self) -> Result<(u32, u32), JsValue> {
        let canvas = self
            .gl
            .canvas()
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into::<HtmlCanvasElement>()?;
        Ok((canvas.width(), canvas.height()))
    }

    /// The wrapped context, for draw code outside this crate.
    pub fn context(&self) -> &WebGl2RenderingContext {
        &self.gl
    }
}

impl RenderSurface for WebGlSurface {
    fn set_viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.gl.viewport(x, y, width, height);
    }

    fn set_scissor_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.gl.scissor(x, y, width, height);
    }

    fn set_clear_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.gl.clear_color(r, g, b, a);
    }

    fn enable_scissor_test(&mut self) {
        self.gl.enable(WebGl2RenderingContext::SCISSOR_TEST);
    }

    fn clear_color_buffer(&mut self) {
        self.gl.clear(WebGl2RenderingContext::COLOR_BUFFER_BIT);
    }

    fn disable_scissor_test(&mut self) {
        self.gl.disable(WebGl2RenderingContext::SCISSOR_TEST);
    }
}
