//! Camera system
//!
//! A [`Camera`] maps a world-coordinate (WC) viewing window onto a pixel
//! viewport of a shared render surface. Once per frame, before any
//! renderable under the camera draws, [`Camera::prepare_frame`] configures
//! the surface, clears the camera's scissor region to the background color
//! and recomputes the camera transform matrix together with the per-render
//! cache used by the WC-to-pixel conversions.

mod manipulation;

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3, Vec4};
use log::{debug, trace};
use thiserror::Error;

use crate::render::{Color, RenderSurface, ViewportRect};
use crate::scene::{BoundingBox, CollideStatus, ShakeSource, Transform};

/// Fixed camera depth, in world units.
///
/// Gives the camera matrix a sensible Z range for lighting and depth
/// computations; a WC point at z = 0 lands at matrix-space z = -0.5.
pub const CAMERA_Z: f32 = 10.0;

/// Camera configuration error type
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CameraError {
    #[error("world-coordinate width must be positive, got {0}")]
    NonPositiveWidth(f32),
    #[error("viewport bound must be non-negative, got {0}")]
    NegativeBound(i32),
    #[error("viewport inset leaves a degenerate region ({width}x{height} px)")]
    DegenerateViewport { width: i32, height: i32 },
}

/// Logical viewing window: center and width of the WC region on screen.
///
/// Height is never stored; the camera derives it from the viewport aspect
/// ratio so it always tracks the current viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    center: Vec2,
    width: f32,
}

impl CameraState {
    /// Create a new state. `width` must be positive.
    pub fn new(center: Vec2, width: f32) -> Result<Self, CameraError> {
        if width <= 0.0 {
            return Err(CameraError::NonPositiveWidth(width));
        }
        Ok(Self { center, width })
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Set the window width. Rejects non-positive values, which would make
    /// the transform and pixel-ratio derivations divide by zero.
    pub fn set_width(&mut self, width: f32) -> Result<(), CameraError> {
        if width <= 0.0 {
            return Err(CameraError::NonPositiveWidth(width));
        }
        self.width = width;
        Ok(())
    }
}

/// Derived values recomputed by every [`Camera::prepare_frame`] call.
///
/// Only valid for the frame of the prep that produced them; any change to
/// center, width, viewport or shake state leaves them stale until the next
/// prep.
#[derive(Debug, Clone, Copy)]
struct PerRenderCache {
    /// Pixels per world unit for the current viewport/window pair.
    wc_to_pixel_ratio: f32,
    /// Lower-left corner of the WC window, from the effective center.
    camera_org: Vec2,
    /// Stored (unshaken) center in pixel space, with a synthetic Z.
    camera_pos_in_pixel_space: Vec3,
}

impl Default for PerRenderCache {
    fn default() -> Self {
        Self {
            wc_to_pixel_ratio: 1.0,
            camera_org: Vec2::ZERO,
            camera_pos_in_pixel_space: Vec3::ZERO,
        }
    }
}

/// Camera uniform data for GPU
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniformData {
    /// The camera transform matrix (WC window to the -1..1 cube).
    pub view_proj: Mat4,
    /// Camera center in pixel space (xyz) and the WC-to-pixel ratio (w).
    pub pos_in_pixel_space: Vec4,
}

/// Camera for viewing a region of the 2D world.
///
/// Several cameras may share one render surface, each drawing to its own
/// viewport region; the scissored clear in [`prepare_frame`](Self::prepare_frame)
/// keeps them from clearing each other's pixels.
pub struct Camera {
    state: CameraState,
    /// Inset pixel rectangle draws are mapped into.
    viewport: ViewportRect,
    /// Un-inset rectangle bounding the clear.
    scissor: ViewportRect,
    bound: i32,
    background_color: Color,
    shake: Option<Arc<dyn ShakeSource>>,
    camera_matrix: Mat4,
    render_cache: PerRenderCache,
}

impl Camera {
    /// Create a camera over the given WC window and pixel viewport, with a
    /// zero bound.
    pub fn new(center: Vec2, width: f32, viewport: ViewportRect) -> Result<Self, CameraError> {
        let mut camera = Self {
            state: CameraState::new(center, width)?,
            viewport,
            scissor: viewport,
            bound: 0,
            background_color: Color::new(0.8, 0.8, 0.8, 1.0),
            shake: None,
            camera_matrix: Mat4::IDENTITY,
            render_cache: PerRenderCache::default(),
        };
        camera.set_viewport_with_bound(viewport, 0)?;
        Ok(camera)
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Re-apply the current raw viewport with a different bound inset.
    pub fn with_bound(mut self, bound: i32) -> Result<Self, CameraError> {
        let raw = self.scissor;
        self.set_viewport_with_bound(raw, bound)?;
        Ok(self)
    }

    // Configuration

    /// Set the raw pixel rectangle this camera renders into, keeping the
    /// stored bound. Must be re-invoked whenever the canvas or layout
    /// changes.
    ///
    /// The scissor region is the rectangle as given; the draw viewport is
    /// the rectangle shrunk by the bound on each side.
    pub fn set_viewport(&mut self, rect: ViewportRect) -> Result<(), CameraError> {
        self.set_viewport_with_bound(rect, self.bound)
    }

    /// Set the raw pixel rectangle and a new bound inset.
    pub fn set_viewport_with_bound(
        &mut self,
        rect: ViewportRect,
        bound: i32,
    ) -> Result<(), CameraError> {
        if bound < 0 {
            return Err(CameraError::NegativeBound(bound));
        }
        let inset = rect.inset(bound);
        if inset.width <= 0 || inset.height <= 0 {
            return Err(CameraError::DegenerateViewport {
                width: inset.width,
                height: inset.height,
            });
        }
        self.viewport = inset;
        self.scissor = rect;
        self.bound = bound;
        debug!("camera viewport {rect:?}, bound {bound}");
        Ok(())
    }

    /// The outer (un-inset) pixel rectangle, as passed to
    /// [`set_viewport`](Self::set_viewport). Returns a copy; mutating it
    /// does not affect the camera.
    pub fn viewport(&self) -> ViewportRect {
        self.scissor
    }

    pub fn bound(&self) -> i32 {
        self.bound
    }

    pub fn wc_center(&self) -> Vec2 {
        self.state.center()
    }

    pub fn set_wc_center(&mut self, center: Vec2) {
        self.state.set_center(center);
    }

    pub fn wc_width(&self) -> f32 {
        self.state.width()
    }

    pub fn set_wc_width(&mut self, width: f32) -> Result<(), CameraError> {
        self.state.set_width(width)
    }

    /// Height of the WC window, derived from the current viewport aspect
    /// ratio. Never stored, so it tracks viewport changes.
    pub fn wc_height(&self) -> f32 {
        self.state.width() * (self.viewport.height as f32 / self.viewport.width as f32)
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
    }

    /// Attach a shake source. While present, its center overrides the
    /// stored center for the frame transform.
    pub fn set_shake(&mut self, shake: Arc<dyn ShakeSource>) {
        self.shake = Some(shake);
    }

    pub fn clear_shake(&mut self) {
        self.shake = None;
    }

    pub fn has_shake(&self) -> bool {
        self.shake.is_some()
    }

    fn effective_center(&self) -> Vec2 {
        match &self.shake {
            Some(shake) => shake.center(),
            None => self.state.center(),
        }
    }

    // Per-frame draw preparation

    /// Prepare the surface and this camera for a frame of drawing.
    ///
    /// Must be called once before any renderable under this camera draws.
    /// In order: configures the pixel viewport, clears the scissor region
    /// to the background color (enable scissor test, clear, disable), then
    /// recomputes the camera matrix and per-render cache from the current
    /// center, width and shake state.
    ///
    /// After this call [`camera_matrix`](Self::camera_matrix) and the
    /// WC-to-pixel conversions are valid until the next mutation of
    /// center, width, viewport or shake state.
    pub fn prepare_frame(&mut self, surface: &mut dyn RenderSurface) -> Result<(), CameraError> {
        let wc_width = self.state.width();
        if wc_width <= 0.0 {
            return Err(CameraError::NonPositiveWidth(wc_width));
        }
        if self.viewport.width <= 0 || self.viewport.height <= 0 {
            return Err(CameraError::DegenerateViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        let vp = self.viewport;
        surface.set_viewport(vp.x, vp.y, vp.width, vp.height);

        // Clear only this camera's region of the shared surface. The
        // enable/clear/disable ordering is what keeps overlapping cameras
        // from clearing each other's pixels; it must not be reordered.
        let sc = self.scissor;
        surface.set_scissor_rect(sc.x, sc.y, sc.width, sc.height);
        let bg = self.background_color;
        surface.set_clear_color(bg.r, bg.g, bg.b, bg.a);
        surface.enable_scissor_test();
        surface.clear_color_buffer();
        surface.disable_scissor_test();

        let center = self.effective_center();
        let wc_height = self.wc_height();
        let scale = Mat4::from_scale(Vec3::new(2.0 / wc_width, 2.0 / wc_height, 1.0 / CAMERA_Z));
        let translation = Mat4::from_translation(Vec3::new(-center.x, -center.y, -CAMERA_Z / 2.0));
        self.camera_matrix = scale * translation;

        self.render_cache.wc_to_pixel_ratio = vp.width as f32 / wc_width;
        self.render_cache.camera_org = center - Vec2::new(wc_width, wc_height) * 0.5;
        let pixel_center = self.wc_pos_to_pixel(self.state.center());
        self.render_cache.camera_pos_in_pixel_space =
            pixel_center.extend(self.fake_z_in_pixel_space(CAMERA_Z));

        trace!(
            "camera frame prep: center {center:?}, window {wc_width}x{wc_height}, viewport {vp:?}"
        );
        Ok(())
    }

    /// The camera transform matrix computed by the last
    /// [`prepare_frame`](Self::prepare_frame). Maps the effective center to
    /// the matrix-space origin and the WC window edges to ±1.
    pub fn camera_matrix(&self) -> &Mat4 {
        &self.camera_matrix
    }

    /// Build camera uniform data for shaders
    pub fn uniform_data(&self) -> CameraUniformData {
        CameraUniformData {
            view_proj: self.camera_matrix,
            pos_in_pixel_space: self
                .render_cache
                .camera_pos_in_pixel_space
                .extend(self.render_cache.wc_to_pixel_ratio),
        }
    }

    // World-to-pixel mapping. All of these read the per-render cache and
    // are only meaningful after the current frame's prepare_frame call.

    /// Pixels per world unit for the current frame.
    pub fn wc_to_pixel_ratio(&self) -> f32 {
        self.render_cache.wc_to_pixel_ratio
    }

    /// The stored (unshaken) center in pixel space, with a synthetic Z for
    /// depth and illumination computations.
    pub fn camera_pos_in_pixel_space(&self) -> Vec3 {
        self.render_cache.camera_pos_in_pixel_space
    }

    /// Convert a WC position to pixel space.
    pub fn wc_pos_to_pixel(&self, pos: Vec2) -> Vec2 {
        (pos - self.render_cache.camera_org) * self.render_cache.wc_to_pixel_ratio
    }

    /// Convert a WC length to pixels.
    pub fn wc_size_to_pixel(&self, size: f32) -> f32 {
        size * self.render_cache.wc_to_pixel_ratio
    }

    /// Map a WC-space depth onto the pixel-space Z axis.
    pub fn fake_z_in_pixel_space(&self, z: f32) -> f32 {
        z * self.render_cache.wc_to_pixel_ratio
    }

    // Boundary collision and clamping

    /// Test an object against this camera's WC window scaled by `zone`
    /// (1.0 tests against exactly the visible window).
    pub fn collide_wc_bound(&self, xform: &Transform, zone: f32) -> CollideStatus {
        let object = BoundingBox::from_center_size(xform.position, xform.width(), xform.height());
        let bound = BoundingBox::from_center_size(
            self.wc_center(),
            zone * self.wc_width(),
            zone * self.wc_height(),
        );
        bound.collide_status(&object)
    }

    /// Clamp an object's position so it sits exactly on any zone edge it
    /// violates, each axis independently. Returns the pre-clamp status so
    /// callers can react to the collision.
    ///
    /// Objects fully outside the zone (empty status) are not moved.
    pub fn clamp_at_boundary(&self, xform: &mut Transform, zone: f32) -> CollideStatus {
        let status = self.collide_wc_bound(xform, zone);
        if !status.contains(CollideStatus::INSIDE) {
            let center = self.wc_center();
            let half_w = zone * self.wc_width() * 0.5;
            let half_h = zone * self.wc_height() * 0.5;
            let obj_half = xform.size * 0.5;
            let mut pos = xform.position;
            if status.contains(CollideStatus::TOP) {
                pos.y = center.y + half_h - obj_half.y;
            }
            if status.contains(CollideStatus::BOTTOM) {
                pos.y = center.y - half_h + obj_half.y;
            }
            if status.contains(CollideStatus::RIGHT) {
                pos.x = center.x + half_w - obj_half.x;
            }
            if status.contains(CollideStatus::LEFT) {
                pos.x = center.x - half_w + obj_half.x;
            }
            xform.position = pos;
        }
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DummySurface;

    struct FixedShake(Vec2);

    impl ShakeSource for FixedShake {
        fn center(&self) -> Vec2 {
            self.0
        }
    }

    fn camera() -> Camera {
        Camera::new(Vec2::ZERO, 20.0, ViewportRect::from_dimensions(640, 480)).unwrap()
    }

    fn prepped_camera() -> Camera {
        let mut cam = camera();
        cam.prepare_frame(&mut DummySurface::new()).unwrap();
        cam
    }

    #[test]
    fn wc_height_tracks_viewport_aspect() {
        let mut cam = camera();
        assert_eq!(cam.wc_height(), 15.0);

        cam.set_viewport(ViewportRect::from_dimensions(800, 800)).unwrap();
        assert_eq!(cam.wc_height(), 20.0);
    }

    #[test]
    fn viewport_round_trips_uninset_rect() {
        let mut cam = camera();
        let raw = ViewportRect::new(10, 20, 200, 100);
        cam.set_viewport_with_bound(raw, 5).unwrap();
        assert_eq!(cam.viewport(), raw);
        assert_eq!(cam.bound(), 5);
    }

    #[test]
    fn rejects_bad_configuration() {
        assert_eq!(
            Camera::new(Vec2::ZERO, 0.0, ViewportRect::from_dimensions(640, 480)).err(),
            Some(CameraError::NonPositiveWidth(0.0))
        );

        let mut cam = camera();
        assert_eq!(
            cam.set_wc_width(-2.0),
            Err(CameraError::NonPositiveWidth(-2.0))
        );
        assert_eq!(
            cam.set_viewport_with_bound(ViewportRect::from_dimensions(10, 10), 5),
            Err(CameraError::DegenerateViewport {
                width: 0,
                height: 0
            })
        );
        assert_eq!(
            cam.set_viewport_with_bound(ViewportRect::from_dimensions(640, 480), -1),
            Err(CameraError::NegativeBound(-1))
        );
        // A failed reconfiguration leaves the previous viewport in place.
        assert_eq!(cam.viewport(), ViewportRect::from_dimensions(640, 480));
    }

    #[test]
    fn prepare_frame_emits_exact_surface_sequence() {
        let mut cam = Camera::new(Vec2::ZERO, 20.0, ViewportRect::new(10, 20, 200, 100))
            .unwrap()
            .with_background_color(Color::new(0.1, 0.2, 0.3, 1.0))
            .with_bound(5)
            .unwrap();

        let mut surface = DummySurface::new();
        cam.prepare_frame(&mut surface).unwrap();

        use crate::render::SurfaceCommand::*;
        assert_eq!(
            surface.commands(),
            &[
                SetViewport {
                    x: 15,
                    y: 25,
                    width: 190,
                    height: 90
                },
                SetScissorRect {
                    x: 10,
                    y: 20,
                    width: 200,
                    height: 100
                },
                SetClearColor {
                    r: 0.1,
                    g: 0.2,
                    b: 0.3,
                    a: 1.0
                },
                EnableScissorTest,
                ClearColorBuffer,
                DisableScissorTest,
            ]
        );
    }

    #[test]
    fn matrix_maps_center_to_origin_and_edge_to_one() {
        let mut cam = Camera::new(
            Vec2::new(3.0, -2.0),
            20.0,
            ViewportRect::from_dimensions(640, 480),
        )
        .unwrap();
        cam.prepare_frame(&mut DummySurface::new()).unwrap();

        let m = cam.camera_matrix();
        let at_center = m.transform_point3(Vec3::new(3.0, -2.0, 0.0));
        assert!(at_center.x.abs() < 1e-6);
        assert!(at_center.y.abs() < 1e-6);

        let at_right_edge = m.transform_point3(Vec3::new(13.0, -2.0, 0.0));
        assert!((at_right_edge.x - 1.0).abs() < 1e-6);

        let at_top_edge = m.transform_point3(Vec3::new(3.0, -2.0 + 7.5, 0.0));
        assert!((at_top_edge.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn pixel_round_trip_matches_cache() {
        let cam = prepped_camera();
        let p = cam.wc_pos_to_pixel(cam.wc_center());
        let cached = cam.camera_pos_in_pixel_space();
        assert!((p.x - cached.x).abs() < 1e-5);
        assert!((p.y - cached.y).abs() < 1e-5);
        // 640 px over 20 world units.
        assert_eq!(cam.wc_to_pixel_ratio(), 32.0);
        assert_eq!(cam.wc_size_to_pixel(2.0), 64.0);
    }

    #[test]
    fn shake_shifts_matrix_but_not_stored_center() {
        let mut cam = camera();
        cam.set_shake(Arc::new(FixedShake(Vec2::new(1.0, 2.0))));
        cam.prepare_frame(&mut DummySurface::new()).unwrap();

        // The shake center is the frame's effective center.
        let at_shake = cam.camera_matrix().transform_point3(Vec3::new(1.0, 2.0, 0.0));
        assert!(at_shake.x.abs() < 1e-6 && at_shake.y.abs() < 1e-6);

        // Stored state is untouched, and the cached pixel-space position
        // still refers to it.
        assert_eq!(cam.wc_center(), Vec2::ZERO);
        let cached = cam.camera_pos_in_pixel_space();
        let expected = cam.wc_pos_to_pixel(Vec2::ZERO);
        assert!((cached.x - expected.x).abs() < 1e-5);
        assert!((cached.y - expected.y).abs() < 1e-5);

        cam.clear_shake();
        assert!(!cam.has_shake());
        cam.prepare_frame(&mut DummySurface::new()).unwrap();
        let at_center = cam.camera_matrix().transform_point3(Vec3::ZERO);
        assert!(at_center.x.abs() < 1e-6 && at_center.y.abs() < 1e-6);
    }

    #[test]
    fn collide_reports_violated_edge() {
        let cam = camera();
        let object = Transform::from_position_size(Vec2::new(11.0, 0.0), Vec2::new(2.0, 2.0));
        assert_eq!(cam.collide_wc_bound(&object, 1.0), CollideStatus::RIGHT);

        let inside = Transform::from_position_size(Vec2::ZERO, Vec2::new(2.0, 2.0));
        assert_eq!(cam.collide_wc_bound(&inside, 1.0), CollideStatus::INSIDE);
    }

    #[test]
    fn clamp_moves_object_onto_edge() {
        let cam = camera();
        let mut object = Transform::from_position_size(Vec2::new(11.0, 0.0), Vec2::new(2.0, 2.0));
        let status = cam.clamp_at_boundary(&mut object, 1.0);
        assert_eq!(status, CollideStatus::RIGHT);
        assert!((object.position.x - 9.0).abs() < 1e-6);
        assert_eq!(object.position.y, 0.0);
    }

    #[test]
    fn clamp_handles_two_edges_in_one_call() {
        let cam = camera();
        let mut object =
            Transform::from_position_size(Vec2::new(-10.5, 7.8), Vec2::new(2.0, 2.0));
        let status = cam.clamp_at_boundary(&mut object, 1.0);
        assert!(status.contains(CollideStatus::LEFT));
        assert!(status.contains(CollideStatus::TOP));
        assert!((object.position.x + 9.0).abs() < 1e-6);
        assert!((object.position.y - 6.5).abs() < 1e-6);
    }

    #[test]
    fn clamp_leaves_outside_object_alone() {
        let cam = camera();
        let mut object = Transform::from_position_size(Vec2::new(50.0, 50.0), Vec2::new(2.0, 2.0));
        let status = cam.clamp_at_boundary(&mut object, 1.0);
        assert_eq!(status, CollideStatus::empty());
        assert_eq!(object.position, Vec2::new(50.0, 50.0));
    }
}
