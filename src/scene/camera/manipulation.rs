//! Camera-state manipulation: panning and zooming.
//!
//! All of these mutate the logical viewing window only; the camera matrix
//! and per-render cache stay stale until the next
//! [`prepare_frame`](Camera::prepare_frame).

use glam::Vec2;

use super::{Camera, CameraError};
use crate::scene::{CollideStatus, Transform};

impl Camera {
    /// Move the WC center by a delta.
    pub fn pan_by(&mut self, delta: Vec2) {
        let center = self.state.center();
        self.state.set_center(center + delta);
    }

    /// Recenter the WC window.
    pub fn pan_to(&mut self, center: Vec2) {
        self.state.set_center(center);
    }

    /// Move the camera the minimal amount needed to bring the object back
    /// inside the zone window. The dual of
    /// [`clamp_at_boundary`](Camera::clamp_at_boundary): the camera moves,
    /// the object stays.
    pub fn pan_with(&mut self, xform: &Transform, zone: f32) {
        let status = self.collide_wc_bound(xform, zone);
        if !status.contains(CollideStatus::INSIDE) {
            let half_w = zone * self.wc_width() * 0.5;
            let half_h = zone * self.wc_height() * 0.5;
            let obj_half = xform.size * 0.5;
            let pos = xform.position;
            let mut center = self.state.center();
            if status.contains(CollideStatus::TOP) {
                center.y = pos.y + obj_half.y - half_h;
            }
            if status.contains(CollideStatus::BOTTOM) {
                center.y = pos.y - obj_half.y + half_h;
            }
            if status.contains(CollideStatus::RIGHT) {
                center.x = pos.x + obj_half.x - half_w;
            }
            if status.contains(CollideStatus::LEFT) {
                center.x = pos.x - obj_half.x + half_w;
            }
            self.state.set_center(center);
        }
    }

    /// Scale the WC window width by `zoom` (< 1 zooms in, > 1 zooms out).
    pub fn zoom_by(&mut self, zoom: f32) -> Result<(), CameraError> {
        let width = self.state.width() * zoom;
        self.state.set_width(width)
    }

    /// Zoom while keeping `pos` stationary in the viewport.
    pub fn zoom_towards(&mut self, pos: Vec2, zoom: f32) -> Result<(), CameraError> {
        let center = self.state.center();
        let delta = (pos - center) * (zoom - 1.0);
        self.zoom_by(zoom)?;
        self.state.set_center(center - delta);
        Ok(())
    }
}
