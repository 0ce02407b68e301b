//! Transform component

use glam::{Mat4, Quat, Vec2};

/// Transform for positioning game objects in the 2D world.
///
/// Positions and sizes are in world coordinates; `z` only orders draws and
/// feeds depth-based effects, it takes no part in collision queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    /// Rotation about the z axis, in radians.
    pub rotation: f32,
    /// Width and height of the object.
    pub size: Vec2,
    pub z: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            size: Vec2::ONE,
            z: 0.0,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            ..Default::default()
        }
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Translate by an offset
    pub fn translate(&mut self, offset: Vec2) {
        self.position += offset;
    }

    /// Get the model matrix for this transform
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.size.extend(1.0),
            Quat::from_rotation_z(self.rotation),
            self.position.extend(self.z),
        )
    }
}
