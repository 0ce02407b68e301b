//! Axis-aligned bounding boxes and edge-collision status.

use bitflags::bitflags;
use glam::Vec2;

bitflags! {
    /// Which edges of a bound another box violates.
    ///
    /// An empty set means the boxes are disjoint. [`CollideStatus::INSIDE`]
    /// is set, alone, when the queried box intersects the bound without
    /// crossing any of its edges.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CollideStatus: u32 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const TOP = 1 << 2;
        const BOTTOM = 1 << 3;
        const INSIDE = 1 << 4;
    }
}

/// Axis-aligned bounding box in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl BoundingBox {
    /// Build a box centered at `center` with the given extents.
    pub fn from_center_size(center: Vec2, width: f32, height: f32) -> Self {
        let half = Vec2::new(width, height) * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Whether the boxes overlap. Touching edges count as overlap, so an
    /// object resting exactly on a boundary still reports a collision.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Classify how `other` sits relative to this box.
    ///
    /// Returns the set of edges of `self` that `other` reaches past,
    /// [`CollideStatus::INSIDE`] if it intersects without crossing any
    /// edge, or the empty set if the boxes are disjoint.
    pub fn collide_status(&self, other: &BoundingBox) -> CollideStatus {
        let mut status = CollideStatus::empty();
        if self.intersects(other) {
            if other.min.x < self.min.x {
                status |= CollideStatus::LEFT;
            }
            if other.max.x > self.max.x {
                status |= CollideStatus::RIGHT;
            }
            if other.min.y < self.min.y {
                status |= CollideStatus::BOTTOM;
            }
            if other.max.y > self.max.y {
                status |= CollideStatus::TOP;
            }
            if status.is_empty() {
                status = CollideStatus::INSIDE;
            }
        }
        status
    }
}
