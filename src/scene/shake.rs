//! Camera-shake capability.

use glam::Vec2;

/// Source of a shake-displaced camera center.
///
/// The camera queries this once per frame during draw preparation and uses
/// the returned point as the effective center for that frame's transform.
/// The stored logical center is never modified. How the displacement is
/// animated is up to the implementor; the camera works unchanged with no
/// shake source attached.
pub trait ShakeSource {
    /// The shake-adjusted center for the current frame, in world coordinates.
    fn center(&self) -> Vec2;
}
