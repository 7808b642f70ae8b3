//! Initial camera framing for a decoded cloud.

use binscope_core::Bounds;
use glam::{Mat4, Vec3};

/// Camera pose that brings a whole point cloud into view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewFit {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Largest side of the framed box.
    pub size: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
}

impl ViewFit {
    /// Frames `bounds` from the (+x, +y, +z) diagonal, 1.5 box sizes out.
    ///
    /// Empty bounds frame the unit cube; a zero-size box is treated as size 1.
    pub fn from_bounds(bounds: &Bounds) -> Self {
        let (center, size) = if bounds.is_empty() {
            (Vec3::splat(0.5), 1.0)
        } else {
            let size = bounds.max_extent();
            (bounds.center(), if size > 0.0 { size } else { 1.0 })
        };

        Self {
            position: center + Vec3::splat(size * 1.5),
            target: center,
            size,
            near: size * 0.001,
            far: size * 100.0,
        }
    }

    /// Returns the view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }
}
