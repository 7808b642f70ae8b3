//! Flat render buffers for GPU upload.

use binscope_core::{BinscopeError, Point, Result};
use glam::Vec3;

/// Interleaved per-point vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Position and color arrays laid out `[x0, y0, z0, x1, ...]` and `[r0, g0, b0, ...]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderBuffers {
    /// Position buffer, 3 floats per point.
    pub positions: Vec<f32>,
    /// Color buffer, 3 floats per point in `[0, 1]`.
    pub colors: Vec<f32>,
}

impl RenderBuffers {
    /// Packs points and their colors.
    ///
    /// `points` and `colors` must have the same length.
    pub fn build(points: &[Point], colors: &[Vec3]) -> Self {
        debug_assert_eq!(
            points.len(),
            colors.len(),
            "one color per point is required"
        );

        let positions = points.iter().flat_map(|p| [p.x, p.y, p.z]).collect();
        let colors = colors.iter().flat_map(|c| c.to_array()).collect();
        Self { positions, colors }
    }

    /// Like [`RenderBuffers::build`], but reports mismatched lengths.
    pub fn try_build(points: &[Point], colors: &[Vec3]) -> Result<Self> {
        if points.len() != colors.len() {
            return Err(BinscopeError::SizeMismatch {
                expected: points.len(),
                actual: colors.len(),
            });
        }
        Ok(Self::build(points, colors))
    }

    /// Number of points.
    pub fn num_points(&self) -> usize {
        self.positions.len() / 3
    }

    /// Position of point `index`.
    pub fn position(&self, index: usize) -> Option<Vec3> {
        self.positions
            .get(index * 3..index * 3 + 3)
            .map(Vec3::from_slice)
    }

    /// Color of point `index`.
    pub fn color(&self, index: usize) -> Option<Vec3> {
        self.colors.get(index * 3..index * 3 + 3).map(Vec3::from_slice)
    }

    /// Raw bytes of the position buffer.
    pub fn positions_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Raw bytes of the color buffer.
    pub fn colors_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Position and color interleaved per point.
    pub fn interleaved(&self) -> Vec<PointVertex> {
        self.positions
            .chunks_exact(3)
            .zip(self.colors.chunks_exact(3))
            .map(|(p, c)| PointVertex {
                position: [p[0], p[1], p[2]],
                color: [c[0], c[1], c[2]],
            })
            .collect()
    }
}
