//! Decoded points and their spatial extents.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A single decoded LiDAR return.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Reflectivity, only used for coloring.
    pub intensity: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ring: Option<u16>,
}

impl Point {
    /// Creates a point with only the mandatory fields set.
    pub fn new(x: f32, y: f32, z: f32, intensity: f32) -> Self {
        Self {
            x,
            y,
            z,
            intensity,
            timestamp: None,
            ring: None,
        }
    }

    /// Sets the timestamp.
    pub fn with_timestamp(mut self, timestamp: f32) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Sets the laser ring index.
    pub fn with_ring(mut self, ring: u16) -> Self {
        self.ring = Some(ring);
        self
    }

    /// Returns the position as a vector.
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Name of the first mandatory field that is NaN or infinite, if any.
    pub fn first_non_finite(&self) -> Option<&'static str> {
        [
            ("x", self.x),
            ("y", self.y),
            ("z", self.z),
            ("intensity", self.intensity),
        ]
        .into_iter()
        .find(|(_, v)| !v.is_finite())
        .map(|(name, _)| name)
    }
}

/// Axis-aligned bounding box of a point set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::empty()
    }
}

impl Bounds {
    /// Creates bounds that contain nothing yet.
    pub fn empty() -> Self {
        Self {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
        }
    }

    /// Computes the bounds of a point set.
    pub fn from_points(points: &[Point]) -> Self {
        points.iter().fold(Self::empty(), |mut bounds, p| {
            bounds.update(p.position());
            bounds
        })
    }

    /// Grows the bounds to include `p`.
    pub fn update(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Returns true if no point has been added.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
    }

    /// Center of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Size along each axis. Zero for empty bounds.
    pub fn extent(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            self.max - self.min
        }
    }

    /// Largest side length.
    pub fn max_extent(&self) -> f32 {
        self.extent().max_element()
    }
}
