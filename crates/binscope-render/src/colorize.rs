//! Intensity normalization and per-point coloring.

use binscope_core::{Bounds, Point};
use glam::Vec3;

use crate::color_maps::ColorMap;

/// Intensity range of a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityRange {
    pub min: f32,
    pub max: f32,
}

impl IntensityRange {
    /// Maps `intensity` to `[0, 1]`.
    ///
    /// A constant range (`max == min`) maps everything to 0. Differences are
    /// taken in f64 so ranges spanning most of the f32 domain stay finite.
    pub fn normalize(&self, intensity: f32) -> f32 {
        let min = f64::from(self.min);
        let span = f64::from(self.max) - min;
        if span > 0.0 {
            ((f64::from(intensity) - min) / span).clamp(0.0, 1.0) as f32
        } else {
            0.0
        }
    }

    /// Returns true if every point has the same intensity.
    pub fn is_degenerate(&self) -> bool {
        self.max <= self.min
    }
}

/// Extents and intensity range gathered in one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudStats {
    pub bounds: Bounds,
    /// `None` for an empty point set.
    pub intensity: Option<IntensityRange>,
}

impl CloudStats {
    /// Folds over `points` once.
    pub fn from_points(points: &[Point]) -> Self {
        let init = Self {
            bounds: Bounds::empty(),
            intensity: None,
        };
        points.iter().fold(init, |mut stats, p| {
            stats.bounds.update(p.position());
            stats.intensity = Some(match stats.intensity {
                Some(range) => IntensityRange {
                    min: range.min.min(p.intensity),
                    max: range.max.max(p.intensity),
                },
                None => IntensityRange {
                    min: p.intensity,
                    max: p.intensity,
                },
            });
            stats
        })
    }
}

/// Colors every point with the intensity ramp.
pub fn colorize(points: &[Point]) -> Vec<Vec3> {
    colorize_with(points, &ColorMap::intensity())
}

/// Colors every point by sampling `color_map` at its normalized intensity.
pub fn colorize_with(points: &[Point], color_map: &ColorMap) -> Vec<Vec3> {
    match CloudStats::from_points(points).intensity {
        Some(range) => colorize_in_range(points, range, color_map),
        None => Vec::new(),
    }
}

/// Colors `points` against a precomputed intensity range.
pub fn colorize_in_range(
    points: &[Point],
    range: IntensityRange,
    color_map: &ColorMap,
) -> Vec<Vec3> {
    if range.is_degenerate() {
        log::debug!("constant intensity {}, coloring every point at t=0", range.min);
    }

    points
        .iter()
        .map(|p| color_map.sample(range.normalize(p.intensity)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn with_intensity(intensity: f32) -> Point {
        Point::new(0.0, 0.0, 0.0, intensity)
    }

    #[test]
    fn test_colorize_empty() {
        assert!(colorize(&[]).is_empty());
    }

    #[test]
    fn test_single_point_is_black() {
        let colors = colorize(&[with_intensity(5.0)]);
        assert_eq!(colors, vec![Vec3::ZERO]);
        assert!(!colors[0].is_nan());
    }

    #[test]
    fn test_constant_intensity_is_black() {
        let points = vec![with_intensity(3.0); 4];
        assert!(colorize(&points).iter().all(|c| *c == Vec3::ZERO));
    }

    #[test]
    fn test_min_and_max_map_to_ends() {
        let colors = colorize(&[with_intensity(0.0), with_intensity(10.0)]);
        assert_eq!(colors[0], Vec3::ZERO);
        assert_eq!(colors[1], Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_midpoint_is_cyan() {
        let colors = colorize(&[
            with_intensity(0.0),
            with_intensity(50.0),
            with_intensity(100.0),
        ]);
        assert!((colors[1] - Vec3::new(0.0, 1.0, 1.0)).abs().max_element() < 1e-6);
    }

    #[test]
    fn test_extreme_intensities_stay_finite() {
        let colors = colorize(&[
            with_intensity(-3.0e38),
            with_intensity(0.0),
            with_intensity(3.0e38),
        ]);
        assert!(colors.iter().all(|c| c.is_finite()));
        assert_eq!(colors[0], Vec3::ZERO);
        assert!((colors[1] - Vec3::new(0.0, 1.0, 1.0)).abs().max_element() < 1e-6);
        assert_eq!(colors[2], Vec3::new(1.0, 0.0, 0.0));

        let full = IntensityRange {
            min: f32::MIN,
            max: f32::MAX,
        };
        assert_eq!(full.normalize(f32::MIN), 0.0);
        assert_eq!(full.normalize(f32::MAX), 1.0);
        assert_eq!(full.normalize(0.0), 0.5);
    }

    #[test]
    fn test_colorize_with_other_map() {
        let map = ColorMap::new("gray", vec![Vec3::ZERO, Vec3::ONE]);
        let colors = colorize_with(&[with_intensity(1.0), with_intensity(3.0)], &map);
        assert_eq!(colors, vec![Vec3::ZERO, Vec3::ONE]);
    }

    #[test]
    fn test_colorize_in_wider_range() {
        let range = IntensityRange { min: 0.0, max: 4.0 };
        let colors = colorize_in_range(&[with_intensity(1.0)], range, &ColorMap::intensity());
        assert_eq!(colors, vec![Vec3::new(0.0, 0.0, 1.0)]);
    }

    #[test]
    fn test_cloud_stats() {
        let points = vec![
            Point::new(-1.0, 0.0, 2.0, 7.0),
            Point::new(1.0, 4.0, -2.0, -3.0),
        ];
        let stats = CloudStats::from_points(&points);
        assert_eq!(stats.bounds.min, Vec3::new(-1.0, 0.0, -2.0));
        assert_eq!(stats.bounds.max, Vec3::new(1.0, 4.0, 2.0));
        assert_eq!(
            stats.intensity,
            Some(IntensityRange {
                min: -3.0,
                max: 7.0
            })
        );
        assert!(CloudStats::from_points(&[]).intensity.is_none());
    }

    #[test]
    fn test_normalize_clamps() {
        let range = IntensityRange { min: 0.0, max: 2.0 };
        assert_eq!(range.normalize(1.0), 0.5);
        assert_eq!(range.normalize(-1.0), 0.0);
        assert_eq!(range.normalize(5.0), 1.0);
        let flat = IntensityRange { min: 2.0, max: 2.0 };
        assert!(flat.is_degenerate());
        assert_eq!(flat.normalize(2.0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_colors_stay_in_unit_cube(
            intensities in proptest::collection::vec(
                any::<f32>().prop_filter("finite", |v| v.is_finite()),
                0..64,
            ),
        ) {
            let points: Vec<Point> = intensities.iter().map(|i| with_intensity(*i)).collect();
            let colors = colorize(&points);
            prop_assert_eq!(colors.len(), points.len());
            for c in colors {
                prop_assert!(c.is_finite());
                prop_assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0);
            }
        }
    }
}
