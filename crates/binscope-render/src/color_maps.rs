//! Color map system.

use std::collections::HashMap;

use glam::Vec3;

/// Name of the 4-band intensity ramp.
pub const INTENSITY_COLOR_MAP: &str = "intensity";

/// A color map for mapping scalar values to colors.
#[derive(Debug, Clone)]
pub struct ColorMap {
    /// Color map name.
    pub name: String,
    /// Color samples (evenly spaced from 0 to 1).
    pub colors: Vec<Vec3>,
}

impl ColorMap {
    /// Creates a new color map.
    pub fn new(name: impl Into<String>, colors: Vec<Vec3>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// The LiDAR intensity ramp: black, blue, cyan, yellow, red.
    ///
    /// Five evenly spaced stops give four linear bands of width 0.25:
    /// - `[0, 0.25)`: `(0, 0, 4t)`
    /// - `[0.25, 0.5)`: `(0, 4(t - 0.25), 1)`
    /// - `[0.5, 0.75)`: `(4(t - 0.5), 1, 1 - 4(t - 0.5))`
    /// - `[0.75, 1]`: `(1, 1 - 4(t - 0.75), 0)`
    pub fn intensity() -> Self {
        Self::new(
            INTENSITY_COLOR_MAP,
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(0.0, 1.0, 1.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
            ],
        )
    }

    /// Samples the color map at a given value (0 to 1).
    pub fn sample(&self, t: f32) -> Vec3 {
        let t = t.clamp(0.0, 1.0);

        if self.colors.is_empty() {
            return Vec3::ZERO;
        }

        if self.colors.len() == 1 {
            return self.colors[0];
        }

        let n = self.colors.len() - 1;
        let idx = (t * n as f32).floor() as usize;
        let idx = idx.min(n - 1);
        let frac = t * n as f32 - idx as f32;

        self.colors[idx].lerp(self.colors[idx + 1], frac)
    }
}

/// Registry for managing color maps.
#[derive(Default)]
pub struct ColorMapRegistry {
    color_maps: HashMap<String, ColorMap>,
}

impl ColorMapRegistry {
    /// Creates a new color map registry with default color maps.
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        self.register(ColorMap::intensity());

        // Viridis color map
        self.register(ColorMap::new(
            "viridis",
            vec![
                Vec3::new(0.267, 0.004, 0.329),
                Vec3::new(0.282, 0.140, 0.457),
                Vec3::new(0.253, 0.265, 0.529),
                Vec3::new(0.206, 0.371, 0.553),
                Vec3::new(0.163, 0.471, 0.558),
                Vec3::new(0.127, 0.566, 0.550),
                Vec3::new(0.134, 0.658, 0.517),
                Vec3::new(0.266, 0.749, 0.440),
                Vec3::new(0.477, 0.821, 0.318),
                Vec3::new(0.741, 0.873, 0.150),
                Vec3::new(0.993, 0.906, 0.144),
            ],
        ));

        // Blues color map
        self.register(ColorMap::new(
            "blues",
            vec![
                Vec3::new(0.969, 0.984, 1.000),
                Vec3::new(0.871, 0.922, 0.969),
                Vec3::new(0.776, 0.859, 0.937),
                Vec3::new(0.620, 0.792, 0.882),
                Vec3::new(0.419, 0.682, 0.839),
                Vec3::new(0.259, 0.573, 0.776),
                Vec3::new(0.129, 0.443, 0.710),
                Vec3::new(0.031, 0.318, 0.612),
                Vec3::new(0.031, 0.188, 0.420),
            ],
        ));

        // Reds color map
        self.register(ColorMap::new(
            "reds",
            vec![
                Vec3::new(1.000, 0.961, 0.941),
                Vec3::new(0.996, 0.878, 0.824),
                Vec3::new(0.988, 0.733, 0.631),
                Vec3::new(0.988, 0.573, 0.447),
                Vec3::new(0.984, 0.416, 0.290),
                Vec3::new(0.937, 0.231, 0.173),
                Vec3::new(0.796, 0.094, 0.114),
                Vec3::new(0.647, 0.059, 0.082),
                Vec3::new(0.404, 0.000, 0.051),
            ],
        ));

        // Coolwarm color map
        self.register(ColorMap::new(
            "coolwarm",
            vec![
                Vec3::new(0.230, 0.299, 0.754),
                Vec3::new(0.552, 0.690, 0.996),
                Vec3::new(0.866, 0.866, 0.866),
                Vec3::new(0.956, 0.604, 0.486),
                Vec3::new(0.706, 0.016, 0.150),
            ],
        ));

        // Rainbow color map
        self.register(ColorMap::new(
            "rainbow",
            vec![
                Vec3::new(0.5, 0.0, 1.0),
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(0.0, 1.0, 1.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
            ],
        ));
    }

    /// Registers a color map.
    pub fn register(&mut self, color_map: ColorMap) {
        self.color_maps.insert(color_map.name.clone(), color_map);
    }

    /// Gets a color map by name.
    pub fn get(&self, name: &str) -> Option<&ColorMap> {
        self.color_maps.get(name)
    }

    /// Gets a color map by name, falling back to the intensity ramp.
    pub fn get_or_intensity(&self, name: &str) -> ColorMap {
        match self.get(name) {
            Some(map) => map.clone(),
            None => {
                log::warn!("unknown color map '{name}', using '{INTENSITY_COLOR_MAP}'");
                ColorMap::intensity()
            }
        }
    }

    /// Returns all color map names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.color_maps.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The ramp written out band by band.
    fn banded(t: f32) -> Vec3 {
        if t < 0.25 {
            Vec3::new(0.0, 0.0, t * 4.0)
        } else if t < 0.5 {
            Vec3::new(0.0, (t - 0.25) * 4.0, 1.0)
        } else if t < 0.75 {
            Vec3::new((t - 0.5) * 4.0, 1.0, 1.0 - (t - 0.5) * 4.0)
        } else {
            Vec3::new(1.0, 1.0 - (t - 0.75) * 4.0, 0.0)
        }
    }

    #[test]
    fn test_intensity_map_matches_bands() {
        let map = ColorMap::intensity();
        for i in 0..=200 {
            let t = i as f32 / 200.0;
            let diff = (map.sample(t) - banded(t)).abs().max_element();
            assert!(diff < 1e-5, "t={t}: {:?} vs {:?}", map.sample(t), banded(t));
        }
    }

    #[test]
    fn test_intensity_map_endpoints() {
        let map = ColorMap::intensity();
        assert_eq!(map.sample(0.0), Vec3::ZERO);
        assert_eq!(map.sample(1.0), Vec3::new(1.0, 0.0, 0.0));
        // Out of range values clamp
        assert_eq!(map.sample(-3.0), Vec3::ZERO);
        assert_eq!(map.sample(7.0), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_degenerate_maps() {
        assert_eq!(ColorMap::new("empty", vec![]).sample(0.5), Vec3::ZERO);
        assert_eq!(ColorMap::new("flat", vec![Vec3::ONE]).sample(0.5), Vec3::ONE);
    }

    #[test]
    fn test_registry_defaults() {
        let registry = ColorMapRegistry::new();
        assert!(registry.get(INTENSITY_COLOR_MAP).is_some());
        assert!(registry.get("viridis").is_some());
        assert!(registry.get("nonexistent").is_none());
        assert_eq!(registry.names().count(), 6);
    }

    #[test]
    fn test_registry_fallback() {
        let registry = ColorMapRegistry::new();
        assert_eq!(registry.get_or_intensity("viridis").name, "viridis");
        assert_eq!(
            registry.get_or_intensity("nonexistent").name,
            INTENSITY_COLOR_MAP
        );
    }
}
