//! Synthetic street scene for exercising the pipeline without sensor data.
//!
//! The scene is a 40 m stretch of road with lane markings, a sidewalk, five
//! lamp posts, a parked car, a pedestrian and a tree. Every surface has its
//! own reflectivity so the intensity ramp shows the objects apart. `y` is up.

use std::f32::consts::TAU;
use std::path::Path;

use binscope_core::{encode, Point, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

mod reflectivity {
    pub const ROAD: f32 = 0.15;
    pub const LANE_MARKING: f32 = 0.9;
    pub const SIDEWALK: f32 = 0.35;
    pub const LAMP_POST: f32 = 0.5;
    pub const LAMP_HEAD: f32 = 1.0;
    pub const CAR_BODY: f32 = 0.7;
    pub const CAR_WINDOW: f32 = 0.05;
    pub const TIRE: f32 = 0.1;
    pub const RIM: f32 = 0.8;
    pub const HEADLIGHT: f32 = 0.95;
    pub const TAILLIGHT: f32 = 0.6;
    pub const PERSON: f32 = 0.4;
    pub const TRUNK: f32 = 0.3;
    pub const CANOPY: f32 = 0.25;
}

/// Height of one synthetic laser ring, in meters.
const RING_HEIGHT: f32 = 0.25;

/// Seconds between consecutive synthetic returns.
const TIME_STEP: f32 = 1.0e-5;

/// Settings for [`street_scene`].
#[derive(Debug, Clone, PartialEq)]
pub struct MockSceneConfig {
    /// Seed for intensity noise. `None` disables noise.
    pub seed: Option<u64>,
    /// Maximum absolute intensity noise.
    pub jitter: f32,
}

impl Default for MockSceneConfig {
    fn default() -> Self {
        Self {
            seed: None,
            jitter: 0.05,
        }
    }
}

impl MockSceneConfig {
    /// Enables seeded intensity noise.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the noise amplitude.
    pub fn with_jitter(mut self, jitter: f32) -> Self {
        self.jitter = jitter;
        self
    }
}

/// Samples `start, start + step, ...` up to and including `end`.
fn steps(start: f32, end: f32, step: f32) -> impl Iterator<Item = f32> + Clone {
    let count = ((end - start) / step + 1.0e-4).floor() as usize + 1;
    (0..count).map(move |i| start + i as f32 * step)
}

/// Samples angles in `[0, 2π)`.
fn angles(step: f32) -> impl Iterator<Item = f32> + Clone {
    let count = (TAU / step).ceil() as usize;
    (0..count).map(move |i| i as f32 * step)
}

#[derive(Default)]
struct SceneBuilder {
    points: Vec<Point>,
}

impl SceneBuilder {
    fn push(&mut self, x: f32, y: f32, z: f32, intensity: f32) {
        self.points.push(Point::new(x, y, z, intensity));
    }

    fn street(&mut self) {
        for x in steps(-20.0, 20.0, 0.3) {
            for z in steps(-3.0, 3.0, 0.3) {
                self.push(x, 0.0, z, reflectivity::ROAD);
            }
            for z in steps(3.0, 6.0, 0.3) {
                self.push(x, 0.1, z, reflectivity::SIDEWALK);
            }
        }
        for x in steps(-20.0, 20.0, 1.0) {
            self.push(x, 0.01, -0.1, reflectivity::LANE_MARKING);
        }
        for post_x in [-10.0, -5.0, 0.0, 5.0, 10.0] {
            self.lamp_post(post_x, 4.0);
        }
    }

    fn lamp_post(&mut self, px: f32, pz: f32) {
        for y in steps(0.0, 4.0, 0.1) {
            for angle in angles(0.1) {
                for r in steps(0.0, 0.1, 0.05) {
                    self.push(
                        px + r * angle.cos(),
                        y,
                        pz + r * angle.sin(),
                        reflectivity::LAMP_POST,
                    );
                }
            }
        }
        for angle in angles(0.1) {
            for r in steps(0.0, 0.3, 0.05) {
                self.push(
                    px + r * angle.cos(),
                    4.0,
                    pz + r * angle.sin(),
                    reflectivity::LAMP_HEAD,
                );
            }
        }
    }

    fn car(&mut self, bx: f32, by: f32, bz: f32) {
        const LENGTH: f32 = 4.5;
        const WIDTH: f32 = 2.0;
        const HEIGHT: f32 = 1.5;
        const D: f32 = 0.1;

        // Body shell: floor, roof, and the side panels around the window band.
        for x in steps(0.0, LENGTH, D) {
            for y in steps(0.0, HEIGHT, D) {
                for z in steps(0.0, WIDTH, D) {
                    let window_band = y >= HEIGHT * 0.3 && y <= HEIGHT * 0.7;
                    let side = z < WIDTH * 0.2 || z > WIDTH * 0.8;
                    if !window_band || side {
                        self.push(bx + x, by + y, bz + z, reflectivity::CAR_BODY);
                    }
                }
            }
        }

        for x in steps(LENGTH * 0.2, LENGTH * 0.8, D) {
            for y in steps(HEIGHT * 0.3, HEIGHT * 0.7, D) {
                for z in steps(WIDTH * 0.2, WIDTH * 0.8, D) {
                    self.push(bx + x, by + y, bz + z, reflectivity::CAR_WINDOW);
                }
            }
        }

        for (wx, wz) in [
            (LENGTH * 0.2, WIDTH * 0.2),
            (LENGTH * 0.2, WIDTH * 0.8),
            (LENGTH * 0.8, WIDTH * 0.2),
            (LENGTH * 0.8, WIDTH * 0.8),
        ] {
            for angle in angles(D * 2.0) {
                for y in steps(0.0, 0.3, D) {
                    for r in steps(0.25, 0.35, D) {
                        self.push(
                            bx + wx + r * angle.cos(),
                            by + y,
                            bz + wz + r * angle.sin(),
                            reflectivity::TIRE,
                        );
                    }
                    for r in steps(0.0, 0.25, D).filter(|r| r * r + y * y <= 0.25 * 0.25) {
                        self.push(
                            bx + wx + r * angle.cos(),
                            by + y,
                            bz + wz + r * angle.sin(),
                            reflectivity::RIM,
                        );
                    }
                }
            }
        }

        for y in steps(HEIGHT * 0.4, HEIGHT * 0.6, D) {
            for z in steps(WIDTH * 0.2, WIDTH * 0.4, D) {
                for x in steps(LENGTH * 0.95, LENGTH, D) {
                    self.push(bx + x, by + y, bz + z, reflectivity::HEADLIGHT);
                }
                for x in steps(0.0, LENGTH * 0.05, D) {
                    self.push(bx + x, by + y, bz + z, reflectivity::TAILLIGHT);
                }
            }
        }
    }

    fn person(&mut self, bx: f32, by: f32, bz: f32) {
        const HEIGHT: f32 = 1.7;
        const BODY_WIDTH: f32 = 0.5;
        const HEAD_RADIUS: f32 = 0.2;
        const D: f32 = 0.1;
        let half = BODY_WIDTH / 2.0;

        for y in steps(0.0, HEIGHT * 0.6, D) {
            for z in steps(0.0, BODY_WIDTH, D) {
                for x in steps(0.0, BODY_WIDTH, D) {
                    if (x - half).hypot(z - half) <= half {
                        self.push(bx + x, by + y, bz + z, reflectivity::PERSON);
                    }
                }
            }
        }

        let phis: Vec<f32> = steps(0.0, std::f32::consts::PI - D * 2.0, D * 2.0).collect();
        for angle in angles(D * 2.0) {
            for &phi in &phis {
                for r in steps(0.0, HEAD_RADIUS, D) {
                    self.push(
                        bx + half + r * phi.sin() * angle.cos(),
                        by + HEIGHT * 0.6 + r * phi.cos(),
                        bz + half + r * phi.sin() * angle.sin(),
                        reflectivity::PERSON,
                    );
                }
            }
        }
    }

    fn tree(&mut self, bx: f32, by: f32, bz: f32) {
        const TRUNK_HEIGHT: f32 = 3.0;
        const TRUNK_RADIUS: f32 = 0.3;
        const TREE_HEIGHT: f32 = 6.0;
        const CANOPY_RADIUS: f32 = 2.0;
        const D: f32 = 0.15;

        for y in steps(0.0, TRUNK_HEIGHT, D) {
            for angle in angles(D * 2.0) {
                for r in steps(0.0, TRUNK_RADIUS, D) {
                    self.push(
                        bx + r * angle.cos(),
                        by + y,
                        bz + r * angle.sin(),
                        reflectivity::TRUNK,
                    );
                }
            }
        }

        // Cone narrowing from the top of the trunk to the tip.
        for y in steps(TRUNK_HEIGHT, TREE_HEIGHT, D) {
            let radius = CANOPY_RADIUS * (1.0 - (y - TRUNK_HEIGHT) / (TREE_HEIGHT - TRUNK_HEIGHT));
            for angle in angles(D * 2.0) {
                for r in steps(0.0, radius.max(0.0), D) {
                    self.push(
                        bx + r * angle.cos(),
                        by + y,
                        bz + r * angle.sin(),
                        reflectivity::CANOPY,
                    );
                }
            }
        }
    }

    /// Assigns timestamps, rings and optional intensity noise.
    fn finish(mut self, config: &MockSceneConfig) -> Vec<Point> {
        let mut rng = config.seed.map(StdRng::seed_from_u64);
        let jitter = config.jitter.abs();

        for (i, p) in self.points.iter_mut().enumerate() {
            p.timestamp = Some(i as f32 * TIME_STEP);
            p.ring = Some((p.y.max(0.0) / RING_HEIGHT) as u16);
            if let Some(rng) = rng.as_mut() {
                let noise: f32 = rng.gen_range(-jitter..=jitter);
                p.intensity = (p.intensity + noise).clamp(0.0, 1.0);
            }
        }
        self.points
    }
}

/// Builds the synthetic street scene.
pub fn street_scene(config: &MockSceneConfig) -> Vec<Point> {
    let mut scene = SceneBuilder::default();
    scene.street();
    scene.car(-5.0, 0.0, 0.0);
    scene.person(2.0, 0.0, 4.0);
    scene.tree(8.0, 0.0, -2.0);
    log::info!("generated mock street scene with {} points", scene.points.len());
    scene.finish(config)
}

/// Encodes the scene with `stride`-byte records.
pub fn scene_bytes(config: &MockSceneConfig, stride: usize) -> Result<Vec<u8>> {
    encode(&street_scene(config), stride)
}

/// Writes `points` to `path` as a `.bin` dump, returning the byte count.
pub fn write_scene(path: impl AsRef<Path>, points: &[Point], stride: usize) -> Result<usize> {
    let bytes = encode(points, stride)?;
    std::fs::write(path.as_ref(), &bytes)?;
    log::info!(
        "wrote {} points ({} bytes) to {}",
        points.len(),
        bytes.len(),
        path.as_ref().display()
    );
    Ok(bytes.len())
}
