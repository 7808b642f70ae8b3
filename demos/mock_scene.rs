//! Generate a synthetic street scene and write it as a `.bin` dump.
//!
//! The scene contains a road with lane markings, a sidewalk, lamp posts,
//! a parked car, a pedestrian and a tree, each with its own reflectivity.
//! The written file is loaded back to show what detection makes of it.
//!
//! Run with: cargo run --example `mock_scene` -- [out.bin] [stride] [seed]

use binscope::{init_logging, load_file, mock, LoadOptions, MockSceneConfig};

fn main() {
    init_logging();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "mock_scene.bin".to_string());
    let stride: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(16);
    let mut config = MockSceneConfig::default();
    if let Some(seed) = args.next().and_then(|s| s.parse().ok()) {
        config = config.with_seed(seed);
    }

    let points = mock::street_scene(&config);
    if let Err(e) = mock::write_scene(&path, &points, stride) {
        eprintln!("failed to write {path}: {e}");
        std::process::exit(1);
    }

    // Load it back twice: once as detection sees it, once with the known stride
    for options in [
        LoadOptions::default(),
        LoadOptions::default().with_stride_override(stride),
    ] {
        match load_file(&path, &options) {
            Ok(cloud) => println!("{}", cloud.summary()),
            Err(e) => println!("{e}"),
        }
    }
}
