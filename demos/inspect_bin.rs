//! Inspect a raw LiDAR `.bin` dump.
//!
//! Prints the detected record layout, the per-candidate remainder table,
//! extents, the intensity range and the initial camera pose.
//!
//! Run with: cargo run --example `inspect_bin` -- <file.bin> [options.json]

use binscope::{init_logging, load_file, LoadOptions};

fn main() {
    init_logging();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: inspect_bin <file.bin> [options.json]");
        std::process::exit(2);
    };

    let options = match args.next() {
        Some(options_path) => match LoadOptions::from_json_file(&options_path) {
            Ok(options) => options,
            Err(e) => {
                eprintln!("failed to read {options_path}: {e}");
                std::process::exit(1);
            }
        },
        None => LoadOptions::default(),
    };

    let cloud = match load_file(&path, &options) {
        Ok(cloud) => cloud,
        Err(e) => {
            eprintln!("{path}: {e}");
            std::process::exit(1);
        }
    };

    println!("{path}");
    println!("{}", cloud.summary());
    println!("{}", cloud.detection.diagnostics);
    if cloud.skipped > 0 {
        println!("skipped {} unreadable records", cloud.skipped);
    }

    let bounds = cloud.bounds();
    if !bounds.is_empty() {
        println!("bounds: {} .. {}", bounds.min, bounds.max);
        println!("extent: {}", bounds.extent());
    }
    if let Some(range) = cloud.intensity_range() {
        println!("intensity: {} .. {}", range.min, range.max);
    }
    println!(
        "camera: eye {} looking at {} (near {}, far {})",
        cloud.view.position, cloud.view.target, cloud.view.near, cloud.view.far
    );
}
