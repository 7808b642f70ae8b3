//! Integration tests for the binscope load pipeline.
//!
//! These run the public API end to end: synthetic buffers are encoded,
//! detected, decoded, colored and packed the same way a viewer would.

use binscope::*;

fn assert_close(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-5, "{a} != {b}");
}

#[test]
fn test_round_trip_through_buffers() {
    let points = vec![
        Point::new(1.5, -2.25, 3.0, 0.1),
        Point::new(-4.0, 0.5, 12.75, 0.7),
        Point::new(0.0, 100.0, -0.125, 0.4),
    ];

    let bytes = encode(&points, 16).expect("encode failed");
    assert_eq!(bytes.len(), 48);

    let decoded = decode(&bytes, 16);
    assert_eq!(decoded.len(), 3);
    assert_eq!(decoded.skipped, 0);

    let colors = colorize(&decoded.points);
    let buffers = RenderBuffers::build(&decoded.points, &colors);
    assert_eq!(buffers.num_points(), 3);

    for (i, original) in points.iter().enumerate() {
        let got = &decoded.points[i];
        assert_close(got.x, original.x);
        assert_close(got.y, original.y);
        assert_close(got.z, original.z);
        assert_close(got.intensity, original.intensity);

        let position = buffers.position(i).expect("position missing");
        assert_close(position.x, original.x);
        assert_close(position.y, original.y);
        assert_close(position.z, original.z);
        assert_eq!(buffers.color(i), Some(colors[i]));
    }

    // Lowest and highest intensity land on the ends of the ramp
    assert_eq!(colors[0], Vec3::ZERO);
    assert_eq!(colors[1], Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn test_empty_input() {
    let detection = detect(0).expect("empty input should detect");
    assert_eq!(detection.stride_bytes, 32);
    assert!(!detection.is_approximate);
    assert!(detection.diagnostics.entries.iter().all(|e| e.remainder == 0));

    assert!(decode(&[], detection.stride_bytes).is_empty());

    let cloud = load_bytes(&[], &LoadOptions::default()).expect("empty load failed");
    assert_eq!(cloud.num_points(), 0);
    assert!(cloud.colors.is_empty());
    assert!(cloud.buffers.positions.is_empty());
    assert!(cloud.intensity_range().is_none());
}

#[test]
fn test_last_exact_match_wins() {
    // 72 is a multiple of 12, 18 and 24
    let detection = detect(72).unwrap();
    assert_eq!(detection.stride_bytes, 24);
    assert!(!detection.is_approximate);

    // 1_000_000 divides by 16, 20 and 32
    let detection = detect(1_000_000).unwrap();
    let exact: Vec<usize> = detection
        .diagnostics
        .entries
        .iter()
        .filter(|e| e.is_exact())
        .map(|e| e.stride_bytes)
        .collect();
    assert_eq!(exact, vec![16, 20, 32]);
    assert_eq!(detection.stride_bytes, 32);

    // Operators pick the right layout explicitly
    let options = LoadOptions::default().with_stride_override(16);
    let detection = resolve(1_000_000, &options).unwrap();
    assert_eq!(detection.stride_bytes, 16);
    assert!(detection.overridden);
}

#[test]
fn test_single_short_stride_record() {
    let mut bytes = Vec::new();
    for v in [1.0f32, 2.0, 3.0, 4.0, 5.0] {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    assert_eq!(bytes.len(), 20);

    let report = decode(&bytes, 20);
    assert_eq!(report.len(), 1);
    let p = report.points[0];
    assert_eq!((p.x, p.y, p.z, p.intensity), (1.0, 2.0, 3.0, 4.0));
    assert_eq!(p.timestamp, Some(5.0));
    assert_eq!(p.ring, None);
}

#[test]
fn test_colorize_edge_cases() {
    let single = colorize(&[Point::new(0.0, 0.0, 0.0, 5.0)]);
    assert_eq!(single, vec![Vec3::ZERO]);

    let pair = colorize(&[
        Point::new(0.0, 0.0, 0.0, 0.0),
        Point::new(0.0, 0.0, 0.0, 10.0),
    ]);
    assert_eq!(pair, vec![Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)]);
}

#[test]
fn test_unrecognized_format_reports_table() {
    let err = load_bytes(&[0u8; 7], &LoadOptions::default()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("7 bytes"));
    assert!(message.contains("candidate formats:"));
    match err {
        BinscopeError::UnrecognizedFormat { diagnostics, .. } => {
            assert_eq!(diagnostics.entries.len(), FORMAT_CATALOG.len());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_mock_scene_loads() {
    let config = MockSceneConfig::default().with_seed(42);
    let points = mock::street_scene(&config);

    // A stride override avoids depending on which strides the count happens to divide
    let bytes = encode(&points, 24).unwrap();
    let options = LoadOptions::default().with_stride_override(24);
    let cloud = load_bytes(&bytes, &options).unwrap();

    assert_eq!(cloud.num_points(), points.len());
    assert_eq!(cloud.skipped, 0);
    assert_eq!(cloud.points[0].timestamp, points[0].timestamp);
    assert_eq!(cloud.points[0].ring, points[0].ring);

    let bounds = cloud.bounds();
    assert!(bounds.min.x <= -20.0 + 1e-3);
    assert!(bounds.max.x >= 20.0 - 1e-3);
    assert!(bounds.max.y >= 6.0 - 1e-3);
    assert!(cloud.view.size >= 40.0 - 1e-3);
}

#[test]
fn test_load_file() {
    let points: Vec<Point> = (0..7)
        .map(|i| Point::new(i as f32, 0.0, 0.0, i as f32 * 0.5))
        .collect();

    let path = std::env::temp_dir().join(format!("binscope-test-{}.bin", std::process::id()));
    let written = mock::write_scene(&path, &points, 16).expect("write failed");
    assert_eq!(written, 112);

    let cloud = load_file(&path, &LoadOptions::default());
    let _ = std::fs::remove_file(&path);

    let cloud = cloud.expect("load failed");
    assert_eq!(cloud.detection.stride_bytes, 16);
    assert_eq!(cloud.points, points);
}

#[test]
fn test_options_from_json() {
    let options =
        LoadOptions::from_json_str(r#"{ "stride_override": 16, "max_points": 2 }"#).unwrap();
    let bytes = encode(
        &[
            Point::new(1.0, 1.0, 1.0, 1.0),
            Point::new(2.0, 2.0, 2.0, 2.0),
            Point::new(3.0, 3.0, 3.0, 3.0),
        ],
        16,
    )
    .unwrap();
    let cloud = load_bytes(&bytes, &options).unwrap();
    assert_eq!(cloud.num_points(), 2);
    assert_eq!(cloud.expected, 3);
}
