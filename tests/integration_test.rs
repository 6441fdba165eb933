//! Integration tests for the georeferencing API and the command front end

extern crate std;

use std::fs;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use tilegeo::api::{convert_coordinates_to_pixel, convert_pixel_to_coordinates, DEFAULT_RESOLUTION};
use tilegeo::commands::{build_cli, CommandFactory, TilegeoCommandFactory};
use tilegeo::{GeoError, GeoPoint, PixelPoint, TileGeo};

const CENTER_LAT: f64 = 41.552013;
const CENTER_LNG: f64 = -70.601921;

fn cape_cod() -> TileGeo {
    TileGeo::new(CENTER_LAT, CENTER_LNG, 19, 640, 640, Some(DEFAULT_RESOLUTION)).unwrap()
}

fn run(args: &[&str]) -> Result<String, GeoError> {
    let mut argv = vec!["tilegeo"];
    argv.extend_from_slice(args);
    let matches = build_cli().try_get_matches_from(argv).unwrap();
    TilegeoCommandFactory::new().create_command(&matches)?.output()
}

fn temp_file(name: &str, content: &str) -> String {
    let path = std::env::temp_dir().join(format!("tilegeo-{}-{}", std::process::id(), name));
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_complete_conversion_workflow() {
    let converter = cape_cod();

    let info = converter.resolution_info();
    std::assert_eq!(info.meters_per_pixel, 0.298);
    std::assert_eq!(info.zoom, 19);

    let geo = converter.pixel_to_lat_lng(514.0, 452.0);
    std::assert!(geo.lat < CENTER_LAT && geo.lng > CENTER_LNG);

    let back = converter.lat_lng_to_pixel(geo.lat, geo.lng);
    assert_abs_diff_eq!(back.x, 514.0, epsilon = 1e-6);
    assert_abs_diff_eq!(back.y, 452.0, epsilon = 1e-6);

    let distance = converter.distance_from_center(514.0, 452.0);
    assert_relative_eq!(distance.horizontal, 57.812, epsilon = 1e-9);
    assert_relative_eq!(distance.vertical, 39.336, epsilon = 1e-9);
    assert_abs_diff_eq!(distance.total, 69.925, epsilon = 1e-3);
}

#[test]
fn test_one_shot_helpers_agree_with_frame() {
    let center = GeoPoint::new(CENTER_LAT, CENTER_LNG);
    let geo = convert_pixel_to_coordinates(PixelPoint::new(514.0, 452.0), center, 19, 640, 640, Some(0.298)).unwrap();
    std::assert_eq!(geo, cape_cod().pixel_to_lat_lng(514.0, 452.0));

    let pixel = convert_coordinates_to_pixel(geo, center, 19, 640, 640, Some(0.298)).unwrap();
    assert_abs_diff_eq!(pixel.x, 514.0, epsilon = 1e-6);
    assert_abs_diff_eq!(pixel.y, 452.0, epsilon = 1e-6);

    std::assert!(convert_pixel_to_coordinates(PixelPoint::new(0.0, 0.0), center, 19, 0, 640, None).is_err());
}

#[test]
fn test_locate_detection() {
    let converter = cape_cod();
    let located = converter.locate_detection([0.25, 0.5, 0.3, 0.52], Some(0.9)).unwrap();
    assert_relative_eq!(located.length_meters, 32.0 * 0.298, epsilon = 1e-9);
    assert_relative_eq!(located.beam_meters, 12.8 * 0.298, epsilon = 1e-9);
    std::assert_eq!(located.pixel_box.score, Some(0.9));

    std::assert!(converter.locate_detection([0.5, 0.5, 0.4, 0.6], None).is_err());
}

#[test]
fn test_pole_frame_rejected() {
    let result = TileGeo::new(90.0, 0.0, 19, 640, 640, None);
    std::assert!(matches!(result, Err(GeoError::DomainError(_))));
}

#[test]
fn test_cli_pixel_to_geo() {
    let out = run(&["--lat", "41.552013", "--lng", "-70.601921", "-r", "0.298",
                    "--pixel", "514,452", "--format", "csv"]).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    std::assert_eq!(lines[0], "x,y,lat,lng");
    std::assert!(lines[1].starts_with("514,452,41.55174856,-70.60140167"), "{}", lines[1]);
}

#[test]
fn test_cli_geo_to_pixel_and_distance() {
    let out = run(&["--lat", "41.552013", "--lng", "-70.601921", "-r", "0.298",
                    "--geo", "41.552013,-70.601921", "--format", "json"]).unwrap();
    std::assert!(out.contains("\"x\": 320.0000, \"y\": 320.0000"), "{}", out);

    let out = run(&["--lat", "41.552013", "--lng", "-70.601921", "-r", "0.298",
                    "--distance", "514,452"]).unwrap();
    std::assert!(out.contains("69.9m"), "{}", out);
}

#[test]
fn test_cli_info_and_corners() {
    let out = run(&["--lat", "0", "--lng", "0", "--zoom", "0", "--width", "256", "--height", "256",
                    "--format", "json"]).unwrap();
    std::assert!(out.contains("\"meters_per_pixel\": 156543.03392"), "{}", out);
    std::assert!(out.contains("\"custom_resolution\": false"), "{}", out);

    let out = run(&["--lat", "41.552013", "--lng", "-70.601921", "--corners", "--format", "csv"]).unwrap();
    std::assert_eq!(out.lines().count(), 6);
    std::assert!(out.lines().nth(1).unwrap().starts_with("top-left,0,0,"));
}

#[test]
fn test_cli_config_file_with_flag_override() {
    let config = temp_file("frame.toml", "[frame]\ncenter_lat = 41.552013\ncenter_lng = -70.601921\nresolution = 1.0\n");
    let out = run(&["--config", &config, "-r", "0.298", "--format", "csv"]).unwrap();
    std::assert!(out.lines().nth(1).unwrap().starts_with("0.298,19,41.552013,-70.601921,640,640,true"), "{}", out);
    fs::remove_file(config).ok();
}

#[test]
fn test_cli_batch_pixels() {
    let batch = temp_file("pixels.txt", "# detections\n320,320\n514 452\n\n0,0\n");
    let out = run(&["--lat", "41.552013", "--lng", "-70.601921", "-r", "0.298",
                    "--batch", &batch, "--format", "csv"]).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    std::assert_eq!(lines.len(), 4);
    std::assert_eq!(lines[1], "320,320,41.55201300,-70.60192100");
    fs::remove_file(batch).ok();
}

#[test]
fn test_cli_batch_reports_bad_entry() {
    let batch = temp_file("bad.txt", "320,320\nnot a pixel\n");
    let result = run(&["--lat", "41.552013", "--lng", "-70.601921", "--batch", &batch]);
    match result {
        Err(GeoError::InvalidParameter(msg)) => std::assert!(msg.starts_with("entry 2"), "{}", msg),
        other => panic!("unexpected result: {:?}", other),
    }
    fs::remove_file(batch).ok();
}

#[test]
fn test_cli_detections() {
    let detections = temp_file("detections.txt", "0.75,0.68,0.856,0.72,0.91\n0.1,0.1,0.2,0.15\n");
    let out = run(&["--lat", "41.552013", "--lng", "-70.601921", "-r", "0.298",
                    "--detections", &detections, "--format", "json"]).unwrap();
    std::assert!(out.starts_with('['));
    std::assert!(out.contains("\"score\": 0.91"));
    std::assert!(out.contains("\"score\": null"));
    fs::remove_file(detections).ok();
}

#[test]
fn test_cli_missing_center() {
    let result = run(&["--pixel", "1,1"]);
    std::assert!(matches!(result, Err(GeoError::InvalidParameter(_))));
}

#[test]
fn test_cli_unknown_format() {
    let result = run(&["--lat", "1", "--lng", "1", "--format", "yaml"]);
    std::assert!(matches!(result, Err(GeoError::InvalidParameter(_))));
}

#[test]
fn test_cli_geo_at_pole_is_rejected() {
    for point in ["-90,0", "90,0"] {
        let result = run(&["--lat", "41.5", "--lng", "-70.6", "-r", "0.298",
                           "--geo", point, "--format", "json"]);
        std::assert!(matches!(result, Err(GeoError::InvalidParameter(_))), "{}", point);
    }
}

#[test]
fn test_cli_operations_are_exclusive() {
    let result = build_cli().try_get_matches_from([
        "tilegeo", "--lat", "41.5", "--lng", "-70.6", "--pixel", "1,1", "--geo", "41.5,-70.6",
    ]);
    std::assert!(result.is_err());

    let result = build_cli().try_get_matches_from([
        "tilegeo", "--lat", "41.5", "--lng", "-70.6", "--distance", "1,1", "--corners",
    ]);
    std::assert!(result.is_err());
}

#[test]
fn test_default_tile_converter() {
    let converter = TileGeo::with_defaults(CENTER_LAT, CENTER_LNG).unwrap();
    let info = converter.resolution_info();
    std::assert_eq!(info.meters_per_pixel, DEFAULT_RESOLUTION);
    std::assert_eq!((info.width, info.height, info.zoom), (640, 640, 19));
    std::assert_eq!(converter.pixel_to_lat_lng(514.0, 452.0), cape_cod().pixel_to_lat_lng(514.0, 452.0));

    // No resolution means the zoom-derived value
    let center = GeoPoint::new(CENTER_LAT, CENTER_LNG);
    let derived = convert_pixel_to_coordinates(PixelPoint::new(514.0, 452.0), center, 19, 640, 640, None).unwrap();
    let explicit = convert_pixel_to_coordinates(
        PixelPoint::new(514.0, 452.0), center, 19, 640, 640,
        Some(tilegeo::coordinate::ground_resolution(CENTER_LAT, 19))).unwrap();
    std::assert_eq!(derived, explicit);
}

#[test]
fn test_convert_command_refuses_infinite_pixel() {
    use tilegeo::commands::{Command, Conversion, ConvertCommand};
    use tilegeo::utils::format_utils::OutputFormat;

    let frame = cape_cod().frame().clone();
    let command = ConvertCommand::new(frame, Conversion::GeoToPixel(GeoPoint::new(-90.0, 0.0)), OutputFormat::Json);
    std::assert!(matches!(command.output(), Err(GeoError::NumericOverflow(_))));
}
