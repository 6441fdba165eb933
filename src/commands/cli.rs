//! Command-line argument definitions

use clap::{Arg, ArgAction, ArgGroup, Command as ClapCommand};

/// Build the argument parser for the `tilegeo` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("tilegeo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between pixel and geographic coordinates of Web Mercator map tiles")
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file with the frame parameters")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("lat")
                .long("lat")
                .help("Latitude of the image center in degrees")
                .value_name("DEGREES")
                .allow_negative_numbers(true)
                .required(false),
        )
        .arg(
            Arg::new("lng")
                .long("lng")
                .help("Longitude of the image center in degrees")
                .value_name("DEGREES")
                .allow_negative_numbers(true)
                .required(false),
        )
        .arg(
            Arg::new("zoom")
                .short('z')
                .long("zoom")
                .help("Tile zoom level (default 19)")
                .value_name("LEVEL")
                .required(false),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .help("Image width in pixels (default 640)")
                .value_name("PIXELS")
                .required(false),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .help("Image height in pixels (default 640)")
                .value_name("PIXELS")
                .required(false),
        )
        .arg(
            Arg::new("image")
                .long("image")
                .help("Image file whose dimensions set the width and height")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("resolution")
                .short('r')
                .long("resolution")
                .help("Meters per pixel, overriding the zoom-derived value")
                .value_name("METERS")
                .required(false),
        )
        .arg(
            Arg::new("pixel")
                .short('p')
                .long("pixel")
                .help("Convert the pixel 'x,y' to latitude/longitude")
                .value_name("X,Y")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("geo")
                .short('g')
                .long("geo")
                .help("Convert the point 'lat,lng' to pixel coordinates")
                .value_name("LAT,LNG")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("distance")
                .short('d')
                .long("distance")
                .help("Distance in meters of the pixel 'x,y' from the image center")
                .value_name("X,Y")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("corners")
                .long("corners")
                .help("Print the geographic position of the image corners")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("batch")
                .short('b')
                .long("batch")
                .help("Convert every 'x,y' line of FILE to latitude/longitude")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("detections")
                .long("detections")
                .help("Locate normalized 'x_min,y_min,x_max,y_max[,score]' boxes listed in FILE")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Output format (text, csv, json)")
                .value_name("FORMAT")
                .default_value("text")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .group(
            ArgGroup::new("operation")
                .args(["pixel", "geo", "distance", "corners", "batch", "detections"])
                .multiple(false),
        )
}
