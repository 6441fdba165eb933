//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod cli;
pub mod command_traits;
pub mod convert_command;
pub mod distance_command;
pub mod info_command;
pub mod batch_command;

pub use cli::build_cli;
pub use command_traits::{Command, CommandFactory};
pub use convert_command::{Conversion, ConvertCommand};
pub use distance_command::DistanceCommand;
pub use info_command::InfoCommand;
pub use batch_command::{BatchCommand, BatchInput};

use std::str::FromStr;
use clap::ArgMatches;
use log::debug;

use crate::config::FrameConfig;
use crate::errors::{GeoError, GeoResult};
use crate::utils::coordinate_utils::{parse_geo, parse_pixel};
use crate::utils::format_utils::OutputFormat;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments, builds the reference
/// frame they describe and creates the appropriate command for execution.
pub struct TilegeoCommandFactory;

impl TilegeoCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        TilegeoCommandFactory
    }
}

impl Default for TilegeoCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for TilegeoCommandFactory {
    fn create_command(&self, args: &ArgMatches) -> GeoResult<Box<dyn Command>> {
        let frame = frame_config_from_args(args)?.build_frame()?;
        let format = match args.get_one::<String>("format") {
            Some(name) => name.parse::<OutputFormat>()?,
            None => OutputFormat::Text,
        };

        if let Some(text) = args.get_one::<String>("pixel") {
            Ok(Box::new(ConvertCommand::new(frame, Conversion::PixelToGeo(parse_pixel(text)?), format)))
        } else if let Some(text) = args.get_one::<String>("geo") {
            Ok(Box::new(ConvertCommand::new(frame, Conversion::GeoToPixel(parse_geo(text)?), format)))
        } else if let Some(text) = args.get_one::<String>("distance") {
            Ok(Box::new(DistanceCommand::new(frame, parse_pixel(text)?, format)))
        } else if let Some(path) = args.get_one::<String>("batch") {
            Ok(Box::new(BatchCommand::new(frame, BatchInput::Pixels(path.clone()), format)))
        } else if let Some(path) = args.get_one::<String>("detections") {
            Ok(Box::new(BatchCommand::new(frame, BatchInput::Detections(path.clone()), format)))
        } else {
            // Default to describing the frame
            Ok(Box::new(InfoCommand::new(frame, args.get_flag("corners"), format)))
        }
    }
}

/// Assemble the frame configuration: file first, then image size, then flags
pub fn frame_config_from_args(args: &ArgMatches) -> GeoResult<FrameConfig> {
    let mut config = match args.get_one::<String>("config") {
        Some(path) => FrameConfig::from_file(path)?,
        None => FrameConfig::default(),
    };

    if let Some(path) = args.get_one::<String>("image") {
        config = config.with_image_dimensions(path)?;
    }

    if let Some(lat) = parse_arg::<f64>(args, "lat")? {
        config.center_lat = Some(lat);
    }
    if let Some(lng) = parse_arg::<f64>(args, "lng")? {
        config.center_lng = Some(lng);
    }
    if let Some(zoom) = parse_arg::<u8>(args, "zoom")? {
        config.zoom = zoom;
    }
    if let Some(width) = parse_arg::<u32>(args, "width")? {
        config.width = width;
    }
    if let Some(height) = parse_arg::<u32>(args, "height")? {
        config.height = height;
    }
    if let Some(resolution) = parse_arg::<f64>(args, "resolution")? {
        config.resolution = Some(resolution);
    }

    debug!("Frame configuration from arguments: {:?}", config);
    Ok(config)
}

fn parse_arg<T>(args: &ArgMatches, name: &str) -> GeoResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    args.get_one::<String>(name)
        .map(|value| value.trim().parse::<T>()
            .map_err(|e| GeoError::InvalidParameter(format!("invalid --{} '{}': {}", name, value, e))))
        .transpose()
}
