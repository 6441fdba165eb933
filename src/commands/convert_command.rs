//! Single-point conversion command
//!
//! Converts one pixel to a geographic point or one geographic point to a
//! pixel against the frame described on the command line.

use log::info;

use crate::commands::command_traits::Command;
use crate::coordinate::{GeoPoint, PixelPoint, ReferenceFrame};
use crate::errors::{GeoError, GeoResult};
use crate::utils::format_utils::{render, OutputFormat, Record};

/// Direction of a single conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conversion {
    PixelToGeo(PixelPoint),
    GeoToPixel(GeoPoint),
}

/// Command converting one point between pixel and geographic space
pub struct ConvertCommand {
    frame: ReferenceFrame,
    conversion: Conversion,
    format: OutputFormat,
}

impl ConvertCommand {
    pub fn new(frame: ReferenceFrame, conversion: Conversion, format: OutputFormat) -> Self {
        ConvertCommand { frame, conversion, format }
    }
}

impl Command for ConvertCommand {
    fn output(&self) -> GeoResult<String> {
        let record = match self.conversion {
            Conversion::PixelToGeo(pixel) => {
                info!("Converting pixel {} to latitude/longitude", pixel);
                Record::PixelToGeo { pixel, geo: self.frame.pixel_to_geo(pixel) }
            },
            Conversion::GeoToPixel(geo) => {
                info!("Converting {} to pixel coordinates", geo);
                let pixel = self.frame.geo_to_pixel(geo);
                if !pixel.x.is_finite() || !pixel.y.is_finite() {
                    return Err(GeoError::NumericOverflow(format!(
                        "{} has no finite pixel position in this frame", geo)));
                }
                Record::GeoToPixel { geo, pixel }
            },
        };

        Ok(render(&[record], self.format))
    }
}
