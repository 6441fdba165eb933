//! Distance-from-center command

use log::info;

use crate::commands::command_traits::Command;
use crate::coordinate::{PixelPoint, ReferenceFrame};
use crate::errors::GeoResult;
use crate::utils::format_utils::{render, OutputFormat, Record};

/// Command reporting how far a pixel lies from the image center
pub struct DistanceCommand {
    frame: ReferenceFrame,
    pixel: PixelPoint,
    format: OutputFormat,
}

impl DistanceCommand {
    pub fn new(frame: ReferenceFrame, pixel: PixelPoint, format: OutputFormat) -> Self {
        DistanceCommand { frame, pixel, format }
    }
}

impl Command for DistanceCommand {
    fn output(&self) -> GeoResult<String> {
        info!("Measuring distance of pixel {} from the image center", self.pixel);
        let distance = self.frame.distance_from_center(self.pixel);
        Ok(render(&[Record::Distance { pixel: self.pixel, distance }], self.format))
    }
}
