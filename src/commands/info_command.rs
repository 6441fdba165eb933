//! Frame description command
//!
//! Prints the resolution snapshot of the frame, or the geographic position
//! of the image corners when asked to.

use log::info;

use crate::commands::command_traits::Command;
use crate::coordinate::ReferenceFrame;
use crate::errors::GeoResult;
use crate::utils::format_utils::{render, OutputFormat, Record};

/// Command describing the reference frame itself
pub struct InfoCommand {
    frame: ReferenceFrame,
    corners: bool,
    format: OutputFormat,
}

impl InfoCommand {
    pub fn new(frame: ReferenceFrame, corners: bool, format: OutputFormat) -> Self {
        InfoCommand { frame, corners, format }
    }
}

impl Command for InfoCommand {
    fn output(&self) -> GeoResult<String> {
        if self.corners {
            info!("Listing image corners");
            let corners = self.frame.corners();
            let records: Vec<Record<'_>> = corners.iter().map(Record::Corner).collect();
            return Ok(render(&records, self.format));
        }

        info!("Describing reference frame");
        let info = self.frame.resolution_info();
        Ok(render(&[Record::Info(&info)], self.format))
    }
}
