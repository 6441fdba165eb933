//! Batch conversion command
//!
//! Reads a text file with one entry per line (blank lines and `#` comments
//! are skipped) and converts every entry against the same frame.

use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::coordinate::{LocatedBox, PixelBox, ReferenceFrame};
use crate::errors::{GeoError, GeoResult};
use crate::utils::coordinate_utils::{parse_detection, parse_pixel, read_data_lines};
use crate::utils::format_utils::{render, OutputFormat, Record};
use crate::utils::progress::ProgressTracker;

/// What the batch file contains
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchInput {
    /// `x,y` pixel positions
    Pixels(String),
    /// `x_min,y_min,x_max,y_max[,score]` boxes in fractions of the image size
    Detections(String),
}

/// Command converting every entry of a file
pub struct BatchCommand {
    frame: ReferenceFrame,
    input: BatchInput,
    format: OutputFormat,
}

impl BatchCommand {
    pub fn new(frame: ReferenceFrame, input: BatchInput, format: OutputFormat) -> Self {
        BatchCommand { frame, input, format }
    }

    fn convert_pixels(&self, lines: &[String]) -> GeoResult<String> {
        let progress = ProgressTracker::new(lines.len() as u64, "Converting pixels");
        let mut records = Vec::with_capacity(lines.len());

        for (index, line) in lines.iter().enumerate() {
            let pixel = parse_pixel(line).map_err(|e| entry_error(index, e))?;
            records.push(Record::PixelToGeo { pixel, geo: self.frame.pixel_to_geo(pixel) });
            progress.increment(1);
        }

        progress.finish();
        Ok(render(&records, self.format))
    }

    fn locate_detections(&self, lines: &[String]) -> GeoResult<String> {
        let progress = ProgressTracker::new(lines.len() as u64, "Locating detections");
        let mut located: Vec<LocatedBox> = Vec::with_capacity(lines.len());

        for (index, line) in lines.iter().enumerate() {
            let (normalized, score) = parse_detection(line).map_err(|e| entry_error(index, e))?;
            let mut pixel_box = PixelBox::from_normalized(normalized, self.frame.width(), self.frame.height())
                .map_err(|e| entry_error(index, e))?;
            if let Some(score) = score {
                pixel_box = pixel_box.with_score(score);
            }
            located.push(self.frame.locate_box(&pixel_box));
            progress.increment(1);
        }

        progress.finish();
        let records: Vec<Record<'_>> = located.iter().map(Record::Detection).collect();
        Ok(render(&records, self.format))
    }
}

impl Command for BatchCommand {
    fn output(&self) -> GeoResult<String> {
        let path = match &self.input {
            BatchInput::Pixels(path) | BatchInput::Detections(path) => path,
        };
        let lines = read_data_lines(path)?;
        info!("Processing {} entries from {}", lines.len(), path);

        let output = match self.input {
            BatchInput::Pixels(_) => self.convert_pixels(&lines)?,
            BatchInput::Detections(_) => self.locate_detections(&lines)?,
        };

        debug!("Batch of {} entries complete", lines.len());
        Ok(output)
    }
}

fn entry_error(index: usize, error: GeoError) -> GeoError {
    match error {
        GeoError::InvalidParameter(msg) => GeoError::InvalidParameter(format!("entry {}: {}", index + 1, msg)),
        other => other,
    }
}
