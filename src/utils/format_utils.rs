//! Rendering of conversion results as text, CSV or JSON
//!
//! Records are written by hand; the output is flat enough that the
//! JSON never needs escaping beyond the fixed labels used here.

use std::str::FromStr;

use crate::coordinate::{CenterDistance, Corner, GeoPoint, LocatedBox, PixelPoint, ResolutionInfo};
use crate::errors::GeoError;

/// Output rendering selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(GeoError::InvalidParameter(format!(
                "unknown output format '{}' (expected text, csv or json)", other))),
        }
    }
}

/// One result line, whatever operation produced it
#[derive(Debug, Clone, Copy)]
pub enum Record<'a> {
    PixelToGeo { pixel: PixelPoint, geo: GeoPoint },
    GeoToPixel { geo: GeoPoint, pixel: PixelPoint },
    Distance { pixel: PixelPoint, distance: CenterDistance },
    Corner(&'a Corner),
    Detection(&'a LocatedBox),
    Info(&'a ResolutionInfo),
}

impl Record<'_> {
    fn csv_header(&self) -> &'static str {
        match self {
            Record::PixelToGeo { .. } => "x,y,lat,lng",
            Record::GeoToPixel { .. } => "lat,lng,x,y",
            Record::Distance { .. } => "x,y,horizontal_m,vertical_m,total_m",
            Record::Corner(_) => "corner,x,y,lat,lng",
            Record::Detection(_) => "min_x,min_y,max_x,max_y,score,lat,lng,length_m,beam_m",
            Record::Info(_) => "meters_per_pixel,zoom,center_lat,center_lng,width,height,custom_resolution",
        }
    }

    fn to_text(&self) -> String {
        match self {
            Record::PixelToGeo { pixel, geo } => format!("Pixel {} -> Lat/Lng: {}", pixel, geo),
            Record::GeoToPixel { geo, pixel } => format!("Lat/Lng {} -> Pixel {}", geo, pixel),
            Record::Distance { pixel, distance } => format!(
                "Distance of {} from center: {:.1}m (H: {:.1}m, V: {:.1}m)",
                pixel, distance.total, distance.horizontal, distance.vertical),
            Record::Corner(c) => format!("{} {}: {}", c.label, c.pixel, c.geo),
            Record::Detection(d) => format!(
                "Detection {}{} at {}: {:.1}m x {:.1}m",
                d.pixel_box.center(),
                d.pixel_box.score.map(|s| format!(" ({:.2})", s)).unwrap_or_default(),
                d.center, d.length_meters, d.beam_meters),
            Record::Info(info) => info.to_string(),
        }
    }

    fn to_csv(&self) -> String {
        match self {
            Record::PixelToGeo { pixel, geo } => format!("{},{},{:.8},{:.8}", pixel.x, pixel.y, geo.lat, geo.lng),
            Record::GeoToPixel { geo, pixel } => format!("{},{},{:.4},{:.4}", geo.lat, geo.lng, pixel.x, pixel.y),
            Record::Distance { pixel, distance } => format!(
                "{},{},{:.4},{:.4},{:.4}", pixel.x, pixel.y, distance.horizontal, distance.vertical, distance.total),
            Record::Corner(c) => format!("{},{},{},{:.8},{:.8}", c.label, c.pixel.x, c.pixel.y, c.geo.lat, c.geo.lng),
            Record::Detection(d) => format!(
                "{},{},{},{},{},{:.8},{:.8},{:.4},{:.4}",
                d.pixel_box.min_x, d.pixel_box.min_y, d.pixel_box.max_x, d.pixel_box.max_y,
                d.pixel_box.score.map(|s| s.to_string()).unwrap_or_default(),
                d.center.lat, d.center.lng, d.length_meters, d.beam_meters),
            Record::Info(info) => format!(
                "{},{},{},{},{},{},{}",
                info.meters_per_pixel, info.zoom, info.center.lat, info.center.lng,
                info.width, info.height, info.custom_resolution),
        }
    }

    fn to_json(&self) -> String {
        match self {
            Record::PixelToGeo { pixel, geo } => format!(
                "{{\"x\": {}, \"y\": {}, \"lat\": {:.8}, \"lng\": {:.8}}}", pixel.x, pixel.y, geo.lat, geo.lng),
            Record::GeoToPixel { geo, pixel } => format!(
                "{{\"lat\": {}, \"lng\": {}, \"x\": {:.4}, \"y\": {:.4}}}", geo.lat, geo.lng, pixel.x, pixel.y),
            Record::Distance { pixel, distance } => format!(
                "{{\"x\": {}, \"y\": {}, \"horizontal\": {:.4}, \"vertical\": {:.4}, \"total\": {:.4}}}",
                pixel.x, pixel.y, distance.horizontal, distance.vertical, distance.total),
            Record::Corner(c) => format!(
                "{{\"corner\": \"{}\", \"x\": {}, \"y\": {}, \"lat\": {:.8}, \"lng\": {:.8}}}",
                c.label, c.pixel.x, c.pixel.y, c.geo.lat, c.geo.lng),
            Record::Detection(d) => format!(
                "{{\"bbox\": [{}, {}, {}, {}], \"score\": {}, \"lat\": {:.8}, \"lng\": {:.8}, \"length_m\": {:.4}, \"beam_m\": {:.4}}}",
                d.pixel_box.min_x, d.pixel_box.min_y, d.pixel_box.max_x, d.pixel_box.max_y,
                d.pixel_box.score.map(|s| s.to_string()).unwrap_or_else(|| "null".to_string()),
                d.center.lat, d.center.lng, d.length_meters, d.beam_meters),
            Record::Info(info) => format!(
                "{{\"meters_per_pixel\": {}, \"zoom_level\": {}, \"center\": {{\"lat\": {}, \"lng\": {}}}, \
                 \"image_size\": {{\"width\": {}, \"height\": {}}}, \"custom_resolution\": {}}}",
                info.meters_per_pixel, info.zoom, info.center.lat, info.center.lng,
                info.width, info.height, info.custom_resolution),
        }
    }
}

/// Render records in the requested format
///
/// CSV output takes its header from the first record; JSON output is a
/// single object for one record and an array otherwise.
pub fn render(records: &[Record<'_>], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => records.iter()
            .map(Record::to_text)
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Csv => {
            let mut lines = Vec::with_capacity(records.len() + 1);
            if let Some(first) = records.first() {
                lines.push(first.csv_header().to_string());
            }
            lines.extend(records.iter().map(Record::to_csv));
            lines.join("\n")
        },
        OutputFormat::Json => match records {
            [] => "[]".to_string(),
            [single] => single.to_json(),
            _ => {
                let items = records.iter()
                    .map(|r| format!("  {}", r.to_json()))
                    .collect::<Vec<_>>()
                    .join(",\n");
                format!("[\n{}\n]", items)
            },
        },
    }
}
