//! Frame configuration loaded from TOML, CLI flags or an image file
//!
//! A configuration file looks like:
//!
//! ```toml
//! [frame]
//! center_lat = 41.552013
//! center_lng = -70.601921
//! zoom = 19
//! width = 640
//! height = 640
//! resolution = 0.298
//! ```
//!
//! Keys may also sit at the top level when there is no `[frame]` table.

use std::fs;
use log::{debug, warn};

use crate::coordinate::{GeoPoint, ReferenceFrame};
use crate::errors::{GeoError, GeoResult};

/// Zoom used by static-map tiles when none is configured
pub const DEFAULT_ZOOM: u8 = 19;

/// Static-map tile edge in pixels
pub const DEFAULT_IMAGE_SIZE: u32 = 640;

const KNOWN_KEYS: [&str; 6] = ["center_lat", "center_lng", "zoom", "width", "height", "resolution"];

/// Parameters needed to build a [`ReferenceFrame`]
#[derive(Debug, Clone, PartialEq)]
pub struct FrameConfig {
    pub center_lat: Option<f64>,
    pub center_lng: Option<f64>,
    pub zoom: u8,
    pub width: u32,
    pub height: u32,
    /// Meters per pixel overriding the zoom-derived value
    pub resolution: Option<f64>,
}

impl Default for FrameConfig {
    fn default() -> Self {
        FrameConfig {
            center_lat: None,
            center_lng: None,
            zoom: DEFAULT_ZOOM,
            width: DEFAULT_IMAGE_SIZE,
            height: DEFAULT_IMAGE_SIZE,
            resolution: None,
        }
    }
}

impl FrameConfig {
    /// Parse a configuration from TOML text
    pub fn from_str(content: &str) -> GeoResult<Self> {
        let value: toml::Value = content.parse()?;
        let root = value.as_table()
            .ok_or_else(|| GeoError::ConfigError("configuration root is not a table".to_string()))?;

        let table = match root.get("frame") {
            Some(frame) => frame.as_table()
                .ok_or_else(|| GeoError::ConfigError("'frame' must be a table".to_string()))?,
            None => root,
        };

        for key in table.keys() {
            if !KNOWN_KEYS.contains(&key.as_str()) && key != "frame" {
                warn!("Ignoring unknown configuration key '{}'", key);
            }
        }

        let mut config = FrameConfig::default();
        config.center_lat = get_float(table, "center_lat")?;
        config.center_lng = get_float(table, "center_lng")?;
        config.resolution = get_float(table, "resolution")?;
        if let Some(zoom) = get_integer(table, "zoom", u64::from(u8::MAX))? {
            config.zoom = zoom as u8;
        }
        if let Some(width) = get_integer(table, "width", u64::from(u32::MAX))? {
            config.width = width as u32;
        }
        if let Some(height) = get_integer(table, "height", u64::from(u32::MAX))? {
            config.height = height as u32;
        }

        debug!("Loaded frame configuration: {:?}", config);
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &str) -> GeoResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GeoError::ConfigError(format!("cannot read '{}': {}", path, e)))?;
        Self::from_str(&content)
    }

    /// Take width and height from an image file's header
    pub fn with_image_dimensions(mut self, image_path: &str) -> GeoResult<Self> {
        let (width, height) = image::image_dimensions(image_path)?;
        debug!("Image '{}' is {}x{} pixels", image_path, width, height);
        self.width = width;
        self.height = height;
        Ok(self)
    }

    /// Validate the configuration and build the frame
    pub fn build_frame(&self) -> GeoResult<ReferenceFrame> {
        let lat = self.center_lat.ok_or_else(|| GeoError::InvalidParameter(
            "center latitude is required".to_string()))?;
        let lng = self.center_lng.ok_or_else(|| GeoError::InvalidParameter(
            "center longitude is required".to_string()))?;

        ReferenceFrame::new(GeoPoint::new(lat, lng), self.zoom, self.width, self.height, self.resolution)
    }
}

fn get_float(table: &toml::Table, key: &str) -> GeoResult<Option<f64>> {
    match table.get(key) {
        None => Ok(None),
        Some(toml::Value::Float(v)) => Ok(Some(*v)),
        Some(toml::Value::Integer(v)) => Ok(Some(*v as f64)),
        Some(other) => Err(GeoError::ConfigError(format!(
            "'{}' must be a number, found {}", key, other.type_str()))),
    }
}

fn get_integer(table: &toml::Table, key: &str, max: u64) -> GeoResult<Option<u64>> {
    match table.get(key) {
        None => Ok(None),
        Some(toml::Value::Integer(v)) if *v >= 0 && (*v as u64) <= max => Ok(Some(*v as u64)),
        Some(toml::Value::Integer(v)) => Err(GeoError::ConfigError(format!(
            "'{}' must be between 0 and {}, found {}", key, max, v))),
        Some(other) => Err(GeoError::ConfigError(format!(
            "'{}' must be an integer, found {}", key, other.type_str()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_table() {
        let config = FrameConfig::from_str(r#"
            [frame]
            center_lat = 41.552013
            center_lng = -70.601921
            zoom = 18
            width = 1280
            height = 720
            resolution = 0.298
        "#).unwrap();

        assert_eq!(config.center_lat, Some(41.552013));
        assert_eq!(config.center_lng, Some(-70.601921));
        assert_eq!(config.zoom, 18);
        assert_eq!((config.width, config.height), (1280, 720));
        assert_eq!(config.resolution, Some(0.298));
    }

    #[test]
    fn test_top_level_keys_and_defaults() {
        let config = FrameConfig::from_str("center_lat = 0\ncenter_lng = 10.5\n").unwrap();
        assert_eq!(config.center_lat, Some(0.0));
        assert_eq!(config.zoom, DEFAULT_ZOOM);
        assert_eq!((config.width, config.height), (DEFAULT_IMAGE_SIZE, DEFAULT_IMAGE_SIZE));
        assert_eq!(config.resolution, None);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(FrameConfig::from_str("zoom = 300"), Err(GeoError::ConfigError(_))));
        assert!(matches!(FrameConfig::from_str("width = -1"), Err(GeoError::ConfigError(_))));
        assert!(matches!(FrameConfig::from_str("center_lat = \"north\""), Err(GeoError::ConfigError(_))));
        assert!(matches!(FrameConfig::from_str("zoom = 1.5"), Err(GeoError::ConfigError(_))));
        assert!(matches!(FrameConfig::from_str("[frame"), Err(GeoError::ConfigError(_))));
        assert!(matches!(FrameConfig::from_str("frame = 3"), Err(GeoError::ConfigError(_))));
    }

    #[test]
    fn test_build_frame() {
        let mut config = FrameConfig::default();
        assert!(matches!(config.build_frame(), Err(GeoError::InvalidParameter(_))));

        config.center_lat = Some(41.552013);
        config.center_lng = Some(-70.601921);
        config.resolution = Some(0.298);
        let frame = config.build_frame().unwrap();
        assert_eq!(frame.meters_per_pixel(), 0.298);
        assert_eq!(frame.width(), DEFAULT_IMAGE_SIZE);

        config.width = 0;
        assert!(matches!(config.build_frame(), Err(GeoError::InvalidParameter(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(FrameConfig::from_file("/nonexistent/frame.toml"), Err(GeoError::ConfigError(_))));
    }
}
