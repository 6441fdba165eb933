//! Detection boxes and geographic envelopes

use crate::errors::{GeoError, GeoResult};
use super::point::{GeoPoint, PixelPoint};

/// An axis-aligned box in absolute pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    /// Detector confidence, carried through untouched
    pub score: Option<f64>,
}

impl PixelBox {
    /// Create a box from absolute pixel extents
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        PixelBox { min_x, min_y, max_x, max_y, score: None }
    }

    /// Attach a detector confidence score
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// Scale a detector box given in fractions of the image size
    ///
    /// # Arguments
    /// * `normalized` - `[x_min, y_min, x_max, y_max]`, each in [0, 1]
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    pub fn from_normalized(normalized: [f64; 4], width: u32, height: u32) -> GeoResult<Self> {
        let [x_min, y_min, x_max, y_max] = normalized;

        if normalized.iter().any(|v| !v.is_finite() || *v < 0.0 || *v > 1.0) {
            return Err(GeoError::InvalidParameter(format!(
                "normalized box {:?} must have all values in [0, 1]", normalized)));
        }
        if x_min > x_max || y_min > y_max {
            return Err(GeoError::InvalidParameter(format!(
                "normalized box {:?} has inverted extents", normalized)));
        }

        let w = f64::from(width);
        let h = f64::from(height);
        Ok(PixelBox::new(x_min * w, y_min * h, x_max * w, y_max * h))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> PixelPoint {
        PixelPoint::new(
            self.min_x + self.width() / 2.0,
            self.min_y + self.height() / 2.0,
        )
    }

    /// Longer side in pixels
    pub fn length_pixels(&self) -> f64 {
        self.width().max(self.height())
    }

    /// Shorter side in pixels
    pub fn beam_pixels(&self) -> f64 {
        self.width().min(self.height())
    }
}

/// A detection box placed on the ground
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocatedBox {
    pub pixel_box: PixelBox,
    pub center: GeoPoint,
    pub length_meters: f64,
    pub beam_meters: f64,
}

/// South/west/north/east envelope in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        GeoBounds { south, west, north, east }
    }

    /// Check if a point falls inside the envelope
    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.lat >= self.south && point.lat <= self.north &&
            point.lng >= self.west && point.lng <= self.east
    }
}
