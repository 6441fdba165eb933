//! Point types for the three coordinate spaces a tile lives in

use std::fmt;

/// A geographic position in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north
    pub lat: f64,
    /// Longitude in degrees, positive east
    pub lng: f64,
}

impl GeoPoint {
    /// Create a new geographic point
    pub fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }

    /// Check that both components are finite and inside [-90, 90] / [-180, 180]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.8}, {:.8}", self.lat, self.lng)
    }
}

/// A position inside an image, origin at the top-left corner
///
/// `x` grows to the right and `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    /// Create a new pixel point
    pub fn new(x: f64, y: f64) -> Self {
        PixelPoint { x, y }
    }
}

impl fmt::Display for PixelPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// A position on the Web Mercator plane in meters, `y` growing northward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MercatorPoint {
    pub x: f64,
    pub y: f64,
}

impl MercatorPoint {
    /// Create a new projected point
    pub fn new(x: f64, y: f64) -> Self {
        MercatorPoint { x, y }
    }

    /// Shift this point by a metric offset
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        MercatorPoint::new(self.x + dx, self.y + dy)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
