//! Ground resolution for 256-pixel Web Mercator tile pyramids

use std::fmt;

/// Meters per pixel at the equator at zoom 0
pub const EQUATOR_RESOLUTION: f64 = 156543.03392;

/// Highest zoom for which a derived resolution is accepted
pub const MAX_ZOOM: u8 = 30;

/// Meters per pixel at `lat` degrees for tile zoom `zoom`
///
/// Falls to zero at the poles. Callers building a frame go through
/// [`crate::coordinate::ReferenceFrame`], which rejects that case.
pub fn ground_resolution(lat: f64, zoom: u8) -> f64 {
    let lat_rad = lat * std::f64::consts::PI / 180.0;
    (EQUATOR_RESOLUTION * f64::cos(lat_rad)) / 2f64.powi(i32::from(zoom))
}

/// Where a frame's meters-per-pixel value came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// Computed from center latitude and zoom
    Derived(f64),
    /// Supplied by the caller, used verbatim
    Custom(f64),
}

impl Resolution {
    pub fn meters_per_pixel(&self) -> f64 {
        match self {
            Resolution::Derived(v) | Resolution::Custom(v) => *v,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Resolution::Custom(_))
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Derived(v) => write!(f, "{:.6} m/px (derived)", v),
            Resolution::Custom(v) => write!(f, "{:.6} m/px (custom)", v),
        }
    }
}
