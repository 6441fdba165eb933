//! Spherical Web Mercator (EPSG:3857) forward and inverse transforms

use std::f64::consts::PI;
use log::trace;
use super::point::{GeoPoint, MercatorPoint};

/// Earth radius in meters
pub const EARTH_RADIUS: f64 = 6378137.0;

/// Meters spanned by 180 degrees of longitude at the equator
pub const ORIGIN_SHIFT: f64 = PI * EARTH_RADIUS;

/// Latitude at which the projected square ends (EPSG:3857 extent)
pub const MAX_LATITUDE: f64 = 85.05112877980659;

/// Convert a geographic point to Web Mercator meters
///
/// Not defined at the poles: latitude = ±90 yields a non-finite `y`.
pub fn geo_to_mercator(geo: GeoPoint) -> MercatorPoint {
    let x = geo.lng * ORIGIN_SHIFT / 180.0;
    let y = f64::ln(f64::tan((90.0 + geo.lat) * PI / 360.0)) / (PI / 180.0);
    let y = y * ORIGIN_SHIFT / 180.0;

    trace!("Projected ({}, {}) to Web Mercator ({}, {})", geo.lat, geo.lng, x, y);

    MercatorPoint::new(x, y)
}

/// Convert Web Mercator meters back to a geographic point
pub fn mercator_to_geo(point: MercatorPoint) -> GeoPoint {
    let lng = (point.x / ORIGIN_SHIFT) * 180.0;
    let lat_deg = (point.y / ORIGIN_SHIFT) * 180.0;
    let lat = 180.0 / PI * (2.0 * f64::atan(f64::exp(lat_deg * PI / 180.0)) - PI / 2.0);

    trace!("Unprojected Web Mercator ({}, {}) to ({}, {})", point.x, point.y, lat, lng);

    GeoPoint::new(lat, lng)
}
