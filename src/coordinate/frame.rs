//! Per-image reference frame and the pixel/geographic mapping built on it
//!
//! A [`ReferenceFrame`] is created once for each north-up tile from its
//! center point, zoom level and pixel size. Every conversion afterwards is a
//! pure read against the frame, so one frame can be shared across threads.

use std::fmt;
use log::{debug, warn};

use super::bbox::{GeoBounds, LocatedBox, PixelBox};
use super::distance::CenterDistance;
use super::mercator::{geo_to_mercator, mercator_to_geo, MAX_LATITUDE};
use super::point::{GeoPoint, MercatorPoint, PixelPoint};
use super::resolution::{ground_resolution, Resolution, MAX_ZOOM};
use crate::errors::{GeoError, GeoResult};

/// Ratio between a custom and the zoom-derived resolution above which we warn
const RESOLUTION_DIVERGENCE_WARNING: f64 = 2.0;

/// Immutable georeferencing parameters of a single image
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceFrame {
    center: GeoPoint,
    zoom: u8,
    width: u32,
    height: u32,
    resolution: Resolution,
    center_mercator: MercatorPoint,
}

/// Read-only snapshot of a frame's configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolutionInfo {
    pub meters_per_pixel: f64,
    pub zoom: u8,
    pub center: GeoPoint,
    pub width: u32,
    pub height: u32,
    /// True when the resolution was supplied rather than derived
    pub custom_resolution: bool,
}

impl fmt::Display for ResolutionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Resolution: {:.6} m/px ({})",
                 self.meters_per_pixel,
                 if self.custom_resolution { "custom" } else { "derived" })?;
        writeln!(f, "Zoom level: {}", self.zoom)?;
        writeln!(f, "Center: {}", self.center)?;
        write!(f, "Image size: {}x{}", self.width, self.height)
    }
}

/// A labelled image corner (or the center) with its geographic position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corner {
    pub label: &'static str,
    pub pixel: PixelPoint,
    pub geo: GeoPoint,
}

impl ReferenceFrame {
    /// Build a frame, validating every parameter
    ///
    /// # Arguments
    /// * `center` - Geographic point the image is centered on
    /// * `zoom` - Tile zoom level (only used when no custom resolution is given)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `custom_resolution` - Meters per pixel overriding the zoom-derived value
    ///
    /// # Errors
    /// `InvalidParameter` for bad coordinates, dimensions or custom resolution,
    /// `DomainError` when the center is a pole, or when no custom resolution is
    /// given and the center lies beyond [`MAX_LATITUDE`] or the derived
    /// resolution is not positive, `NumericOverflow` for zoom levels above
    /// [`MAX_ZOOM`] without a custom resolution.
    pub fn new(center: GeoPoint,
               zoom: u8,
               width: u32,
               height: u32,
               custom_resolution: Option<f64>) -> GeoResult<Self> {
        if !center.is_valid() {
            return Err(GeoError::InvalidParameter(format!(
                "center ({}, {}) is not a valid latitude/longitude", center.lat, center.lng)));
        }

        if width == 0 || height == 0 {
            return Err(GeoError::InvalidParameter(format!(
                "image dimensions must be positive, got {}x{}", width, height)));
        }

        // The projection is singular at the poles
        if center.lat.abs() >= 90.0 {
            return Err(GeoError::DomainError(format!(
                "center latitude {} is at a pole", center.lat)));
        }

        let center_mercator = geo_to_mercator(center);
        if !center_mercator.is_finite() {
            return Err(GeoError::DomainError(format!(
                "center ({}, {}) does not project to a finite Web Mercator point",
                center.lat, center.lng)));
        }

        let resolution = match custom_resolution {
            Some(value) => {
                if !value.is_finite() || value <= 0.0 {
                    return Err(GeoError::InvalidParameter(format!(
                        "custom resolution must be a positive number, got {}", value)));
                }
                if zoom <= MAX_ZOOM {
                    warn_on_divergence(value, ground_resolution(center.lat, zoom), zoom);
                }
                Resolution::Custom(value)
            },
            None => {
                if center.lat.abs() > MAX_LATITUDE {
                    return Err(GeoError::DomainError(format!(
                        "center latitude {} is outside Web Mercator coverage (|lat| <= {}) \
                         and no custom resolution was given",
                        center.lat, MAX_LATITUDE)));
                }
                if zoom > MAX_ZOOM {
                    return Err(GeoError::NumericOverflow(format!(
                        "zoom level {} exceeds the supported maximum of {}", zoom, MAX_ZOOM)));
                }
                let value = ground_resolution(center.lat, zoom);
                if !value.is_finite() || value <= 0.0 {
                    return Err(GeoError::DomainError(format!(
                        "ground resolution at latitude {} and zoom {} is {}",
                        center.lat, zoom, value)));
                }
                Resolution::Derived(value)
            },
        };

        debug!("Created reference frame: center {}, zoom {}, {}x{} px, {}",
               center, zoom, width, height, resolution);

        Ok(ReferenceFrame {
            center,
            zoom,
            width,
            height,
            resolution,
            center_mercator,
        })
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Meters covered by one pixel
    pub fn meters_per_pixel(&self) -> f64 {
        self.resolution.meters_per_pixel()
    }

    /// Projected center, computed once at construction
    pub fn center_mercator(&self) -> MercatorPoint {
        self.center_mercator
    }

    /// Pixel position of the image center
    pub fn center_pixel(&self) -> PixelPoint {
        PixelPoint::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Snapshot of the frame configuration for diagnostics
    pub fn resolution_info(&self) -> ResolutionInfo {
        ResolutionInfo {
            meters_per_pixel: self.meters_per_pixel(),
            zoom: self.zoom,
            center: self.center,
            width: self.width,
            height: self.height,
            custom_resolution: self.resolution.is_custom(),
        }
    }

    /// Geographic position of a pixel
    ///
    /// Longitudes are not wrapped: pixels whose offset crosses the antimeridian
    /// give longitudes outside [-180, 180]. Results are reliable while the
    /// offset in meters stays within the projected square (about ±2.0e7 m).
    pub fn pixel_to_geo(&self, pixel: PixelPoint) -> GeoPoint {
        let center = self.center_pixel();
        let offset_x = pixel.x - center.x;
        let offset_y = pixel.y - center.y;

        // The center pixel is the frame center by definition
        if offset_x == 0.0 && offset_y == 0.0 {
            return self.center;
        }

        // Pixel y grows downward, Mercator y grows northward
        let meter_x = offset_x * self.meters_per_pixel();
        let meter_y = -offset_y * self.meters_per_pixel();

        let geo = mercator_to_geo(self.center_mercator.offset(meter_x, meter_y));
        debug!("Pixel {} -> {}", pixel, geo);
        geo
    }

    /// Pixel position of a geographic point
    ///
    /// Points outside the image give coordinates outside `[0, width] x [0, height]`.
    pub fn geo_to_pixel(&self, geo: GeoPoint) -> PixelPoint {
        let mercator = geo_to_mercator(geo);

        let meter_offset_x = mercator.x - self.center_mercator.x;
        let meter_offset_y = mercator.y - self.center_mercator.y;

        let pixel_offset_x = meter_offset_x / self.meters_per_pixel();
        let pixel_offset_y = -meter_offset_y / self.meters_per_pixel();

        let center = self.center_pixel();
        let pixel = PixelPoint::new(center.x + pixel_offset_x, center.y + pixel_offset_y);
        debug!("{} -> pixel {}", geo, pixel);
        pixel
    }

    /// Planar offset of a pixel from the image center, in meters
    pub fn distance_from_center(&self, pixel: PixelPoint) -> CenterDistance {
        let center = self.center_pixel();
        CenterDistance::from_offsets(
            (pixel.x - center.x) * self.meters_per_pixel(),
            (pixel.y - center.y) * self.meters_per_pixel(),
        )
    }

    /// Geographic positions of the four image corners followed by the center
    pub fn corners(&self) -> Vec<Corner> {
        let w = f64::from(self.width);
        let h = f64::from(self.height);

        [
            ("top-left", PixelPoint::new(0.0, 0.0)),
            ("top-right", PixelPoint::new(w, 0.0)),
            ("bottom-left", PixelPoint::new(0.0, h)),
            ("bottom-right", PixelPoint::new(w, h)),
            ("center", self.center_pixel()),
        ]
            .into_iter()
            .map(|(label, pixel)| Corner { label, pixel, geo: self.pixel_to_geo(pixel) })
            .collect()
    }

    /// Geographic envelope covered by the image
    pub fn geo_bounds(&self) -> GeoBounds {
        let top_left = self.pixel_to_geo(PixelPoint::new(0.0, 0.0));
        let bottom_right = self.pixel_to_geo(
            PixelPoint::new(f64::from(self.width), f64::from(self.height)));

        GeoBounds::new(bottom_right.lat, top_left.lng, top_left.lat, bottom_right.lng)
    }

    /// Geographic center and metric size of a detection box
    pub fn locate_box(&self, pixel_box: &PixelBox) -> LocatedBox {
        let mpp = self.meters_per_pixel();
        LocatedBox {
            pixel_box: *pixel_box,
            center: self.pixel_to_geo(pixel_box.center()),
            length_meters: pixel_box.length_pixels() * mpp,
            beam_meters: pixel_box.beam_pixels() * mpp,
        }
    }
}

fn warn_on_divergence(custom: f64, derived: f64, zoom: u8) {
    if derived <= 0.0 || !derived.is_finite() {
        return;
    }
    let ratio = custom / derived;
    if ratio > RESOLUTION_DIVERGENCE_WARNING || ratio < 1.0 / RESOLUTION_DIVERGENCE_WARNING {
        warn!("Custom resolution {} m/px differs from the zoom {} value {:.6} m/px by a factor of {:.2}",
              custom, zoom, derived, ratio);
    }
}
