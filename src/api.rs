use log::info;

use crate::config::FrameConfig;
use crate::coordinate::{
    CenterDistance, GeoPoint, LocatedBox, PixelBox, PixelPoint, ReferenceFrame, ResolutionInfo,
};
use crate::errors::GeoResult;

pub use crate::config::{DEFAULT_IMAGE_SIZE, DEFAULT_ZOOM};

/// Resolution used for 640x640 zoom-19 static-map tiles of the US northeast coast
pub const DEFAULT_RESOLUTION: f64 = 0.298;

/// Main interface to the TileGeo library
///
/// Wraps a [`ReferenceFrame`] behind plain latitude/longitude and pixel
/// arguments for callers that do not want to handle the point types.
#[derive(Debug, Clone)]
pub struct TileGeo {
    frame: ReferenceFrame,
}

impl TileGeo {
    /// Create a converter for one image
    ///
    /// # Arguments
    /// * `center_lat` - Latitude of the image center
    /// * `center_lng` - Longitude of the image center
    /// * `zoom` - Tile zoom level
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `custom_resolution` - Meters per pixel, or `None` to derive it from latitude and zoom
    ///
    /// # Returns
    /// A TileGeo instance or an error if the parameters are invalid
    pub fn new(center_lat: f64,
               center_lng: f64,
               zoom: u8,
               width: u32,
               height: u32,
               custom_resolution: Option<f64>) -> GeoResult<Self> {
        let frame = ReferenceFrame::new(
            GeoPoint::new(center_lat, center_lng), zoom, width, height, custom_resolution)?;
        info!("TileGeo ready: {}x{} px at {} ({:.6} m/px)",
              width, height, frame.center(), frame.meters_per_pixel());
        Ok(TileGeo { frame })
    }

    /// Create a converter for a 640x640 zoom-19 tile at [`DEFAULT_RESOLUTION`]
    pub fn with_defaults(center_lat: f64, center_lng: f64) -> GeoResult<Self> {
        Self::new(center_lat, center_lng, DEFAULT_ZOOM, DEFAULT_IMAGE_SIZE, DEFAULT_IMAGE_SIZE,
                  Some(DEFAULT_RESOLUTION))
    }

    /// Create a converter from a loaded configuration
    pub fn from_config(config: &FrameConfig) -> GeoResult<Self> {
        Ok(TileGeo { frame: config.build_frame()? })
    }

    pub fn frame(&self) -> &ReferenceFrame {
        &self.frame
    }

    /// Latitude/longitude of the pixel (x, y)
    pub fn pixel_to_lat_lng(&self, x: f64, y: f64) -> GeoPoint {
        self.frame.pixel_to_geo(PixelPoint::new(x, y))
    }

    /// Pixel position of (lat, lng)
    pub fn lat_lng_to_pixel(&self, lat: f64, lng: f64) -> PixelPoint {
        self.frame.geo_to_pixel(GeoPoint::new(lat, lng))
    }

    pub fn distance_from_center(&self, x: f64, y: f64) -> CenterDistance {
        self.frame.distance_from_center(PixelPoint::new(x, y))
    }

    pub fn resolution_info(&self) -> ResolutionInfo {
        self.frame.resolution_info()
    }

    /// Place a detector box given in fractions of the image size
    pub fn locate_detection(&self, normalized: [f64; 4], score: Option<f64>) -> GeoResult<LocatedBox> {
        let mut pixel_box = PixelBox::from_normalized(normalized, self.frame.width(), self.frame.height())?;
        if let Some(score) = score {
            pixel_box = pixel_box.with_score(score);
        }
        Ok(self.frame.locate_box(&pixel_box))
    }
}

/// Convert a single pixel without keeping the frame around
///
/// `resolution` of `None` derives meters per pixel from the center latitude
/// and `zoom`; pass `Some(DEFAULT_RESOLUTION)` for the static-map tile value.
pub fn convert_pixel_to_coordinates(pixel: PixelPoint,
                                    center: GeoPoint,
                                    zoom: u8,
                                    width: u32,
                                    height: u32,
                                    resolution: Option<f64>) -> GeoResult<GeoPoint> {
    let frame = ReferenceFrame::new(center, zoom, width, height, resolution)?;
    Ok(frame.pixel_to_geo(pixel))
}

/// Convert a single geographic point without keeping the frame around
///
/// `resolution` of `None` derives meters per pixel from the center latitude
/// and `zoom`, as in [`convert_pixel_to_coordinates`].
pub fn convert_coordinates_to_pixel(geo: GeoPoint,
                                    center: GeoPoint,
                                    zoom: u8,
                                    width: u32,
                                    height: u32,
                                    resolution: Option<f64>) -> GeoResult<PixelPoint> {
    let frame = ReferenceFrame::new(center, zoom, width, height, resolution)?;
    Ok(frame.geo_to_pixel(geo))
}
