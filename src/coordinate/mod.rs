//! Georeferencing for north-up Web Mercator images
//!
//! This module provides the projection primitives, the ground resolution
//! calculation and the per-image reference frame that maps between pixel
//! and geographic coordinates.

mod bbox;
mod distance;
mod frame;
pub mod mercator;
mod point;
pub mod resolution;

// Re-export key types
pub use self::bbox::{GeoBounds, LocatedBox, PixelBox};
pub use self::distance::CenterDistance;
pub use self::frame::{Corner, ReferenceFrame, ResolutionInfo};
pub use self::mercator::{geo_to_mercator, mercator_to_geo};
pub use self::point::{GeoPoint, MercatorPoint, PixelPoint};
pub use self::resolution::{ground_resolution, Resolution};
