pub mod errors;
pub mod coordinate;
pub mod config;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::TileGeo;

pub use errors::{GeoError, GeoResult};
pub use config::FrameConfig;
pub use coordinate::{GeoPoint, MercatorPoint, PixelPoint, ReferenceFrame, ResolutionInfo, CenterDistance};
