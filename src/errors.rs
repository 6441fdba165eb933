//! Error types for georeferencing operations

use std::fmt;
use std::io;

/// Errors raised while building a reference frame or driving the CLI
#[derive(Debug)]
pub enum GeoError {
    /// Non-finite or out-of-range coordinate, dimension or resolution
    InvalidParameter(String),
    /// Ground resolution or projected center is unusable at this latitude
    DomainError(String),
    /// Input beyond the range where the arithmetic stays precise
    NumericOverflow(String),
    /// Invalid or unreadable configuration
    ConfigError(String),
    /// Image could not be probed for its dimensions
    ImageError(String),
    /// I/O error
    IoError(io::Error),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            GeoError::DomainError(msg) => write!(f, "Domain error: {}", msg),
            GeoError::NumericOverflow(msg) => write!(f, "Numeric overflow: {}", msg),
            GeoError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GeoError::ImageError(msg) => write!(f, "Image error: {}", msg),
            GeoError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for GeoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GeoError {
    fn from(error: io::Error) -> Self {
        GeoError::IoError(error)
    }
}

impl From<image::ImageError> for GeoError {
    fn from(error: image::ImageError) -> Self {
        GeoError::ImageError(error.to_string())
    }
}

impl From<toml::de::Error> for GeoError {
    fn from(error: toml::de::Error) -> Self {
        GeoError::ConfigError(error.to_string())
    }
}

/// Result type for georeferencing operations
pub type GeoResult<T> = Result<T, GeoError>;
