//! Planar distance of a pixel from the image center
//!
//! Uses the frame's linear meters-per-pixel scale directly. This is a
//! tangent-plane approximation, only meaningful within a single tile.

/// Metric offset of a pixel from the image center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterDistance {
    /// Meters along the image x axis, positive to the right
    pub horizontal: f64,
    /// Meters along the image y axis, positive downward
    pub vertical: f64,
    /// Euclidean length of the offset
    pub total: f64,
}

impl CenterDistance {
    pub fn from_offsets(horizontal: f64, vertical: f64) -> Self {
        CenterDistance {
            horizontal,
            vertical,
            total: horizontal.hypot(vertical),
        }
    }
}
