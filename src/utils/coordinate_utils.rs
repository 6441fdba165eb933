//! Parsing of coordinate text given on the command line or in batch files
//!
//! Pairs may be separated by a comma, whitespace or both, so `514,452`,
//! `514 452` and `41.55, -70.60` are all accepted.

use std::fs;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::coordinate::mercator::MAX_LATITUDE;
use crate::coordinate::{GeoPoint, PixelPoint};
use crate::errors::{GeoError, GeoResult};

lazy_static! {
    static ref PAIR_PATTERN: Regex = Regex::new(
        r"^\s*([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)\s*(?:,\s*|\s+)([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)\s*$"
    ).expect("coordinate pair pattern compiles");
}

/// Parse two numbers from a string like "x,y"
pub fn parse_pair(text: &str) -> GeoResult<(f64, f64)> {
    let captures = PAIR_PATTERN.captures(text).ok_or_else(|| GeoError::InvalidParameter(
        format!("'{}' is not a coordinate pair (expected 'a,b')", text)))?;

    let first = captures[1].parse::<f64>()
        .map_err(|e| GeoError::InvalidParameter(format!("invalid number '{}': {}", &captures[1], e)))?;
    let second = captures[2].parse::<f64>()
        .map_err(|e| GeoError::InvalidParameter(format!("invalid number '{}': {}", &captures[2], e)))?;

    debug!("Parsed coordinate pair '{}' as ({}, {})", text.trim(), first, second);
    Ok((first, second))
}

/// Parse a pixel position given as "x,y"
pub fn parse_pixel(text: &str) -> GeoResult<PixelPoint> {
    let (x, y) = parse_pair(text)?;
    Ok(PixelPoint::new(x, y))
}

/// Parse a geographic position given as "lat,lng"
///
/// Latitudes beyond the Web Mercator extent are rejected since they have no
/// finite pixel position.
pub fn parse_geo(text: &str) -> GeoResult<GeoPoint> {
    let (lat, lng) = parse_pair(text)?;
    let geo = GeoPoint::new(lat, lng);
    if !geo.is_valid() {
        return Err(GeoError::InvalidParameter(format!(
            "'{}' is outside latitude [-90, 90] / longitude [-180, 180]", text.trim())));
    }
    if geo.lat.abs() > MAX_LATITUDE {
        return Err(GeoError::InvalidParameter(format!(
            "latitude {} is beyond the Web Mercator extent (|lat| <= {})", geo.lat, MAX_LATITUDE)));
    }
    Ok(geo)
}

/// Parse a normalized detection line "x_min,y_min,x_max,y_max[,score]"
pub fn parse_detection(text: &str) -> GeoResult<([f64; 4], Option<f64>)> {
    let values = text.split(',')
        .map(|part| part.trim().parse::<f64>()
            .map_err(|_| GeoError::InvalidParameter(format!("invalid number '{}' in detection '{}'",
                                                            part.trim(), text.trim()))))
        .collect::<GeoResult<Vec<f64>>>()?;

    match values.as_slice() {
        [x_min, y_min, x_max, y_max] => Ok(([*x_min, *y_min, *x_max, *y_max], None)),
        [x_min, y_min, x_max, y_max, score] => Ok(([*x_min, *y_min, *x_max, *y_max], Some(*score))),
        _ => Err(GeoError::InvalidParameter(format!(
            "detection '{}' must have 4 or 5 comma-separated values", text.trim()))),
    }
}

/// Non-empty, non-comment lines of a text file
pub fn read_data_lines(path: &str) -> GeoResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(data_lines(&content))
}

pub(crate) fn data_lines(content: &str) -> Vec<String> {
    content.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair_separators() {
        assert_eq!(parse_pair("514,452").unwrap(), (514.0, 452.0));
        assert_eq!(parse_pair(" 514 , 452 ").unwrap(), (514.0, 452.0));
        assert_eq!(parse_pair("514 452").unwrap(), (514.0, 452.0));
        assert_eq!(parse_pair("41.552013,-70.601921").unwrap(), (41.552013, -70.601921));
        assert_eq!(parse_pair("-.5,+1e3").unwrap(), (-0.5, 1000.0));
    }

    #[test]
    fn test_parse_pair_rejects_garbage() {
        for text in ["", "514", "514,452,1", "a,b", "514;452", "1,,2"] {
            assert!(matches!(parse_pair(text), Err(GeoError::InvalidParameter(_))), "{}", text);
        }
    }

    #[test]
    fn test_parse_geo_range() {
        assert_eq!(parse_geo("41.552013,-70.601921").unwrap(), GeoPoint::new(41.552013, -70.601921));
        assert!(parse_geo("95,10").is_err());
        assert!(parse_geo("10,-181").is_err());
    }

    #[test]
    fn test_parse_geo_rejects_poles() {
        for text in ["-90,0", "90,0", "85.06,10"] {
            assert!(matches!(parse_geo(text), Err(GeoError::InvalidParameter(_))), "{}", text);
        }
        assert!(parse_geo("85.05,10").is_ok());
    }

    #[test]
    fn test_parse_detection() {
        assert_eq!(parse_detection("0.1,0.2,0.3,0.4").unwrap(), ([0.1, 0.2, 0.3, 0.4], None));
        assert_eq!(parse_detection("0.1, 0.2, 0.3, 0.4, 0.91").unwrap(), ([0.1, 0.2, 0.3, 0.4], Some(0.91)));
        assert!(parse_detection("0.1,0.2,0.3").is_err());
        assert!(parse_detection("0.1,0.2,x,0.4").is_err());
    }

    #[test]
    fn test_data_lines_skip_comments() {
        let lines = data_lines("# pixels\n514,452\n\n   \n  0,0  \n# end\n");
        assert_eq!(lines, vec!["514,452".to_string(), "0,0".to_string()]);
    }
}
