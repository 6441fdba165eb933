//! Utility modules for common functionality
//!
//! This module provides the text parsing, output rendering and progress
//! reporting used by the command-line front end.

pub mod coordinate_utils;
pub mod format_utils;
pub(crate) mod progress;
