//! EAN-8 symbology definitions
//!
//! - Digit pattern tables (L-code / R-code) and guard patterns
//! - Check digit computation and identifier validation

/// Check digit computation
pub mod checksum;
/// Pattern tables and module offsets
pub mod tables;

pub use checksum::{check_digit, is_valid, validate};
