//! Error types for encoding, decoding and PBM handling.
//!
//! Every failure is reported where it happens and returned to the caller as
//! one of the enums below. Nothing in the crate retries or recovers silently.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which guard pattern failed to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Start guard `101` at module 0
    Start,
    /// Center guard `01010` at module 31
    Center,
    /// End guard `101` at module 64
    End,
}

impl fmt::Display for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Guard::Start => write!(f, "start"),
            Guard::Center => write!(f, "center"),
            Guard::End => write!(f, "end"),
        }
    }
}

/// Half of the symbol a digit window belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Digits 0-3, odd parity (L-code)
    Left,
    /// Digits 4-7, even parity (R-code)
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "L-code"),
            Side::Right => write!(f, "R-code"),
        }
    }
}

/// Identifier validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// Not exactly 8 ASCII digits
    #[error("identifier must be exactly 8 ASCII digits, got {input:?}")]
    InvalidFormat {
        /// Rejected input
        input: String,
    },

    /// Check digit does not match the payload
    #[error("invalid identifier: check digit should be {expected}, found {found}")]
    ChecksumMismatch {
        /// Check digit computed from the payload
        expected: u8,
        /// Check digit present in the input
        found: u8,
    },
}

/// Encoding failures. No grid is produced when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Identifier failed validation
    #[error(transparent)]
    Identifier(#[from] IdentifierError),

    /// A geometry value is zero or negative
    #[error("{field} must be a positive value, got {value}")]
    InvalidGeometry {
        /// Name of the offending parameter
        field: &'static str,
        /// Value supplied for it
        value: i64,
    },

    /// Pixel count does not fit in memory addressing
    #[error("barcode dimensions overflow the addressable pixel count")]
    GridTooLarge,
}

/// Decoding failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Grid has no pixels
    #[error("image has no pixels")]
    EmptyGrid,

    /// Header-width sampling needs at least 67 columns
    #[error("image width {width} is narrower than the 67 modules of an EAN-8 symbol")]
    GridTooNarrow {
        /// Image width in pixels
        width: usize,
    },

    /// Scan line is blank
    #[error("no bars found on the scan line")]
    NoBarsFound,

    /// Bar region width is not a multiple of 67
    #[error("bar region of {span} pixels is not a whole number of modules")]
    UnalignedBarRegion {
        /// Pixels from the first to the last bar, inclusive
        span: usize,
    },

    /// A guard pattern does not match
    #[error("invalid {guard} marker")]
    GuardMismatch {
        /// Guard that failed
        guard: Guard,
    },

    /// A digit window matches no table entry
    #[error("invalid {side} sequence at digit {position}")]
    PatternLookupFailure {
        /// Table the window was looked up in
        side: Side,
        /// Digit position, 0-7
        position: usize,
    },

    /// Bitstring of the wrong length or alphabet
    #[error("bit sequence must be 67 characters of '0'/'1', got length {len}")]
    MalformedBitstring {
        /// Length of the rejected input
        len: usize,
    },

    /// Decoded digits fail checksum re-validation
    #[error("decoded digits fail validation: {0}")]
    Checksum(#[from] IdentifierError),
}

/// Pixel grid construction failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Buffer length differs from width * height
    #[error("size mismatch: expected {expected} pixels, got {actual}")]
    SizeMismatch {
        /// `width * height`
        expected: usize,
        /// Length of the supplied buffer
        actual: usize,
    },

    /// Value other than 0 or 1
    #[error("pixel {index} has value {value}, expected 0 or 1")]
    InvalidPixel {
        /// Row-major pixel index
        index: usize,
        /// Offending value
        value: u8,
    },

    /// Width or height is zero
    #[error("grid dimensions must be non-zero")]
    ZeroDimension,

    /// `width * height` overflows `usize`
    #[error("grid of {width}x{height} pixels is too large")]
    TooLarge {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
}

/// PBM (P1) parsing failures.
#[derive(Debug, Error)]
pub enum PbmError {
    /// Input ended before the magic number
    #[error("the PBM header is incomplete: no magic number")]
    MissingMagic,

    /// First content line is not `P1`
    #[error("the file does not follow the expected PBM format (P1): {line:?}")]
    BadMagic {
        /// Line found in place of the magic number
        line: String,
    },

    /// Input ended before the dimension line
    #[error("the PBM header is incomplete: no dimension line")]
    MissingDimensions,

    /// Dimension line lacks two positive integers
    #[error("invalid dimensions in file header: {line:?}")]
    InvalidDimensions {
        /// The dimension line as read
        line: String,
    },

    /// Fewer than width * height values
    #[error("PBM body ended after {found} of {expected} pixels")]
    TruncatedBody {
        /// Pixels declared by the header
        expected: usize,
        /// Pixels actually read
        found: usize,
    },

    /// Body token other than 0 or 1
    #[error("pixel {index} is {token:?}, expected 0 or 1")]
    InvalidPixel {
        /// Row-major pixel index
        index: usize,
        /// Offending token
        token: String,
    },

    /// Parsed pixels do not form a valid grid
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Underlying reader failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// File-level failures, carrying the path involved.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Output path without a `.pbm` extension
    #[error("{}: expected a .pbm file", path.display())]
    Extension {
        /// Rejected path
        path: PathBuf,
    },

    /// Opening, reading or writing the file failed
    #[error("{}: {source}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// File is not a valid `P1` image
    #[error("{}: {source}", path.display())]
    Pbm {
        /// File involved
        path: PathBuf,
        /// Parse failure
        #[source]
        source: PbmError,
    },

    /// Image holds no decodable symbol
    #[error("{}: {source}", path.display())]
    Decode {
        /// File involved
        path: PathBuf,
        /// Decode failure
        #[source]
        source: DecodeError,
    },

    /// Identifier or geometry rejected before writing
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl PbmError {
    /// True for the header-level failures (magic number or dimension line).
    pub fn is_malformed_header(&self) -> bool {
        matches!(
            self,
            PbmError::MissingMagic
                | PbmError::BadMagic { .. }
                | PbmError::MissingDimensions
                | PbmError::InvalidDimensions { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = DecodeError::GuardMismatch {
            guard: Guard::Center,
        };
        assert_eq!(err.to_string(), "invalid center marker");

        let err = DecodeError::PatternLookupFailure {
            side: Side::Right,
            position: 5,
        };
        assert_eq!(err.to_string(), "invalid R-code sequence at digit 5");

        let err = EncodeError::InvalidGeometry {
            field: "spacing",
            value: 0,
        };
        assert_eq!(err.to_string(), "spacing must be a positive value, got 0");
    }

    #[test]
    fn test_identifier_error_converts() {
        let err: EncodeError = IdentifierError::ChecksumMismatch {
            expected: 5,
            found: 4,
        }
        .into();
        assert!(matches!(err, EncodeError::Identifier(_)));
    }

    #[test]
    fn test_malformed_header_classification() {
        assert!(PbmError::MissingMagic.is_malformed_header());
        assert!(!PbmError::TruncatedBody {
            expected: 4,
            found: 2
        }
        .is_malformed_header());
    }
}
