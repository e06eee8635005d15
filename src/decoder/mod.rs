//! EAN-8 decoding
//!
//! The pipeline runs in three steps, each failing with a typed error:
//! - Sampling the middle row into 67 module bits
//! - Guard pattern verification
//! - Digit lookup in the L-code / R-code tables, then checksum re-validation

/// Decoder settings (sampling strategy, checksum policy)
pub mod config;
/// Start / center / end guard checks
pub mod markers;
/// Pixel grid to bitstring sampling
pub mod sampler;

pub use config::{DecodeOptions, Sampling};
pub use markers::validate_markers;
pub use sampler::{sample, sample_aligned, sample_with};

use crate::error::{DecodeError, Side};
use crate::models::{Identifier, PixelGrid, SampledBitstring};
use crate::symbology::checksum;
use crate::symbology::tables::{self, DIGIT_MODULES, DIGITS_PER_SIDE};
use tracing::{debug, trace};

/// Successful decode of one symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The sampled modules, kept for diagnostics
    pub bitstring: SampledBitstring,
    /// Digits in scan order
    pub digits: [u8; 8],
    /// Validated identifier; `None` only when checksum verification is off
    /// and the check digit does not hold
    pub identifier: Option<Identifier>,
}

impl Decoded {
    /// Decoded digits as an 8 character string
    pub fn text(&self) -> String {
        self.digits.iter().map(|&d| char::from(b'0' + d)).collect()
    }
}

/// Decode with default options (guard-aligned sampling, checksum verified)
pub fn decode(grid: &PixelGrid) -> Result<Decoded, DecodeError> {
    decode_with(grid, &DecodeOptions::default())
}

/// Decode a pixel grid.
pub fn decode_with(grid: &PixelGrid, options: &DecodeOptions) -> Result<Decoded, DecodeError> {
    let bitstring = sample_with(grid, options.sampling)?;
    debug!(bits = bitstring.as_str(), "sampled scan line");
    decode_bitstring(bitstring, options.verify_checksum)
}

/// Decode an already sampled bitstring.
pub fn decode_bitstring(
    bitstring: SampledBitstring,
    verify_checksum: bool,
) -> Result<Decoded, DecodeError> {
    validate_markers(&bitstring)?;
    let digits = decode_digits(&bitstring)?;

    let identifier = match checksum::validate_digits(digits) {
        Ok(id) => Some(id),
        Err(err) if verify_checksum => return Err(err.into()),
        Err(err) => {
            debug!(%err, "accepting digits without a valid check digit");
            None
        }
    };

    Ok(Decoded {
        bitstring,
        digits,
        identifier,
    })
}

/// Map the eight 7-module windows to digits.
///
/// Windows 0-3 are looked up in the L-code table, 4-7 in the R-code table.
/// Guards are not checked here; see [`validate_markers`].
pub fn decode_digits(bits: &SampledBitstring) -> Result<[u8; 8], DecodeError> {
    let mut digits = [0u8; 8];
    for (position, slot) in digits.iter_mut().enumerate() {
        let side = if position < DIGITS_PER_SIDE {
            Side::Left
        } else {
            Side::Right
        };
        let window = bits.window(tables::window_offset(position), DIGIT_MODULES);
        let digit = tables::lookup(side, window)
            .ok_or(DecodeError::PatternLookupFailure { side, position })?;
        trace!(position, %side, digit, "window decoded");
        *slot = digit;
    }
    Ok(digits)
}
