//! EAN-8 image synthesis
//!
//! A symbol row is laid out left to right as:
//! quiet zone, start guard, 4 L-code digits, center guard, 4 R-code digits
//! (check digit last), end guard, quiet zone. Every module expands to
//! `bar_width` pixels and the row is repeated `height` times between two
//! blank bands of `spacing` rows.

use crate::error::{EncodeError, Side};
use crate::models::{BarcodeGeometry, Identifier, PixelGrid, SampledBitstring};
use crate::symbology::checksum;
use crate::symbology::tables::{
    CENTER_GUARD, DIGITS_PER_SIDE, END_GUARD, START_GUARD, TOTAL_MODULES, pattern_for,
};
use tracing::debug;

/// Validate `identifier` and render it with `geometry`.
///
/// Returns no grid when the identifier fails validation.
pub fn encode(identifier: &str, geometry: &BarcodeGeometry) -> Result<PixelGrid, EncodeError> {
    let identifier = checksum::validate(identifier)?;
    encode_identifier(&identifier, geometry)
}

/// Render an already validated identifier.
///
/// The only failure left is [`EncodeError::GridTooLarge`].
pub fn encode_identifier(
    identifier: &Identifier,
    geometry: &BarcodeGeometry,
) -> Result<PixelGrid, EncodeError> {
    let width = geometry.total_width().ok_or(EncodeError::GridTooLarge)?;
    let height = geometry.total_height().ok_or(EncodeError::GridTooLarge)?;
    let total = width.checked_mul(height).ok_or(EncodeError::GridTooLarge)?;

    let modules = module_sequence(identifier);
    let row = bar_row(&modules, geometry.spacing(), geometry.bar_width(), width);

    let mut data = Vec::with_capacity(total);
    let margin_len = geometry.spacing() * width;
    data.resize(margin_len, 0);
    for _ in 0..geometry.height() {
        data.extend_from_slice(&row);
    }
    data.resize(total, 0);

    debug!(
        identifier = identifier.as_str(),
        width, height, "encoded EAN-8 symbol"
    );
    Ok(PixelGrid::from_parts(width, height, data))
}

/// The 67 modules of the symbol for `identifier`, guards included.
///
/// This is exactly what a decoder samples from a clean rendering.
pub fn module_sequence(identifier: &Identifier) -> SampledBitstring {
    let mut bits = [b'0'; TOTAL_MODULES];
    let mut pos = 0;
    let mut push = |pattern: &str| {
        let bytes = pattern.as_bytes();
        bits[pos..pos + bytes.len()].copy_from_slice(bytes);
        pos += bytes.len();
    };

    push(START_GUARD);
    for (i, &digit) in identifier.digits().iter().enumerate() {
        if i == DIGITS_PER_SIDE {
            push(CENTER_GUARD);
        }
        let side = if i < DIGITS_PER_SIDE {
            Side::Left
        } else {
            Side::Right
        };
        // identifier digits are 0-9
        if let Some(pattern) = pattern_for(side, digit) {
            push(pattern);
        }
    }
    push(END_GUARD);

    SampledBitstring::from_bits(bits)
}

fn bar_row(modules: &SampledBitstring, spacing: usize, bar_width: usize, width: usize) -> Vec<u8> {
    let mut row = Vec::with_capacity(width);
    row.resize(spacing, 0);
    for &m in modules.as_bytes() {
        let value = m - b'0';
        row.extend(std::iter::repeat_n(value, bar_width));
    }
    row.resize(width, 0);
    row
}
