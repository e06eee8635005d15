/// Guard pattern verification on a sampled bitstring
use crate::error::{DecodeError, Guard};
use crate::models::SampledBitstring;
use crate::symbology::tables::{
    CENTER_GUARD, CENTER_OFFSET, END_GUARD, END_OFFSET, START_GUARD, START_OFFSET,
};

const MARKERS: [(Guard, &str, usize); 3] = [
    (Guard::Start, START_GUARD, START_OFFSET),
    (Guard::Center, CENTER_GUARD, CENTER_OFFSET),
    (Guard::End, END_GUARD, END_OFFSET),
];

/// Check the start, center and end guards, in that order.
///
/// Exact match only; the first mismatching guard is reported.
pub fn validate_markers(bits: &SampledBitstring) -> Result<(), DecodeError> {
    for (guard, pattern, offset) in MARKERS {
        if bits.window(offset, pattern.len()) != pattern.as_bytes() {
            return Err(DecodeError::GuardMismatch { guard });
        }
    }
    Ok(())
}
