use crate::error::DecodeError;
use crate::symbology::tables::TOTAL_MODULES;
use std::fmt;

/// One bit per module across the bar region, as ASCII `'0'`/`'1'`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampledBitstring {
    bits: [u8; TOTAL_MODULES],
}

impl SampledBitstring {
    /// Caller guarantees every byte is `b'0'` or `b'1'`.
    pub(crate) fn from_bits(bits: [u8; TOTAL_MODULES]) -> Self {
        debug_assert!(bits.iter().all(|b| matches!(b, b'0' | b'1')));
        Self { bits }
    }

    /// Parse a 67 character string of `'0'`/`'1'`
    pub fn parse(s: &str) -> Result<Self, DecodeError> {
        let bytes = s.as_bytes();
        let malformed = DecodeError::MalformedBitstring { len: bytes.len() };
        if bytes.len() != TOTAL_MODULES || !bytes.iter().all(|b| matches!(b, b'0' | b'1')) {
            return Err(malformed);
        }
        let mut bits = [b'0'; TOTAL_MODULES];
        bits.copy_from_slice(bytes);
        Ok(Self { bits })
    }

    /// `len` modules starting at `offset`; empty when out of range
    pub fn window(&self, offset: usize, len: usize) -> &[u8] {
        offset
            .checked_add(len)
            .and_then(|end| self.bits.get(offset..end))
            .unwrap_or(&[])
    }

    /// Module value at `index`
    pub fn bit(&self, index: usize) -> Option<bool> {
        self.bits.get(index).map(|&b| b == b'1')
    }

    /// Invert the module at `index` (no-op when out of range)
    pub fn flip(&mut self, index: usize) {
        if let Some(b) = self.bits.get_mut(index) {
            *b = if *b == b'1' { b'0' } else { b'1' };
        }
    }

    /// Replace `pattern.len()` modules starting at `offset`.
    ///
    /// Bytes other than `b'0'`/`b'1'` and out-of-range positions are ignored.
    pub fn overwrite(&mut self, offset: usize, pattern: &[u8]) {
        let Some(tail) = self.bits.get_mut(offset..) else {
            return;
        };
        for (b, &p) in tail.iter_mut().zip(pattern) {
            if matches!(p, b'0' | b'1') {
                *b = p;
            }
        }
    }

    /// View as a string slice
    pub fn as_str(&self) -> &str {
        // bits are ASCII by construction
        std::str::from_utf8(&self.bits).unwrap_or_default()
    }

    /// Raw ASCII bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }
}

impl fmt::Display for SampledBitstring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
