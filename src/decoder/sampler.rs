/// Scan-line sampling: pixel grid to one bit per module
use crate::decoder::config::Sampling;
use crate::error::DecodeError;
use crate::models::{PixelGrid, SampledBitstring};
use crate::symbology::tables::TOTAL_MODULES;
use tracing::debug;

/// Sample with the given strategy.
///
/// Guard-aligned sampling falls back to header-width sampling when the bar
/// region does not split into 67 modules, which happens when an outer guard
/// bar is missing. The guard check then names the damaged guard.
pub fn sample_with(grid: &PixelGrid, sampling: Sampling) -> Result<SampledBitstring, DecodeError> {
    match sampling {
        Sampling::HeaderWidth => sample(grid),
        Sampling::GuardAligned => match sample_aligned(grid) {
            Err(err @ DecodeError::UnalignedBarRegion { span }) => {
                debug!(span, "bar region unaligned, sampling by image width");
                sample(grid).map_err(|_| err)
            }
            other => other,
        },
    }
}

/// Sample using the image width as the symbol width.
///
/// Module width is `width / 67` (truncated) and the leftover pixels are split
/// evenly as a margin on both sides. Each module is read on the middle row and
/// becomes '1' when more than half of its pixels are black.
pub fn sample(grid: &PixelGrid) -> Result<SampledBitstring, DecodeError> {
    if grid.is_empty() {
        return Err(DecodeError::EmptyGrid);
    }
    let width = grid.width();
    let module = width / TOTAL_MODULES;
    if module == 0 {
        return Err(DecodeError::GridTooNarrow { width });
    }
    let margin = (width - module * TOTAL_MODULES) / 2;
    let y = grid.height() / 2;

    debug!(width, module, margin, row = y, "header-width sampling");
    Ok(read_modules(grid.row(y), margin, module))
}

/// Sample using the bar region found on the middle row.
///
/// The start guard opens and the end guard closes with a bar, so the first
/// and last black pixels bound the symbol exactly. The span must divide into
/// 67 equal modules.
pub fn sample_aligned(grid: &PixelGrid) -> Result<SampledBitstring, DecodeError> {
    if grid.is_empty() {
        return Err(DecodeError::EmptyGrid);
    }
    let y = grid.height() / 2;
    let row = grid.row(y);

    let first = row.iter().position(|&v| v == 1).ok_or(DecodeError::NoBarsFound)?;
    let last = row.iter().rposition(|&v| v == 1).ok_or(DecodeError::NoBarsFound)?;
    let span = last - first + 1;
    if span % TOTAL_MODULES != 0 {
        return Err(DecodeError::UnalignedBarRegion { span });
    }
    let module = span / TOTAL_MODULES;

    debug!(span, module, margin = first, row = y, "guard-aligned sampling");
    Ok(read_modules(row, first, module))
}

fn read_modules(row: &[u8], margin: usize, module: usize) -> SampledBitstring {
    let mut bits = [b'0'; TOTAL_MODULES];
    for (i, bit) in bits.iter_mut().enumerate() {
        let start = margin + i * module;
        let sum: usize = row
            .iter()
            .skip(start)
            .take(module)
            .map(|&v| v as usize)
            .sum();
        if sum > module / 2 {
            *bit = b'1';
        }
    }
    SampledBitstring::from_bits(bits)
}
