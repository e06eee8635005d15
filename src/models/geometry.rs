use crate::error::EncodeError;
use crate::symbology::tables::TOTAL_MODULES;

/// Rendering parameters for a barcode image
///
/// All three values are strictly positive; [`BarcodeGeometry::new`] is the
/// only way to build one from untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarcodeGeometry {
    spacing: usize,
    bar_width: usize,
    height: usize,
}

impl BarcodeGeometry {
    /// Default quiet zone in pixels
    pub const DEFAULT_SPACING: usize = 4;
    /// Default module width in pixels
    pub const DEFAULT_BAR_WIDTH: usize = 3;
    /// Default bar height in pixels
    pub const DEFAULT_HEIGHT: usize = 50;

    /// Validate and build a geometry.
    ///
    /// Zero or negative values fail with [`EncodeError::InvalidGeometry`]
    /// naming the first offending field.
    pub fn new(spacing: i64, bar_width: i64, height: i64) -> Result<Self, EncodeError> {
        Ok(Self {
            spacing: positive("spacing", spacing)?,
            bar_width: positive("bar_width", bar_width)?,
            height: positive("height", height)?,
        })
    }

    /// Quiet zone width on all four sides
    pub fn spacing(&self) -> usize {
        self.spacing
    }

    /// Pixel width of one module
    pub fn bar_width(&self) -> usize {
        self.bar_width
    }

    /// Bar height, margins excluded
    pub fn height(&self) -> usize {
        self.height
    }

    /// `2*spacing + 67*bar_width`, or `None` on overflow
    pub fn total_width(&self) -> Option<usize> {
        self.bar_width
            .checked_mul(TOTAL_MODULES)?
            .checked_add(self.spacing.checked_mul(2)?)
    }

    /// `height + 2*spacing`, or `None` on overflow
    pub fn total_height(&self) -> Option<usize> {
        self.height.checked_add(self.spacing.checked_mul(2)?)
    }
}

impl Default for BarcodeGeometry {
    fn default() -> Self {
        Self {
            spacing: Self::DEFAULT_SPACING,
            bar_width: Self::DEFAULT_BAR_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }
}

fn positive(field: &'static str, value: i64) -> Result<usize, EncodeError> {
    if value <= 0 {
        return Err(EncodeError::InvalidGeometry { field, value });
    }
    usize::try_from(value).map_err(|_| EncodeError::GridTooLarge)
}
