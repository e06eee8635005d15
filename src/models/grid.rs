use crate::error::GridError;

/// Monochrome pixel grid, one byte per pixel holding 0 (white) or 1 (black)
///
/// Stored as a single row-major buffer. Out-of-range reads return 0, so the
/// area around the image behaves like quiet zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Create an all-white grid with given dimensions.
    ///
    /// Dimensions whose pixel count overflows `usize` yield an empty 0x0
    /// grid; use [`PixelGrid::try_new`] to get the error instead.
    pub fn new(width: usize, height: usize) -> Self {
        Self::try_new(width, height).unwrap_or_default()
    }

    /// Create an all-white grid, failing when `width * height` overflows.
    pub fn try_new(width: usize, height: usize) -> Result<Self, GridError> {
        let len = width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Build a grid from row-major pixel values.
    ///
    /// Fails when a dimension is zero, when `data` does not hold exactly
    /// `width * height` values, or when a value is not 0 or 1.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension);
        }
        let expected = width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;
        if data.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        if let Some(index) = data.iter().position(|&v| v > 1) {
            return Err(GridError::InvalidPixel {
                index,
                value: data[index],
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Caller guarantees `data.len() == width * height` and values in {0,1}.
    pub(crate) fn from_parts(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            data,
        }
    }

    /// Get grid width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get grid height
    pub fn height(&self) -> usize {
        self.height
    }

    /// True when the grid holds no pixels
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get pixel at (x, y)
    pub fn get(&self, x: usize, y: usize) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data[y * self.width + x]
    }

    /// Set pixel at (x, y); any non-zero value is stored as 1
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.data[y * self.width + x] = u8::from(value != 0);
    }

    /// Invert pixel at (x, y)
    pub fn toggle(&mut self, x: usize, y: usize) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.data[y * self.width + x] ^= 1;
    }

    /// Pixels of row `y`, or an empty slice when out of range
    pub fn row(&self, y: usize) -> &[u8] {
        if y >= self.height {
            return &[];
        }
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks_exact panics on 0
        self.data.chunks_exact(self.width.max(1))
    }

    /// Count of black pixels
    pub fn black_pixels(&self) -> usize {
        self.data.iter().filter(|&&v| v == 1).count()
    }

    /// Get raw row-major pixel data
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the grid, returning its pixel buffer
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            data: Vec::new(),
        }
    }
}
