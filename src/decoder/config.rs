/// How the module width is inferred when sampling a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sampling {
    /// Measure the bar region on the scan line (first to last dark pixel)
    /// and divide it into 67 modules. Works for any quiet zone width.
    #[default]
    GuardAligned,
    /// `width / 67` with truncating division and a centered margin.
    ///
    /// Matches images whose quiet zone is narrower than half a symbol
    /// (`spacing <= 33`); wider margins shift every module boundary.
    HeaderWidth,
}

/// Decoder settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Module width inference
    pub sampling: Sampling,
    /// Reject decoded digits whose check digit does not validate
    pub verify_checksum: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            sampling: Sampling::GuardAligned,
            verify_checksum: true,
        }
    }
}

impl DecodeOptions {
    /// Options reproducing the plain header-width decoder: truncating module
    /// width and no checksum re-validation.
    pub fn legacy() -> Self {
        Self {
            sampling: Sampling::HeaderWidth,
            verify_checksum: false,
        }
    }

    /// Set the sampling strategy
    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Enable or disable checksum re-validation of decoded digits
    pub fn with_checksum_verification(mut self, verify: bool) -> Self {
        self.verify_checksum = verify;
        self
    }
}
