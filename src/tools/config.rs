use crate::decoder::Sampling;
use crate::models::BarcodeGeometry;
use std::sync::OnceLock;

fn parse_env_positive(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&v| v > 0)
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

static DEFAULT_SPACING: OnceLock<usize> = OnceLock::new();

/// Quiet zone default, `EAN8_SPACING` or 4
pub fn default_spacing() -> usize {
    *DEFAULT_SPACING
        .get_or_init(|| parse_env_positive("EAN8_SPACING", BarcodeGeometry::DEFAULT_SPACING))
}

static DEFAULT_BAR_WIDTH: OnceLock<usize> = OnceLock::new();

/// Module width default, `EAN8_BAR_WIDTH` or 3
pub fn default_bar_width() -> usize {
    *DEFAULT_BAR_WIDTH
        .get_or_init(|| parse_env_positive("EAN8_BAR_WIDTH", BarcodeGeometry::DEFAULT_BAR_WIDTH))
}

static DEFAULT_HEIGHT: OnceLock<usize> = OnceLock::new();

/// Bar height default, `EAN8_HEIGHT` or 50
pub fn default_height() -> usize {
    *DEFAULT_HEIGHT.get_or_init(|| parse_env_positive("EAN8_HEIGHT", BarcodeGeometry::DEFAULT_HEIGHT))
}

static LEGACY_SAMPLING: OnceLock<bool> = OnceLock::new();

/// Sampling strategy default; `EAN8_LEGACY_SAMPLING=1` selects header-width
pub fn default_sampling() -> Sampling {
    let legacy = *LEGACY_SAMPLING.get_or_init(|| parse_env_bool_u8("EAN8_LEGACY_SAMPLING", false));
    if legacy {
        Sampling::HeaderWidth
    } else {
        Sampling::GuardAligned
    }
}
