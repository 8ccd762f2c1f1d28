//! Named ratio and resolution lookup with canvas sizing
//!
//! Resolves the configuration surface's named aspect ratios and baseline
//! resolutions into integer canvas dimensions. Keys form a closed
//! enumeration; an unrecognized key falls back to the documented defaults
//! rather than failing.

/// Named aspect ratios, width over height (landscape when >= 1)
pub const RATIOS: [(&str, f64); 8] = [
    ("3:2", 1.5),
    ("4:3", 1.333),
    ("1:1", 1.0),
    ("16:9", 1.777),
    ("21:9", 2.333),
    ("3:4", 0.75),
    ("2:3", 0.666),
    ("9:16", 0.5625),
];

/// Named baseline resolutions in pixels along the longer canvas axis
pub const RESOLUTIONS: [(&str, u32); 4] = [
    ("1080p", 1920),
    ("2k", 2560),
    ("4k", 3840),
    ("5k", 5120),
];

/// Ratio used when a ratio key is not recognized
pub const FALLBACK_RATIO: f64 = 1.5;

/// Baseline length used when a resolution key is not recognized
pub const FALLBACK_RESOLUTION: u32 = 1920;

/// Integer output canvas dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
}

/// Resolve a named aspect ratio, falling back to [`FALLBACK_RATIO`]
///
/// Lookup is case-insensitive so `16:9` and CLI-shell variants match alike.
pub fn resolve_ratio(key: &str) -> f64 {
    RATIOS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map_or(FALLBACK_RATIO, |(_, value)| *value)
}

/// Resolve a named resolution, falling back to [`FALLBACK_RESOLUTION`]
pub fn resolve_resolution(key: &str) -> u32 {
    RESOLUTIONS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map_or(FALLBACK_RESOLUTION, |(_, value)| *value)
}

/// Compute integer canvas dimensions from named keys
///
/// The baseline length is assigned to the longer axis: a ratio >= 1 pins
/// the width and derives the height, a ratio < 1 does the opposite. When
/// `inverted` is set the ratio is replaced by its reciprocal before sizing,
/// swapping the canvas orientation. Both dimensions are at least 1.
pub fn canvas_size(ratio_key: &str, resolution_key: &str, inverted: bool) -> CanvasSize {
    let base = f64::from(resolve_resolution(resolution_key));
    let mut ratio = resolve_ratio(ratio_key);
    if inverted {
        ratio = 1.0 / ratio;
    }

    let (width, height) = if ratio >= 1.0 {
        (base, base / ratio)
    } else {
        (base * ratio, base)
    };

    CanvasSize {
        width: (width.round() as u32).max(1),
        height: (height.round() as u32).max(1),
    }
}
