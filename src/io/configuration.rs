//! Defaults and export constants

// Default values for configurable parameters
/// Default perpendicular tile dimension in pixels
pub const DEFAULT_TILE_SIZE: f64 = 300.0;

/// Default spacing between tiles and bands in pixels
pub const DEFAULT_GAP: f64 = 12.0;

/// Default rotation of the tile field in degrees
pub const DEFAULT_TILT_DEGREES: f64 = -12.0;

/// Default view scale used to convert pan input
pub const DEFAULT_ZOOM: f64 = 0.4;

/// Fixed default seed for reproducible arrangements
pub const DEFAULT_SEED: f64 = 0.42;

/// Default named aspect ratio
pub const DEFAULT_RATIO_KEY: &str = "3:2";

/// Default named baseline resolution
pub const DEFAULT_RESOLUTION_KEY: &str = "1080p";

/// Default background fill color
pub const DEFAULT_BACKGROUND: &str = "#000000";

// Output settings
/// JPEG quality for exported collages (0.92 on the canvas scale)
pub const JPEG_EXPORT_QUALITY: u8 = 92;

/// Suffix added to default output filenames
pub const OUTPUT_SUFFIX: &str = "_collage";

/// Extension used when no output path is given
pub const DEFAULT_OUTPUT_EXTENSION: &str = "jpg";
