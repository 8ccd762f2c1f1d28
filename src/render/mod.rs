//! Compositing of tile placements onto the output canvas
//!
//! This module contains the rendering functionality:
//! - Field-transformed tile drawing over a background fill
//! - The fixed radial vignette overlay

/// Tile field compositing onto the output pixmap
pub mod compositor;
/// Fixed radial vignette overlay
pub mod vignette;

pub use compositor::{Compositor, PanOffset, RenderOptions};
