//! Deterministic tiling core
//!
//! This module contains the layout-related functionality:
//! - Seeded pseudo-random sequence generation
//! - Named aspect-ratio and resolution resolution
//! - Tile placement over the overscanned band/column field

/// Band and column tile placement engine
pub mod engine;
/// Named ratio and resolution lookup with canvas sizing
pub mod ratio;
/// Seeded deterministic pseudo-random sequence
pub mod sequence;

pub use engine::{LayoutParams, TilePlacement, TilingMode, compute_layout};
pub use ratio::CanvasSize;
pub use sequence::SeededSequence;
