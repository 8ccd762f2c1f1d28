//! Deterministic infinite-collage layout and rendering
//!
//! The system arranges a photo collection into a seamless, pannable collage:
//! a seeded layout engine computes where every tile goes on an overscanned
//! field around a fixed-size canvas, and a compositor paints the field with
//! a shared rigid transform before overlaying a fixed vignette.

#![forbid(unsafe_code)]

/// Photo collection ownership, decoding, and ordering
pub mod gallery;
/// Input/output operations, CLI surface, and error handling
pub mod io;
/// Deterministic tiling core: seeded sequence, ratio resolution, placement
pub mod layout;
/// Compositing of tile placements onto the output canvas
pub mod render;

pub use io::error::{CollageError, Result};
