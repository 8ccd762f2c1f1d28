//! Photo collection ownership and decoding
//!
//! This module contains the gallery-related functionality:
//! - Decoding image files into ready photos
//! - Ordered photo ownership with seeded reordering

/// Image decoding into ready photos
pub mod loader;
/// Photo and gallery collection types
pub mod photo;

pub use photo::{Gallery, Photo};
