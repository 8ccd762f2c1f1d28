//! Photo and gallery collection types
//!
//! A `Photo` couples a decoded, premultiplied pixmap with its intrinsic
//! aspect ratio. The `Gallery` owns its photos for their entire membership;
//! removing a photo or clearing the collection drops it, releasing the
//! decoded pixels exactly once.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::path::{Path, PathBuf};
use tiny_skia::{Pixmap, PixmapRef};

/// A ready-to-draw photo with known dimensions
///
/// Construction requires a decoded pixmap, so every photo handed to the
/// layout engine already has a strictly positive, finite aspect ratio.
#[derive(Debug, Clone)]
pub struct Photo {
    pixmap: Pixmap,
    aspect_ratio: f64,
    source: PathBuf,
}

impl Photo {
    /// Wrap a decoded pixmap, deriving the aspect ratio from its dimensions
    ///
    /// Pixmaps are never zero-sized, so the ratio is positive and finite.
    pub fn from_pixmap(pixmap: Pixmap, source: PathBuf) -> Self {
        let aspect_ratio = f64::from(pixmap.width()) / f64::from(pixmap.height());
        Self {
            pixmap,
            aspect_ratio,
            source,
        }
    }

    /// Intrinsic width over height
    pub const fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Borrow the drawable pixel data
    pub fn pixmap(&self) -> PixmapRef<'_> {
        self.pixmap.as_ref()
    }

    /// Pixel width of the decoded image
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Pixel height of the decoded image
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Path the photo was decoded from
    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// Ordered photo collection backing one arrangement
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    photos: Vec<Photo>,
}

impl Gallery {
    /// Create an empty gallery
    pub const fn new() -> Self {
        Self { photos: Vec::new() }
    }

    /// Append a photo, transferring ownership to the gallery
    pub fn push(&mut self, photo: Photo) {
        self.photos.push(photo);
    }

    /// Number of photos in the collection
    pub const fn len(&self) -> usize {
        self.photos.len()
    }

    /// Whether the collection holds no photos
    pub const fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// All photos in collection order
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Photo at the given collection index, if any
    pub fn get(&self, index: usize) -> Option<&Photo> {
        self.photos.get(index)
    }

    /// Aspect ratios in collection order, as consumed by the layout engine
    pub fn aspect_ratios(&self) -> Vec<f64> {
        self.photos.iter().map(Photo::aspect_ratio).collect()
    }

    /// Reorder photos with a seeded uniform Fisher-Yates shuffle
    ///
    /// The same seed always produces the same permutation, so a shuffled
    /// arrangement stays reproducible.
    pub fn shuffle(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        self.photos.shuffle(&mut rng);
    }

    /// Remove all photos, releasing each decoded pixmap
    pub fn clear(&mut self) {
        self.photos.clear();
    }
}
