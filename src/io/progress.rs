//! Decode progress display
//!
//! Wraps a single indicatif bar over the photo batch being decoded. Layout
//! and compositing are fast enough that only the decode pass gets a bar.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static DECODE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("Decoding [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for one photo batch
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a bar sized to the number of photos to decode
    pub fn new(photo_count: usize) -> Self {
        let bar = ProgressBar::new(photo_count as u64);
        bar.set_style(DECODE_STYLE.clone());
        Self { bar }
    }

    /// Show the file currently being decoded
    pub fn start_photo(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Mark the current photo as decoded
    pub fn complete_photo(&self) {
        self.bar.inc(1);
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
