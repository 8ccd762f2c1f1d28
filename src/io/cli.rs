//! Command-line interface and run orchestration
//!
//! One invocation renders one arrangement: collect image files, decode them
//! into a gallery, resolve the canvas, compute the tile layout for the
//! seed, composite, and export. Settings are snapshotted by parsing and
//! never mutated afterwards.

use crate::gallery::{Gallery, loader};
use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_GAP, DEFAULT_OUTPUT_EXTENSION, DEFAULT_RATIO_KEY,
    DEFAULT_RESOLUTION_KEY, DEFAULT_SEED, DEFAULT_TILE_SIZE, DEFAULT_TILT_DEGREES, DEFAULT_ZOOM,
    OUTPUT_SUFFIX,
};
use crate::io::error::{CollageError, Result, invalid_parameter};
use crate::io::export::export_pixmap;
use crate::io::progress::ProgressManager;
use crate::layout::engine::{LayoutParams, TilingMode, compute_layout};
use crate::layout::ratio::{CanvasSize, canvas_size};
use crate::render::compositor::{Compositor, PanOffset, RenderOptions};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tiny_skia::Color;

/// Tiling strategy as exposed on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Rows of photos stacked vertically
    Bands,
    /// Columns of photos stacked horizontally
    Columns,
}

impl ModeArg {
    /// Map the CLI value onto the engine's tiling mode
    pub const fn tiling_mode(self) -> TilingMode {
        match self {
            Self::Bands => TilingMode::Bands,
            Self::Columns => TilingMode::Columns,
        }
    }
}

#[derive(Parser)]
#[command(name = "infinitile")]
#[command(
    version,
    about = "Render seamless infinite photo collages with reproducible layouts"
)]
/// Command-line arguments for the collage renderer
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Image files or directories to collage
    #[arg(value_name = "TARGET", required = true)]
    pub targets: Vec<PathBuf>,

    /// Output image path (JPEG unless the extension says otherwise)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Tiling strategy
    #[arg(long, value_enum, default_value_t = ModeArg::Columns)]
    pub mode: ModeArg,

    /// Perpendicular tile dimension in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: f64,

    /// Spacing between consecutive tiles and bands in pixels
    #[arg(long, default_value_t = DEFAULT_GAP)]
    pub gap: f64,

    /// Rotation of the tile field around the canvas center, in degrees
    #[arg(long, default_value_t = DEFAULT_TILT_DEGREES, allow_negative_numbers = true)]
    pub tilt: f64,

    /// Named output aspect ratio (3:2, 4:3, 1:1, 16:9, 21:9, 3:4, 2:3, 9:16)
    #[arg(long, default_value = DEFAULT_RATIO_KEY)]
    pub ratio: String,

    /// Named baseline output resolution (1080p, 2k, 4k, 5k)
    #[arg(long, default_value = DEFAULT_RESOLUTION_KEY)]
    pub resolution: String,

    /// Swap canvas orientation
    #[arg(long)]
    pub invert_ratio: bool,

    /// Background fill color as #RRGGBB
    #[arg(long, default_value = DEFAULT_BACKGROUND)]
    pub background: String,

    /// View scale used to convert pan input to canvas units
    #[arg(long, default_value_t = DEFAULT_ZOOM)]
    pub zoom: f64,

    /// Horizontal pan in screen pixels
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub pan_x: f64,

    /// Vertical pan in screen pixels
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub pan_y: f64,

    /// Layout seed in [0,1)
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: f64,

    /// Draw a fresh random seed instead of the fixed default
    #[arg(long)]
    pub random_seed: bool,

    /// Reorder photos with a seeded uniform shuffle before layout
    #[arg(long)]
    pub shuffle: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Parse a `#RRGGBB` hex string into an opaque fill color
///
/// # Errors
///
/// Returns an error unless the value is exactly six hex digits with an
/// optional leading `#`.
pub fn parse_hex_color(value: &str) -> Result<Color> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    if digits.len() != 6 {
        return Err(invalid_parameter(
            "background",
            &value,
            &"expected a #RRGGBB hex color",
        ));
    }
    let parsed = u32::from_str_radix(digits, 16)
        .map_err(|error| invalid_parameter("background", &value, &error))?;
    let red = ((parsed >> 16) & 0xFF) as u8;
    let green = ((parsed >> 8) & 0xFF) as u8;
    let blue = (parsed & 0xFF) as u8;
    Ok(Color::from_rgba8(red, green, blue, u8::MAX))
}

/// Orchestrates one collage render from parsed arguments
pub struct CollageProcessor {
    cli: Cli,
}

impl CollageProcessor {
    /// Create a processor over the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Render the collage according to the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, file collection, decoding,
    /// canvas allocation, or export fails.
    pub fn process(&mut self) -> Result<()> {
        self.validate()?;

        let files = self.collect_files()?;
        if files.is_empty() {
            return Err(CollageError::InvalidSourceData {
                reason: "no supported images found under the given targets".to_string(),
            });
        }

        let mut gallery = self.load_gallery(&files)?;

        let seed = if self.cli.random_seed {
            rand::random::<f64>()
        } else {
            self.cli.seed
        };
        if self.cli.shuffle {
            gallery.shuffle(seed.to_bits());
        }

        let canvas = canvas_size(&self.cli.ratio, &self.cli.resolution, self.cli.invert_ratio);
        let params = LayoutParams {
            mode: self.cli.mode.tiling_mode(),
            tile_size: self.cli.tile_size,
            gap: self.cli.gap,
        };
        let placements = compute_layout(
            &gallery.aspect_ratios(),
            &params,
            canvas.width,
            canvas.height,
            seed,
        );

        let options = RenderOptions {
            background: parse_hex_color(&self.cli.background)?,
            tilt_degrees: self.cli.tilt,
            offset: PanOffset {
                x: self.cli.pan_x / self.cli.zoom,
                y: self.cli.pan_y / self.cli.zoom,
            },
        };

        let mut compositor = Compositor::new(canvas)?;
        compositor.render(&gallery, &placements, &options);

        let output = self.output_path();
        export_pixmap(compositor.pixmap(), &output)?;
        self.report(canvas, placements.len(), seed, &output);

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !(self.cli.tile_size.is_finite() && self.cli.tile_size > 0.0) {
            return Err(invalid_parameter(
                "tile-size",
                &self.cli.tile_size,
                &"must be a positive finite number",
            ));
        }
        if !(self.cli.gap.is_finite() && self.cli.gap >= 0.0) {
            return Err(invalid_parameter(
                "gap",
                &self.cli.gap,
                &"must be a non-negative finite number",
            ));
        }
        if !(self.cli.zoom.is_finite() && self.cli.zoom > 0.0) {
            return Err(invalid_parameter(
                "zoom",
                &self.cli.zoom,
                &"must be a positive finite number",
            ));
        }
        if !self.cli.tilt.is_finite() {
            return Err(invalid_parameter(
                "tilt",
                &self.cli.tilt,
                &"must be a finite angle in degrees",
            ));
        }
        if !(self.cli.pan_x.is_finite() && self.cli.pan_y.is_finite()) {
            return Err(invalid_parameter(
                "pan",
                &format!("{}, {}", self.cli.pan_x, self.cli.pan_y),
                &"pan components must be finite",
            ));
        }
        if !(0.0..1.0).contains(&self.cli.seed) {
            return Err(invalid_parameter(
                "seed",
                &self.cli.seed,
                &"must lie in [0,1)",
            ));
        }
        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for target in &self.cli.targets {
            if target.is_file() {
                if loader::is_supported_image(target) {
                    files.push(target.clone());
                } else {
                    return Err(invalid_parameter(
                        "target",
                        &target.display(),
                        &"not a supported image file",
                    ));
                }
            } else if target.is_dir() {
                let entries =
                    std::fs::read_dir(target).map_err(|source| CollageError::FileSystem {
                        path: target.clone(),
                        operation: "read directory",
                        source,
                    })?;
                for entry in entries {
                    let path = entry
                        .map_err(|source| CollageError::FileSystem {
                            path: target.clone(),
                            operation: "read directory entry",
                            source,
                        })?
                        .path();
                    if path.is_file() && loader::is_supported_image(&path) {
                        files.push(path);
                    }
                }
            } else {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"must be an image file or a directory",
                ));
            }
        }
        files.sort();
        Ok(files)
    }

    fn load_gallery(&self, files: &[PathBuf]) -> Result<Gallery> {
        let progress = self
            .cli
            .should_show_progress()
            .then(|| ProgressManager::new(files.len()));

        let mut gallery = Gallery::new();
        for file in files {
            if let Some(ref bar) = progress {
                bar.start_photo(file);
            }
            gallery.push(loader::load_photo(file)?);
            if let Some(ref bar) = progress {
                bar.complete_photo();
            }
        }
        if let Some(ref bar) = progress {
            bar.finish();
        }
        Ok(gallery)
    }

    fn output_path(&self) -> PathBuf {
        self.cli.output.clone().unwrap_or_else(|| {
            let first = self.cli.targets.first();
            let stem = first
                .map(|target| target.file_stem().unwrap_or_default().to_string_lossy())
                .unwrap_or_default();
            let name = format!("{stem}{OUTPUT_SUFFIX}.{DEFAULT_OUTPUT_EXTENSION}");
            match first.and_then(|target| target.parent()) {
                Some(parent) if !parent.as_os_str().is_empty() => parent.join(name),
                _ => PathBuf::from(name),
            }
        })
    }

    // Allow print for the end-of-run summary
    #[allow(clippy::print_stderr)]
    fn report(&self, canvas: CanvasSize, tile_count: usize, seed: f64, output: &Path) {
        if self.cli.quiet {
            return;
        }
        eprintln!(
            "{}x{} canvas, {tile_count} tiles, seed {seed:.6} -> {}",
            canvas.width,
            canvas.height,
            output.display()
        );
    }
}
