//! Band and column tile placement engine
//!
//! Computes where every tile of the collage goes: an ordered list of
//! placements covering a generously overscanned field around the canvas,
//! so that panning within the supported drag range always finds covering
//! tiles without recomputing geometry per pan step. The walk is a pure
//! function of its inputs; re-running it with unchanged inputs yields
//! byte-identical placements.

use crate::layout::sequence::SeededSequence;

/// Bands or columns computed on each side of center
pub const OVERSCAN_LIMIT: i64 = 40;

/// Overscan span along a band or column, in canvas extents on each side
pub const OVERSCAN_EXTENTS: f64 = 4.0;

/// Sample-index multiplier decorrelating a band's start photo from its phase
pub const BAND_START_DECORRELATION: i64 = 2;

/// Sample-index multiplier decorrelating a column's start photo from its phase
pub const COLUMN_START_DECORRELATION: i64 = 3;

/// Photo-index stride between consecutive tiles in a column
///
/// Bands advance by 1; columns advance by 7. The differing strides keep the
/// two modes from repeating with the same visual period on small photo sets.
pub const COLUMN_INDEX_STRIDE: usize = 7;

/// Tiling strategy for the collage field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TilingMode {
    /// Rows of photos stacked vertically, each row tiled left-to-right
    Bands,
    /// Columns of photos stacked horizontally, each column tiled top-to-bottom
    #[default]
    Columns,
}

/// Layout-relevant settings snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Tiling strategy
    pub mode: TilingMode,
    /// Perpendicular-axis tile dimension in pixels, > 0
    pub tile_size: f64,
    /// Spacing between consecutive tiles and bands in pixels, >= 0
    pub gap: f64,
}

/// One resolved instruction for drawing a single photo instance
///
/// Ephemeral: recomputed on every render, never persisted. The drawn
/// `width / height` always equals the referenced photo's aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    /// Index into the photo collection, always < photo count
    pub photo_index: usize,
    /// Left edge in untransformed canvas units
    pub x: f64,
    /// Top edge in untransformed canvas units
    pub y: f64,
    /// Drawn width in pixels
    pub width: f64,
    /// Drawn height in pixels
    pub height: f64,
}

/// Compute the full placement list for one arrangement
///
/// `aspect_ratios` holds each photo's width-over-height ratio in collection
/// order; placements reference photos by index into that slice. Ratios are
/// assumed strictly positive and finite, and `tile_size + gap` must be
/// positive so every walk terminates (caller contract, not re-checked).
///
/// An empty slice yields an empty placement list. A single photo is valid
/// and tiles repeatedly. Each band (or column) gets a seeded phase jitter so
/// rows never align into a visible grid, and a seeded starting photo index
/// decorrelated from the phase by sampling the hash at a scaled index.
pub fn compute_layout(
    aspect_ratios: &[f64],
    params: &LayoutParams,
    canvas_width: u32,
    canvas_height: u32,
    seed: f64,
) -> Vec<TilePlacement> {
    let count = aspect_ratios.len();
    if count == 0 {
        return Vec::new();
    }

    let sequence = SeededSequence::new(seed);
    let pitch = params.tile_size + params.gap;
    let mut placements = Vec::new();

    match params.mode {
        TilingMode::Bands => {
            let extent = f64::from(canvas_width);
            let span = OVERSCAN_EXTENTS * extent;
            for band in -OVERSCAN_LIMIT..OVERSCAN_LIMIT {
                let y = band as f64 * pitch;
                let mut x = sequence.sample(band).mul_add(extent, -span);
                let mut index =
                    start_index(sequence.sample(band * BAND_START_DECORRELATION), count);
                while x < span {
                    let ratio = aspect_ratios.get(index).copied().unwrap_or(1.0);
                    let width = params.tile_size * ratio;
                    placements.push(TilePlacement {
                        photo_index: index,
                        x,
                        y,
                        width,
                        height: params.tile_size,
                    });
                    x += width + params.gap;
                    index = (index + 1) % count;
                }
            }
        }
        TilingMode::Columns => {
            let extent = f64::from(canvas_height);
            let span = OVERSCAN_EXTENTS * extent;
            for column in -OVERSCAN_LIMIT..OVERSCAN_LIMIT {
                let x = column as f64 * pitch;
                let mut y = sequence.sample(column).mul_add(extent, -span);
                let mut index =
                    start_index(sequence.sample(column * COLUMN_START_DECORRELATION), count);
                while y < span {
                    let ratio = aspect_ratios.get(index).copied().unwrap_or(1.0);
                    let height = params.tile_size / ratio;
                    placements.push(TilePlacement {
                        photo_index: index,
                        x,
                        y,
                        width: params.tile_size,
                        height,
                    });
                    y += height + params.gap;
                    index = (index + COLUMN_INDEX_STRIDE) % count;
                }
            }
        }
    }

    placements
}

// Samples are in [0,1) so the floor is already below count; the final
// modulo keeps the wraparound contract explicit.
fn start_index(sample: f64, count: usize) -> usize {
    ((sample * count as f64).floor() as usize) % count
}
