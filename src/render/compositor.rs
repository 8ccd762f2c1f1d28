//! Tile field compositing onto the output pixmap
//!
//! One shared rigid transform positions the whole tile field: translate to
//! the canvas center, rotate by the tilt angle, then translate by the pan
//! offset. Rotation therefore pivots around the canvas center and panning
//! moves the field coherently. Each tile is drawn with its own
//! aspect-correct size under that transform, and a fixed vignette is
//! overlaid last.

use crate::gallery::Gallery;
use crate::io::error::{Result, render_error};
use crate::layout::engine::TilePlacement;
use crate::layout::ratio::CanvasSize;
use crate::render::vignette;
use tiny_skia::{BlendMode, Color, FilterQuality, Pixmap, PixmapPaint, Transform};

/// Pan offset in untransformed canvas units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanOffset {
    /// Horizontal pan component
    pub x: f64,
    /// Vertical pan component
    pub y: f64,
}

/// View settings applied by the compositor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Fill behind the tiles
    pub background: Color,
    /// Rotation of the tile field around the canvas center
    pub tilt_degrees: f64,
    /// Pan offset applied inside the rotated field
    pub offset: PanOffset,
}

/// Owner of the shared rendering surface
pub struct Compositor {
    pixmap: Pixmap,
}

impl Compositor {
    /// Allocate an output canvas of the given size
    ///
    /// # Errors
    ///
    /// Returns an error if the pixmap cannot be allocated, which only
    /// happens for zero or overflowing dimensions.
    pub fn new(canvas: CanvasSize) -> Result<Self> {
        let pixmap = Pixmap::new(canvas.width, canvas.height)
            .ok_or_else(|| render_error("canvas allocation", "invalid canvas dimensions"))?;
        Ok(Self { pixmap })
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Borrow the rendered surface
    pub const fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Take ownership of the rendered surface
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// Paint one arrangement onto the canvas
    ///
    /// Fills the background, draws every placement under the shared field
    /// transform, then overlays the vignette. An empty placement list
    /// leaves a solid background with no vignette, matching the empty
    /// collection contract.
    pub fn render(
        &mut self,
        gallery: &Gallery,
        placements: &[TilePlacement],
        options: &RenderOptions,
    ) {
        self.pixmap.fill(options.background);
        if placements.is_empty() {
            return;
        }

        let field = self.field_transform(options);
        let paint = PixmapPaint {
            opacity: 1.0,
            blend_mode: BlendMode::SourceOver,
            quality: FilterQuality::Bilinear,
        };

        for placement in placements {
            let Some(photo) = gallery.get(placement.photo_index) else {
                continue;
            };
            let scale_x = placement.width / f64::from(photo.width());
            let scale_y = placement.height / f64::from(photo.height());
            let transform = field
                .pre_concat(Transform::from_translate(
                    placement.x as f32,
                    placement.y as f32,
                ))
                .pre_concat(Transform::from_scale(scale_x as f32, scale_y as f32));
            self.pixmap
                .draw_pixmap(0, 0, photo.pixmap(), &paint, transform, None);
        }

        vignette::apply(&mut self.pixmap);
    }

    fn field_transform(&self, options: &RenderOptions) -> Transform {
        let center_x = self.pixmap.width() as f32 / 2.0;
        let center_y = self.pixmap.height() as f32 / 2.0;
        Transform::from_translate(center_x, center_y)
            .pre_concat(Transform::from_rotate(options.tilt_degrees as f32))
            .pre_concat(Transform::from_translate(
                options.offset.x as f32,
                options.offset.y as f32,
            ))
    }
}
