//! Fixed radial vignette overlay
//!
//! A static compositing step independent of content: a radial gradient
//! centered on the canvas, fully transparent near the middle and darkening
//! toward the edges. Radii scale with the canvas width only.

use tiny_skia::{
    Color, GradientStop, Paint, Pixmap, Point, RadialGradient, Rect, SpreadMode, Transform,
};

/// Canvas-width fraction inside which the vignette stays transparent
pub const INNER_RADIUS_FRACTION: f32 = 0.1;

/// Canvas-width fraction where the vignette reaches full strength
pub const OUTER_RADIUS_FRACTION: f32 = 0.9;

/// Vignette opacity at the outer radius
pub const MAX_OPACITY: f32 = 0.3;

/// Overlay the radial vignette onto a rendered canvas
///
/// Transparent out to 10% of the canvas width, ramping to 30%-opacity
/// black at 90%. The early returns cover shader and rect construction,
/// which cannot fail for a non-empty canvas.
pub fn apply(pixmap: &mut Pixmap) {
    let width = pixmap.width() as f32;
    let height = pixmap.height() as f32;
    let center = Point::from_xy(width / 2.0, height / 2.0);
    let outer_radius = width * OUTER_RADIUS_FRACTION;

    let edge = Color::from_rgba(0.0, 0.0, 0.0, MAX_OPACITY).unwrap_or(Color::BLACK);
    let stops = vec![
        GradientStop::new(0.0, Color::TRANSPARENT),
        GradientStop::new(INNER_RADIUS_FRACTION / OUTER_RADIUS_FRACTION, Color::TRANSPARENT),
        GradientStop::new(1.0, edge),
    ];

    let Some(shader) = RadialGradient::new(
        center,
        center,
        outer_radius,
        stops,
        SpreadMode::Pad,
        Transform::identity(),
    ) else {
        return;
    };
    let Some(rect) = Rect::from_xywh(0.0, 0.0, width, height) else {
        return;
    };

    let paint = Paint {
        shader,
        ..Paint::default()
    };
    pixmap.fill_rect(rect, &paint, Transform::identity(), None);
}
