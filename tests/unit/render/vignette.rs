//! Tests for the fixed radial vignette overlay

#[cfg(test)]
mod tests {
    use infinitile::render::vignette::{
        INNER_RADIUS_FRACTION, MAX_OPACITY, OUTER_RADIUS_FRACTION, apply,
    };
    use tiny_skia::{Color, Pixmap};

    fn white_canvas(width: u32, height: u32) -> Pixmap {
        let mut pixmap = Pixmap::new(width, height).unwrap_or_else(|| {
            unreachable!("test pixmap dimensions are valid");
        });
        pixmap.fill(Color::WHITE);
        pixmap
    }

    // Tests the canvas center stays untouched inside the inner radius
    // Verified by starting the ramp at the gradient center
    #[test]
    fn test_center_remains_transparent() {
        let mut pixmap = white_canvas(200, 200);
        apply(&mut pixmap);

        let center = pixmap
            .pixel(100, 100)
            .unwrap_or_else(|| unreachable!("pixel out of bounds"));
        assert_eq!(center.red(), 255);
    }

    // Tests corners darken toward the configured peak opacity
    // Verified by zeroing the outer gradient stop
    #[test]
    fn test_corners_darken() {
        let mut pixmap = white_canvas(200, 200);
        apply(&mut pixmap);

        let corner = pixmap
            .pixel(1, 1)
            .unwrap_or_else(|| unreachable!("pixel out of bounds"));
        assert!(
            corner.red() < 250,
            "corner must darken, got {}",
            corner.red()
        );

        // Full strength would floor white at 70% brightness
        let floor = (255.0 * (1.0 - MAX_OPACITY)) as u8;
        assert!(corner.red() >= floor.saturating_sub(2));
    }

    // Tests darkening increases monotonically from center to corner
    // Verified by inverting the gradient stop order
    #[test]
    fn test_darkening_is_radial() {
        let mut pixmap = white_canvas(400, 400);
        apply(&mut pixmap);

        let sample = |x: u32, y: u32| -> u8 {
            pixmap
                .pixel(x, y)
                .unwrap_or_else(|| unreachable!("pixel out of bounds"))
                .red()
        };
        let near = sample(220, 200);
        let mid = sample(320, 200);
        let far = sample(398, 200);
        assert!(near >= mid, "near {near} should be at least mid {mid}");
        assert!(mid > far, "mid {mid} should be brighter than far {far}");
    }

    // Tests the configured fractions keep the documented shape
    // Verified by swapping inner and outer fractions
    #[test]
    fn test_fraction_constants() {
        assert!((INNER_RADIUS_FRACTION - 0.1).abs() < f32::EPSILON);
        assert!((OUTER_RADIUS_FRACTION - 0.9).abs() < f32::EPSILON);
        assert!((MAX_OPACITY - 0.3).abs() < f32::EPSILON);
    }
}
