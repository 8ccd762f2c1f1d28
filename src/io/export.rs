//! Rendered canvas export to image files
//!
//! Writes the compositor's pixmap to disk: JPEG at quality 92 by default
//! (the canvas-scale 0.92 of the download action), PNG when the output
//! extension asks for it. Parent directories are created on demand.

use crate::io::configuration::JPEG_EXPORT_QUALITY;
use crate::io::error::{CollageError, Result, render_error};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tiny_skia::Pixmap;

/// Export a rendered pixmap to the given path
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created, the output
/// file cannot be opened, or encoding fails.
pub fn export_pixmap(pixmap: &Pixmap, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| CollageError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source,
            })?;
        }
    }

    let rgba = demultiply(pixmap)
        .ok_or_else(|| render_error("export buffer", "pixmap dimensions disagree with data"))?;

    let is_png = output_path
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("png"));

    if is_png {
        rgba.save(output_path)
            .map_err(|source| CollageError::ImageExport {
                path: output_path.to_path_buf(),
                source,
            })?;
        return Ok(());
    }

    let rgb = DynamicImage::ImageRgba8(rgba).to_rgb8();
    let file = File::create(output_path).map_err(|source| CollageError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "create output file",
        source,
    })?;
    let writer = BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(writer, JPEG_EXPORT_QUALITY);
    rgb.write_with_encoder(encoder)
        .map_err(|source| CollageError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })?;

    Ok(())
}

// Pixmap pixels are premultiplied; encoders expect straight alpha
fn demultiply(pixmap: &Pixmap) -> Option<RgbaImage> {
    let mut data = Vec::with_capacity(pixmap.pixels().len() * 4);
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        data.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }
    RgbaImage::from_raw(pixmap.width(), pixmap.height(), data)
}
