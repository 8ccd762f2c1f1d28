//! Image decoding into ready photos
//!
//! The loading service guarantees every photo handed to the layout engine
//! already has valid, loaded pixel dimensions: decode happens here, eagerly,
//! and zero-area images are rejected. Decoded pixels are converted to the
//! premultiplied RGBA layout the compositor draws from.

use crate::gallery::photo::Photo;
use crate::io::error::{CollageError, Result};
use std::path::Path;
use tiny_skia::Pixmap;

/// File extensions accepted as photo sources
pub const SUPPORTED_EXTENSIONS: [&str; 8] = [
    "bmp", "gif", "jpeg", "jpg", "png", "tif", "tiff", "webp",
];

/// Whether the path carries a supported image extension
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| extension.eq_ignore_ascii_case(supported))
        })
}

/// Decode one image file into a ready photo
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the image fails to
/// decode, or the decoded image has zero pixel area.
pub fn load_photo(path: &Path) -> Result<Photo> {
    let decoded = image::ImageReader::open(path)
        .map_err(|source| CollageError::FileSystem {
            path: path.to_path_buf(),
            operation: "open image",
            source,
        })?
        .decode()
        .map_err(|source| CollageError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut data = rgba.into_raw();
    premultiply_rgba_in_place(&mut data);

    let mut pixmap = Pixmap::new(width, height).ok_or_else(|| CollageError::InvalidSourceData {
        reason: format!("image '{}' has zero pixel area", path.display()),
    })?;
    pixmap.data_mut().copy_from_slice(&data);

    Ok(Photo::from_pixmap(pixmap, path.to_path_buf()))
}

// Pixmaps store premultiplied alpha; decoders produce straight alpha
fn premultiply_rgba_in_place(data: &mut [u8]) {
    for pixel in data.chunks_exact_mut(4) {
        let [red, green, blue, alpha] = pixel else {
            continue;
        };
        let weight = u16::from(*alpha);
        *red = ((u16::from(*red) * weight) / 255) as u8;
        *green = ((u16::from(*green) * weight) / 255) as u8;
        *blue = ((u16::from(*blue) * weight) / 255) as u8;
    }
}
