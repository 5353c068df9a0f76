//! Loader: open an image file and normalize it to RGB.

use crate::common::{Error, Result};
use image::{ImageReader, RgbImage};
use log::debug;
use std::path::Path;

/// Open the image at `path` and convert it to an 8-bit RGB buffer.
///
/// The format is detected from the file contents, falling back to the
/// extension. Any alpha channel is discarded without compositing.
///
/// # Errors
///
/// Returns [`Error::ImageLoad`] when the file is missing or unreadable, is
/// not a decodable image, or decodes to zero width or height.
pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path = path.as_ref();

    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| Error::image_load(path, e))?;
    let decoded = reader.decode().map_err(|e| Error::image_load(path, e))?;

    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(Error::image_load(
            path,
            format!(
                "image has zero dimension ({}x{})",
                decoded.width(),
                decoded.height()
            ),
        ));
    }

    debug!(
        "Decoded {} as {:?} ({}x{})",
        path.display(),
        decoded.color(),
        decoded.width(),
        decoded.height()
    );

    Ok(decoded.into_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_image_load_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does-not-exist.png");

        let err = load_rgb(&path).unwrap_err();
        match err {
            Error::ImageLoad { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn garbage_bytes_are_image_load_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("noise.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(matches!(load_rgb(&path), Err(Error::ImageLoad { .. })));
    }

    #[test]
    fn alpha_is_dropped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("translucent.png");
        RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 0]))
            .save(&path)
            .unwrap();

        let rgb = load_rgb(&path).unwrap();
        assert_eq!(rgb.dimensions(), (3, 2));
        assert_eq!(rgb.get_pixel(2, 1).0, [10, 20, 30]);
    }
}
