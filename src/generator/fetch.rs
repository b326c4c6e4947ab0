//! Texture download and validation.
//!
//! Fetches are synchronous with no timeout or retry; generation runs on the
//! host's init path where nothing else is waiting.

use crate::error::Result;
use image::ImageFormat;
use std::io::Cursor;

/// Download a file into memory, treating HTTP error statuses as failures.
pub fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    Ok(response.bytes()?.to_vec())
}

/// Check that `bytes` decode as an image before they land on disk.
pub fn validate_image(bytes: &[u8]) -> Result<()> {
    image::load_from_memory(bytes)?;
    Ok(())
}

/// PNG bytes for a 16x16 magenta/black checkerboard, the classic
/// missing-texture look.
pub fn placeholder_png() -> Result<Vec<u8>> {
    let size = 16;
    let mut image = image::RgbaImage::new(size, size);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let is_magenta = ((x / 2) + (y / 2)) % 2 == 0;
        *pixel = if is_magenta {
            image::Rgba([255, 0, 255, 255])
        } else {
            image::Rgba([0, 0, 0, 255])
        };
    }

    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}
