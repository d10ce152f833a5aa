//! Decoding item images into terminal-sized thumbnails.
//!
//! A terminal cell shows two vertical pixels with the upper half-block
//! character, so a thumbnail for `cols x rows` cells is `cols x 2*rows`
//! pixels.

use std::sync::Arc;

use image::imageops::FilterType;

use crate::error::{PawError, PawResult, SystemError};
use crate::models::ImageHandle;

/// Default thumbnail size in terminal cells.
pub const THUMBNAIL_COLS: u32 = 36;
pub const THUMBNAIL_ROWS: u32 = 14;

/// A decoded RGB image, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pixels: Vec<[u8; 3]>,
}

impl Thumbnail {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    /// Number of terminal rows needed to show the whole image.
    pub fn cell_rows(&self) -> u32 {
        self.height.div_ceil(2)
    }
}

/// Decode `handle` and scale it to fit in `cols x rows` cells, keeping the
/// aspect ratio.
pub fn decode_thumbnail(handle: &ImageHandle, cols: u32, rows: u32) -> PawResult<Thumbnail> {
    if handle.is_empty() {
        return Err(PawError::System(SystemError::DecodeFailed {
            message: "empty image".to_string(),
        }));
    }
    let image = image::load_from_memory(handle.bytes())?;
    let scaled = image.resize(cols.max(1), rows.max(1) * 2, FilterType::Triangle);
    let rgb = scaled.to_rgb8();

    let (width, height) = rgb.dimensions();
    let pixels = rgb.pixels().map(|p| p.0).collect();
    Ok(Thumbnail {
        width,
        height,
        pixels,
    })
}

/// Decode on the blocking pool.
pub async fn decode_in_background(
    handle: Arc<ImageHandle>,
    cols: u32,
    rows: u32,
) -> PawResult<Thumbnail> {
    tokio::task::spawn_blocking(move || decode_thumbnail(&handle, cols, rows))
        .await
        .map_err(|e| {
            PawError::System(SystemError::DecodeFailed {
                message: e.to_string(),
            })
        })?
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn png(width: u32, height: u32, color: [u8; 3]) -> ImageHandle {
        let img = RgbImage::from_pixel(width, height, Rgb(color));
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        ImageHandle::new(buf)
    }

    #[test]
    fn test_decode_fits_bounds_and_keeps_colour() {
        let thumb = decode_thumbnail(&png(64, 64, [200, 10, 10]), 20, 10).unwrap();
        assert!(thumb.width <= 20);
        assert!(thumb.height <= 20);
        assert_eq!(thumb.pixel(0, 0), Some([200, 10, 10]));
        assert_eq!(thumb.pixel(thumb.width, 0), None);
        assert_eq!(thumb.cell_rows(), thumb.height.div_ceil(2));
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let err = decode_thumbnail(&ImageHandle::new(b"not an image".to_vec()), 10, 10).unwrap_err();
        assert_eq!(err.error_code(), "SYS_DECODE");

        let err = decode_thumbnail(&ImageHandle::new(Vec::<u8>::new()), 10, 10).unwrap_err();
        assert_eq!(err.error_code(), "SYS_DECODE");
    }

    #[tokio::test]
    async fn test_background_decode() {
        let thumb = decode_in_background(Arc::new(png(8, 8, [1, 2, 3])), 4, 2)
            .await
            .unwrap();
        assert_eq!(thumb.pixel(0, 0), Some([1, 2, 3]));
    }
}
