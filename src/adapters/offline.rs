//! Network-free provider that paints placeholder pictures.

use async_trait::async_trait;
use image::{ImageBuffer, Rgb, RgbImage};

use crate::error::ProviderError;
use crate::models::ImageHandle;
use crate::traits::ItemProvider;

const SIZE: u32 = 32;

/// Palette cycled through by index.
const PALETTE: [[u8; 3]; 6] = [
    [51, 204, 204],
    [255, 225, 168],
    [0, 200, 83],
    [244, 67, 54],
    [255, 179, 0],
    [120, 94, 240],
];

/// Generates a small PNG per index.
#[derive(Debug, Clone, Default)]
pub struct OfflineProvider;

impl OfflineProvider {
    pub fn new() -> Self {
        Self
    }
}

/// Diagonal two-colour gradient, distinct per index.
fn paint(index: usize) -> RgbImage {
    let a = PALETTE[index % PALETTE.len()];
    let b = PALETTE[(index + 2) % PALETTE.len()];
    ImageBuffer::from_fn(SIZE, SIZE, |x, y| {
        let t = (x + y) as f32 / (2 * (SIZE - 1)) as f32;
        let mix = |c0: u8, c1: u8| (c0 as f32 * (1.0 - t) + c1 as f32 * t) as u8;
        Rgb([mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])])
    })
}

fn encode_png(img: &RgbImage, index: usize) -> Result<Vec<u8>, ProviderError> {
    let mut buf = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buf);
    img.write_to(&mut cursor, image::ImageFormat::Png)
        .map_err(|e| ProviderError::Unavailable {
            index,
            reason: e.to_string(),
        })?;
    Ok(buf)
}

#[async_trait]
impl ItemProvider for OfflineProvider {
    async fn fetch(&self, index: usize) -> Result<ImageHandle, ProviderError> {
        let png = encode_png(&paint(index), index)?;
        Ok(ImageHandle::new(png).with_content_type("image/png"))
    }
}
