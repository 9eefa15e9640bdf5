//! 画像全体の描画と保存

use std::path::Path;
use std::time::Instant;

use image::{ImageBuffer, RgbImage};
use log::{debug, info};
use rayon::prelude::*;

use super::colors::rgb_to_u32;
use super::error::{Error, Result};
use super::pixel::ColorProvider;

/// 全ピクセルの色を計算して画像にする（行単位で並列）
pub fn render<P: ColorProvider>(provider: &P) -> Result<RgbImage> {
    let (width, height) = provider.dimensions();
    if width == 0 || height == 0 {
        return Ok(RgbImage::new(width, height));
    }
    let row_len = width as usize * 3;
    let mut raw = vec![0u8; row_len * height as usize];

    let start = Instant::now();
    debug!("rendering {}x{} pixels", width, height);

    raw.par_chunks_mut(row_len)
        .enumerate()
        .try_for_each(|(y, row)| -> Result<()> {
            for (x, pixel) in row.chunks_exact_mut(3).enumerate() {
                let rgb = provider.color_at(x as u32, y as u32)?;
                pixel.copy_from_slice(&rgb.0);
            }
            Ok(())
        })?;

    info!("rendered {}x{} in {:.2?}", width, height, start.elapsed());

    ImageBuffer::from_raw(width, height, raw)
        .ok_or(Error::PixelBuffer { width, height })
}

/// PNG として保存
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    image.save_with_format(path, image::ImageFormat::Png)?;
    info!("saved image to {}", path.display());
    Ok(())
}

/// minifb のウィンドウに渡すバッファ (0xRRGGBB) に変換
pub fn to_argb_buffer(image: &RgbImage) -> Vec<u32> {
    image.pixels().map(|p| rgb_to_u32(*p)).collect()
}
