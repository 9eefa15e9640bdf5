//! ピクセル座標から色を求める

use image::Rgb;
use num_complex::Complex;

use super::colors::{color, INSIDE};
use super::config::RenderConfig;
use super::error::{Error, Result};
use super::mandelbrot::escape_time;
use super::scale::scaled;

/// ピクセル毎の色を返すもの（描画側はこれだけに依存する）
pub trait ColorProvider: Sync {
    fn color_at(&self, x: u32, y: u32) -> Result<Rgb<u8>>;

    /// (幅, 高さ)
    fn dimensions(&self) -> (u32, u32);
}

impl<P: ColorProvider> ColorProvider for &P {
    fn color_at(&self, x: u32, y: u32) -> Result<Rgb<u8>> {
        (**self).color_at(x, y)
    }

    fn dimensions(&self) -> (u32, u32) {
        (**self).dimensions()
    }
}

/// 設定を保持し、ピクセルの色を計算する
#[derive(Debug, Clone)]
pub struct Painter {
    config: RenderConfig,
}

impl Painter {
    /// 設定を検証してから作成する。不正な設定はここで失敗する。
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// ピクセル (x, y) に対応する複素数 c
    pub fn pixel_to_complex(&self, x: u32, y: u32) -> Result<Complex<f64>> {
        let vp = &self.config.viewport;
        let re = scaled(x as f64, 0.0, self.config.x_domain() as f64, vp.x1, vp.x2)?;
        let im = scaled(y as f64, 0.0, self.config.height as f64, vp.y1, vp.y2)?;
        Ok(Complex::new(re, im))
    }

    fn check_bounds(&self, x: u32, y: u32) -> Result<()> {
        let (width, height) = self.dimensions();
        if x >= width || y >= height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        Ok(())
    }
}

impl ColorProvider for Painter {
    fn color_at(&self, x: u32, y: u32) -> Result<Rgb<u8>> {
        self.check_bounds(x, y)?;
        let c = self.pixel_to_complex(x, y)?;

        Ok(match escape_time(c, self.config.max_iteration) {
            Some(iter) => color(iter),
            None => INSIDE,
        })
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }
}
