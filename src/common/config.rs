//! 描画設定

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use super::constants::*;
use super::error::{Error, Result};

/// 描画する複素平面上の矩形 (x1..x2, y1..y2)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x1: DEFAULT_X1,
            x2: DEFAULT_X2,
            y1: DEFAULT_Y1,
            y2: DEFAULT_Y2,
        }
    }
}

/// 1 回の描画に必要な設定一式
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub max_iteration: u32,
    pub viewport: Viewport,
    /// x 軸も [0, height] を入力範囲として変換する（既定で有効）
    pub scale_x_by_height: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iteration: MAX_ITER,
            viewport: Viewport::default(),
            scale_x_by_height: true,
        }
    }
}

impl RenderConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// TOML ファイルから設定を読み込む
    pub fn load(path: &Path) -> Result<Self> {
        debug!("loading configuration from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// x 軸の変換に使う入力範囲の上端
    pub fn x_domain(&self) -> u32 {
        if self.scale_x_by_height {
            self.height
        } else {
            self.width
        }
    }

    pub fn total_pixels(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::Config(format!(
                "image dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.max_iteration == 0 {
            return Err(Error::Config("max_iteration must be positive".into()));
        }

        let Viewport { x1, x2, y1, y2 } = self.viewport;
        if ![x1, x2, y1, y2].iter().all(|v| v.is_finite()) {
            return Err(Error::Config(format!(
                "viewport bounds must be finite, got ({}, {}, {}, {})",
                x1, x2, y1, y2
            )));
        }
        // 端点が有限でも幅が溢れると座標が NaN になる
        if !(x2 - x1).is_finite() || !(y2 - y1).is_finite() {
            return Err(Error::Config(format!(
                "viewport span overflows, got ({}, {}, {}, {})",
                x1, x2, y1, y2
            )));
        }
        Ok(())
    }
}
