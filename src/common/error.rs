//! エラー型

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// 設定値が不正（幅や高さが 0 など）
    #[error("invalid configuration: {0}")]
    Config(String),

    /// 入力範囲の幅が 0 で線形変換できない
    #[error("degenerate input range [{min}, {max}]")]
    DegenerateRange { min: f64, max: f64 },

    /// 線形変換の結果が有限でない
    #[error("scaling {value} produced a non-finite coordinate")]
    NonFinite { value: f64 },

    /// 画素バッファの長さが画像サイズと合わない
    #[error("pixel buffer does not fit a {width}x{height} image")]
    PixelBuffer { width: u32, height: u32 },

    /// 画像の外側のピクセルが指定された
    #[error("pixel ({x}, {y}) is outside the {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error("could not parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("window error: {0}")]
    Window(String),
}
