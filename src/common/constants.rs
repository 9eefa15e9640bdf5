//! 共通定数

/// 画像の幅（ピクセル）の既定値
pub const DEFAULT_WIDTH: u32 = 600;
/// 画像の高さ（ピクセル）の既定値
pub const DEFAULT_HEIGHT: u32 = 600;

/// 最大反復回数の既定値
pub const MAX_ITER: u32 = 256;

/// 既定の表示範囲（複素平面）
pub const DEFAULT_X1: f64 = -2.0;
pub const DEFAULT_X2: f64 = 1.0;
pub const DEFAULT_Y1: f64 = -1.5;
pub const DEFAULT_Y2: f64 = 1.5;

/// 発散判定に使う |z|^2 の閾値（半径 2）
pub const ESCAPE_NORM_SQR: f64 = 4.0;

/// 出力ファイル名の既定値
pub const DEFAULT_OUTPUT: &str = "mandelbrot.png";

/// プログレスバーの幅（文字数）
pub const PROGRESS_BAR_WIDTH: usize = 30;
