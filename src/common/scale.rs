//! 座標の線形変換

use super::error::{Error, Result};

/// `v` を `[in_min, in_max]` から `[out_min, out_max]` へ線形に写す
///
/// 入力範囲の幅が 0（または端点が有限でない）の場合はゼロ除算せずにエラーを返す。
/// 結果が NaN や無限大になる場合もエラー。
pub fn scaled(v: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> Result<f64> {
    let in_span = in_max - in_min;
    if in_span == 0.0 || !in_span.is_finite() {
        return Err(Error::DegenerateRange {
            min: in_min,
            max: in_max,
        });
    }

    let out = out_min + (v - in_min) * (out_max - out_min) / in_span;
    if !out.is_finite() {
        return Err(Error::NonFinite { value: v });
    }
    Ok(out)
}
