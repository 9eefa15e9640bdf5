//! マンデルブロ集合計算関数

use num_complex::Complex;

use super::constants::ESCAPE_NORM_SQR;

/// エスケープタイムを計算する
///
/// z0 = 0 から z = z^2 + c を最大 `max_iter` 回繰り返し、|z| > 2 となった最初の
/// ステップ番号（0 始まり）を返す。上限までに発散しなければ `None`。
pub fn escape_time(c: Complex<f64>, max_iter: u32) -> Option<u32> {
    let mut z = Complex::new(0.0, 0.0);

    for i in 0..max_iter {
        z = z * z + c;
        if z.norm_sqr() > ESCAPE_NORM_SQR {
            return Some(i);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        assert_eq!(escape_time(Complex::new(0.0, 0.0), 1000), None);
    }

    #[test]
    fn far_point_escapes_on_first_step() {
        assert_eq!(escape_time(Complex::new(2.0, 2.0), 100), Some(0));
    }

    #[test]
    fn minus_two_is_on_the_boundary_and_stays() {
        // -2 -> 2 -> 2 -> ... |z| は 2 を超えない
        assert_eq!(escape_time(Complex::new(-2.0, 0.0), 500), None);
    }

    #[test]
    fn one_escapes_after_a_few_steps() {
        // 1, 2, 5: 3 ステップ目 (index 2) で |z|^2 = 25 > 4
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 100), Some(2));
    }

    #[test]
    fn cap_limits_the_answer() {
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 2), None);
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 3), Some(2));
    }

    #[test]
    fn zero_cap_never_escapes() {
        assert_eq!(escape_time(Complex::new(2.0, 2.0), 0), None);
    }

    #[test]
    fn result_is_below_cap() {
        for &(re, im) in &[(0.3, 0.5), (-0.75, 0.1), (0.26, 0.0), (-1.25, 0.2)] {
            if let Some(i) = escape_time(Complex::new(re, im), 64) {
                assert!(i < 64);
            }
        }
    }
}
