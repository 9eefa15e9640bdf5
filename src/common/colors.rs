//! 反復回数から色への変換

use image::Rgb;

/// 集合内（発散しなかった点）の色
pub const INSIDE: Rgb<u8> = Rgb([0, 0, 0]);

/// 反復回数を RGB に変換する（仮のカラーマップ）
///
/// `((i + 160) % 256, (i + 80) % 256, i % 256)`
pub fn color(iter: u32) -> Rgb<u8> {
    // 下位 8bit だけで mod 256 が決まる
    let low = (iter % 256) as u8;
    Rgb([low.wrapping_add(160), low.wrapping_add(80), low])
}

/// `Rgb` を minifb のバッファ形式 (0xRRGGBB) に変換
pub fn rgb_to_u32(rgb: Rgb<u8>) -> u32 {
    let [r, g, b] = rgb.0;
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_iterations() {
        assert_eq!(color(0), Rgb([160, 80, 0]));
    }

    #[test]
    fn channels_wrap_at_256() {
        assert_eq!(color(96), Rgb([0, 176, 96]));
        assert_eq!(color(176), Rgb([80, 0, 176]));
        assert_eq!(color(256), color(0));
        assert_eq!(color(u32::MAX), Rgb([159, 79, 255]));
    }

    #[test]
    fn u32_packing() {
        assert_eq!(rgb_to_u32(Rgb([0x12, 0x34, 0x56])), 0x123456);
        assert_eq!(rgb_to_u32(INSIDE), 0);
    }
}
