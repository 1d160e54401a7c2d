//! OKLab / OKLCH perceptual color space conversions.
//!
//! # Invariants
//! - Conversions to sRGB clamp every channel into `[0, 1]` before 8-bit
//!   quantization, so any OKLCH input yields a valid hex color.
//! - Hue is measured in degrees; any finite value is accepted and wrapped.

use crate::color::hex::HexColor;

/// OKLab color: lightness plus green-red (`a`) and blue-yellow (`b`) axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OkLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// Cylindrical form of OKLab: lightness, chroma and hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OkLch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl OkLch {
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Projects chroma/hue onto the `a`/`b` plane.
    pub fn to_oklab(self) -> OkLab {
        let radians = self.h.rem_euclid(360.0).to_radians();
        OkLab {
            l: self.l,
            a: self.c * radians.cos(),
            b: self.c * radians.sin(),
        }
    }

    /// Converts to a gamut-clamped `#rrggbb` color.
    pub fn to_hex(self) -> HexColor {
        self.to_oklab().to_hex()
    }
}

impl OkLab {
    /// Converts to linear-light sRGB. Channels may fall outside `[0, 1]`.
    pub fn to_linear_srgb(self) -> (f64, f64, f64) {
        let l_ = self.l + 0.396_337_777_4 * self.a + 0.215_803_757_3 * self.b;
        let m_ = self.l - 0.105_561_345_8 * self.a - 0.063_854_172_8 * self.b;
        let s_ = self.l - 0.089_484_177_5 * self.a - 1.291_485_548_0 * self.b;

        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        (
            4.076_741_662_1 * l - 3.307_711_591_3 * m + 0.230_969_929_2 * s,
            -1.268_438_004_6 * l + 2.609_757_401_1 * m - 0.341_319_396_5 * s,
            -0.004_196_086_3 * l - 0.703_418_614_7 * m + 1.707_614_701_0 * s,
        )
    }

    /// Converts to a gamut-clamped `#rrggbb` color.
    pub fn to_hex(self) -> HexColor {
        let (r, g, b) = self.to_linear_srgb();
        HexColor::from_rgb(quantize(r), quantize(g), quantize(b))
    }

    /// Converts an 8-bit sRGB color back into OKLab.
    pub fn from_hex(color: &HexColor) -> Self {
        let (r, g, b) = color.rgb();
        let r = srgb_to_linear(f64::from(r) / 255.0);
        let g = srgb_to_linear(f64::from(g) / 255.0);
        let b = srgb_to_linear(f64::from(b) / 255.0);

        let l = 0.412_221_470_8 * r + 0.536_332_536_3 * g + 0.051_445_992_9 * b;
        let m = 0.211_903_498_2 * r + 0.680_699_545_1 * g + 0.107_396_956_6 * b;
        let s = 0.088_302_461_9 * r + 0.281_718_837_6 * g + 0.629_978_700_5 * b;

        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        Self {
            l: 0.210_454_255_3 * l_ + 0.793_617_785_0 * m_ - 0.004_072_046_8 * s_,
            a: 1.977_998_495_1 * l_ - 2.428_592_205_0 * m_ + 0.450_593_709_9 * s_,
            b: 0.025_904_037_1 * l_ + 0.782_771_766_2 * m_ - 0.808_675_766_0 * s_,
        }
    }
}

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Gamma-encodes one linear channel and rounds it to 8 bits.
fn quantize(linear: f64) -> u8 {
    let encoded = linear_to_srgb(linear.clamp(0.0, 1.0)).clamp(0.0, 1.0);
    (encoded * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::{OkLab, OkLch};
    use crate::color::hex::HexColor;

    #[test]
    fn extremes_map_to_black_and_white() {
        assert_eq!(OkLch::new(0.0, 0.0, 0.0).to_hex().as_str(), "#000000");
        assert_eq!(OkLch::new(1.0, 0.0, 0.0).to_hex().as_str(), "#ffffff");
    }

    #[test]
    fn out_of_gamut_input_is_clamped() {
        let hex = OkLch::new(1.5, 0.9, 123.0).to_hex();
        assert_eq!(hex.as_str().len(), 7);
    }

    #[test]
    fn hue_wraps_around_full_turn() {
        let base = OkLch::new(0.6, 0.1, 30.0).to_hex();
        assert_eq!(OkLch::new(0.6, 0.1, 390.0).to_hex(), base);
        assert_eq!(OkLch::new(0.6, 0.1, -330.0).to_hex(), base);
    }

    #[test]
    fn white_reads_back_as_full_lightness() {
        let white = HexColor::parse("#ffffff").expect("valid color");
        let lab = OkLab::from_hex(&white);
        assert!((lab.l - 1.0).abs() < 1e-3, "lightness was {}", lab.l);
        assert!(lab.a.abs() < 1e-3 && lab.b.abs() < 1e-3);
    }

    #[test]
    fn in_gamut_color_survives_round_trip_within_quantization() {
        let source = OkLch::new(0.6, 0.05, 200.0);
        let back = OkLab::from_hex(&source.to_hex());
        assert!((back.l - source.l).abs() < 0.01, "lightness was {}", back.l);
    }
}
