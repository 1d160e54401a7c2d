//! Soft background / legible foreground color pairs for text items.
//!
//! # Responsibility
//! - Draw a random hue and derive a pastel background plus a darker,
//!   moderately saturated text color sharing that hue.
//!
//! # Invariants
//! - Only hue varies between calls; lightness and chroma are fixed, so the
//!   lightness contrast between the two colors stays roughly constant.
//! - Output colors are always valid `#rrggbb` values.

use crate::color::hex::HexColor;
use crate::color::oklab::OkLch;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Background lightness (near white).
pub const BACKGROUND_LIGHTNESS: f64 = 0.94;
/// Background chroma (barely tinted).
pub const BACKGROUND_CHROMA: f64 = 0.04;
/// Text lightness (mid-dark).
pub const TEXT_LIGHTNESS: f64 = 0.45;
/// Text chroma (moderate saturation).
pub const TEXT_CHROMA: f64 = 0.10;

/// Colors assigned to one text item at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    /// Fill color behind the text.
    pub background: HexColor,
    /// Text color.
    pub text: HexColor,
}

/// Generator for [`ColorPair`] values.
///
/// Holds the lightness/chroma targets so the same hue always yields the same
/// pair; randomness only enters through the hue draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPairGenerator {
    background: (f64, f64),
    text: (f64, f64),
}

impl Default for ColorPairGenerator {
    fn default() -> Self {
        Self {
            background: (BACKGROUND_LIGHTNESS, BACKGROUND_CHROMA),
            text: (TEXT_LIGHTNESS, TEXT_CHROMA),
        }
    }
}

impl ColorPairGenerator {
    /// Draws a hue uniformly from `[0, 360)` and builds the pair for it.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> ColorPair {
        self.pair_for_hue(random_hue(rng))
    }

    /// Builds the pair for a fixed hue in degrees.
    pub fn pair_for_hue(&self, hue: f64) -> ColorPair {
        let (background, text) = self.lch_for_hue(hue);
        ColorPair {
            background: background.to_hex(),
            text: text.to_hex(),
        }
    }

    /// Returns the `(background, text)` OKLCH values before hex conversion.
    pub fn lch_for_hue(&self, hue: f64) -> (OkLch, OkLch) {
        let hue = hue.rem_euclid(360.0);
        (
            OkLch::new(self.background.0, self.background.1, hue),
            OkLch::new(self.text.0, self.text.1, hue),
        )
    }
}

/// Uniform hue draw in degrees, `[0, 360)`.
pub fn random_hue<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(0.0..360.0)
}

#[cfg(test)]
mod tests {
    use super::{random_hue, ColorPairGenerator};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn known_hues_produce_expected_pairs() {
        let generator = ColorPairGenerator::default();

        let red = generator.pair_for_hue(0.0);
        assert_eq!(red.background.as_str(), "#ffe1ea");
        assert_eq!(red.text.as_str(), "#803b53");

        let teal = generator.pair_for_hue(180.0);
        assert_eq!(teal.background.as_str(), "#cff5ec");
        assert_eq!(teal.text.as_str(), "#006757");
    }

    #[test]
    fn same_seed_gives_same_pair() {
        let generator = ColorPairGenerator::default();
        let first = generator.generate(&mut StdRng::seed_from_u64(7));
        let second = generator.generate(&mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn random_hue_stays_in_half_open_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let hue = random_hue(&mut rng);
            assert!((0.0..360.0).contains(&hue), "hue out of range: {hue}");
        }
    }
}
