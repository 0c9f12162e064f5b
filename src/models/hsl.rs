//! HSL color model and RGB conversions.
//!
//! `HslColor` is the canonical picker state: hue 0-360, saturation and
//! lightness 0-100. RGB and hex representations are always derived from it,
//! never stored alongside it.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Allow float comparisons in conversion code (standard algorithms)
#![allow(clippy::float_cmp)]

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RgbColor;

/// HSL color value.
///
/// Hue is in degrees (0-360), saturation and lightness are percentages
/// (0-100). All components are integers; conversions round rather than
/// truncate so repeated derivation does not drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HslColor {
    /// Hue in degrees (0-360)
    pub h: u16,
    /// Saturation percentage (0-100)
    pub s: u8,
    /// Lightness percentage (0-100)
    pub l: u8,
}

impl HslColor {
    /// Startup color of the picker: a saturated green, HSL(145, 100%, 39%).
    pub const DEFAULT: Self = Self { h: 145, s: 100, l: 39 };

    /// Creates a new `HslColor`, clamping each component into range.
    #[must_use]
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Self {
            h: h.min(360),
            s: s.min(100),
            l: l.min(100),
        }
    }

    /// Converts an RGB color to HSL using the standard min/max/delta
    /// algorithm.
    ///
    /// The achromatic case (max == min) yields exactly `h = 0, s = 0`,
    /// never NaN. Hue sectors are selected in red/green/blue-max order, with
    /// the negative intermediate for red-max wrapped into 0..6 before
    /// multiplying by 60.
    ///
    /// # Examples
    ///
    /// ```
    /// use huepick::models::{HslColor, RgbColor};
    ///
    /// let hsl = HslColor::from_rgb(RgbColor::new(255, 0, 0));
    /// assert_eq!(hsl, HslColor::new(0, 100, 50));
    ///
    /// let gray = HslColor::from_rgb(RgbColor::new(128, 128, 128));
    /// assert_eq!(gray.s, 0);
    /// assert_eq!(gray.h, 0);
    /// ```
    #[must_use]
    pub fn from_rgb(rgb: RgbColor) -> Self {
        let r = f32::from(rgb.r) / 255.0;
        let g = f32::from(rgb.g) / 255.0;
        let b = f32::from(rgb.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let l = (max + min) / 2.0;

        if delta == 0.0 {
            // Achromatic, hue is undefined
            return Self {
                h: 0,
                s: 0,
                l: (l * 100.0).round() as u8,
            };
        }

        let s = delta / (1.0 - (2.0 * l - 1.0).abs());

        let h = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        } * 60.0;

        Self {
            h: (h.round() as u16).min(360),
            s: ((s * 100.0).round() as u8).min(100),
            l: ((l * 100.0).round() as u8).min(100),
        }
    }

    /// Converts this HSL color to RGB using the single-formula approach.
    ///
    /// Channel values are rounded, not truncated. Agrees with the
    /// sector-based algorithm within ±1 per channel.
    ///
    /// # Examples
    ///
    /// ```
    /// use huepick::models::{HslColor, RgbColor};
    ///
    /// assert_eq!(HslColor::new(0, 100, 50).to_rgb(), RgbColor::new(255, 0, 0));
    /// assert_eq!(HslColor::new(120, 100, 50).to_rgb(), RgbColor::new(0, 255, 0));
    /// assert_eq!(HslColor::new(0, 0, 100).to_rgb(), RgbColor::new(255, 255, 255));
    /// ```
    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        let h = f32::from(self.h);
        let s = f32::from(self.s) / 100.0;
        let l = f32::from(self.l) / 100.0;

        let a = s * l.min(1.0 - l);
        let f = |n: f32| -> u8 {
            let k = (n + h / 30.0) % 12.0;
            let channel = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
            (channel * 255.0).round().clamp(0.0, 255.0) as u8
        };

        RgbColor::new(f(0.0), f(8.0), f(4.0))
    }

    /// Parses a hex string and converts it to HSL.
    ///
    /// # Errors
    ///
    /// Returns an error for anything [`RgbColor::from_hex`] rejects.
    pub fn from_hex(hex: &str) -> anyhow::Result<Self> {
        Ok(Self::from_rgb(RgbColor::from_hex(hex)?))
    }

    /// Derived hex string for this color.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_rgb().to_hex()
    }

    /// Formats the color as a CSS-style `hsl(h, s%, l%)` string.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }

    /// Returns a copy with a different hue, saturation and lightness
    /// untouched. Hue is clamped to 0-360.
    #[must_use]
    pub fn with_hue(&self, h: u16) -> Self {
        Self { h: h.min(360), ..*self }
    }

    /// Returns a copy with different saturation and lightness, hue
    /// untouched. This is the only mutation pointer sampling is allowed to
    /// make.
    #[must_use]
    pub fn with_saturation_lightness(&self, s: u8, l: u8) -> Self {
        Self {
            h: self.h,
            s: s.min(100),
            l: l.min(100),
        }
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}

impl Default for HslColor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel_delta(a: RgbColor, b: RgbColor) -> i16 {
        (i16::from(a.r) - i16::from(b.r))
            .abs()
            .max((i16::from(a.g) - i16::from(b.g)).abs())
            .max((i16::from(a.b) - i16::from(b.b)).abs())
    }

    #[test]
    fn test_primary_colors() {
        assert_eq!(
            HslColor::from_rgb(RgbColor::new(255, 0, 0)),
            HslColor::new(0, 100, 50)
        );
        assert_eq!(
            HslColor::from_rgb(RgbColor::new(0, 255, 0)),
            HslColor::new(120, 100, 50)
        );
        assert_eq!(
            HslColor::from_rgb(RgbColor::new(0, 0, 255)),
            HslColor::new(240, 100, 50)
        );
    }

    #[test]
    fn test_achromatic_case() {
        for v in [0u8, 1, 64, 128, 200, 254, 255] {
            let hsl = HslColor::from_rgb(RgbColor::new(v, v, v));
            assert_eq!(hsl.h, 0, "grayscale {v} should have h=0");
            assert_eq!(hsl.s, 0, "grayscale {v} should have s=0");
        }
    }

    #[test]
    fn test_negative_hue_wraparound() {
        // Red-max with g < b produces a negative intermediate that must wrap
        // into the magenta range, not go negative
        let hsl = HslColor::from_rgb(RgbColor::new(255, 0, 128));
        assert!(hsl.h > 300 && hsl.h < 360, "got h={}", hsl.h);
    }

    #[test]
    fn test_to_rgb_primaries_and_extremes() {
        assert_eq!(HslColor::new(0, 100, 50).to_rgb(), RgbColor::new(255, 0, 0));
        assert_eq!(HslColor::new(120, 100, 50).to_rgb(), RgbColor::new(0, 255, 0));
        assert_eq!(HslColor::new(240, 100, 50).to_rgb(), RgbColor::new(0, 0, 255));
        assert_eq!(HslColor::new(0, 0, 0).to_rgb(), RgbColor::BLACK);
        assert_eq!(HslColor::new(0, 0, 100).to_rgb(), RgbColor::WHITE);
        // Hue 360 behaves like hue 0
        assert_eq!(HslColor::new(360, 100, 50).to_rgb(), RgbColor::new(255, 0, 0));
    }

    #[test]
    fn test_rgb_roundtrip_within_one() {
        // Coarse sweep of the RGB cube plus the corners
        let mut samples: Vec<RgbColor> = Vec::new();
        for r in (0..=255u16).step_by(51) {
            for g in (0..=255u16).step_by(51) {
                for b in (0..=255u16).step_by(51) {
                    samples.push(RgbColor::new(r as u8, g as u8, b as u8));
                }
            }
        }
        samples.push(RgbColor::new(255, 254, 253));
        samples.push(RgbColor::new(1, 2, 3));

        for rgb in samples {
            let back = HslColor::from_rgb(rgb).to_rgb();
            assert!(
                channel_delta(rgb, back) <= 1,
                "{rgb:?} round-tripped to {back:?}"
            );
        }
    }

    #[test]
    fn test_default_color_internal_consistency() {
        // hsl(145,100%,39%) -> rgb -> hex -> rgb must agree within rounding
        let rgb = HslColor::DEFAULT.to_rgb();
        let reparsed = RgbColor::from_hex(&rgb.to_hex()).unwrap();
        assert_eq!(rgb, reparsed);

        let back = HslColor::from_rgb(reparsed).to_rgb();
        assert!(channel_delta(rgb, back) <= 1);
    }

    #[test]
    fn test_new_clamps() {
        let hsl = HslColor::new(400, 150, 150);
        assert_eq!(hsl, HslColor { h: 360, s: 100, l: 100 });
    }

    #[test]
    fn test_with_hue_preserves_sl() {
        let base = HslColor::new(200, 60, 40);
        let shifted = base.with_hue(10);
        assert_eq!(shifted.s, 60);
        assert_eq!(shifted.l, 40);
        assert_eq!(shifted.h, 10);
    }

    #[test]
    fn test_with_saturation_lightness_preserves_hue() {
        let base = HslColor::new(200, 60, 40);
        let sampled = base.with_saturation_lightness(10, 90);
        assert_eq!(sampled.h, 200);
        assert_eq!(sampled.s, 10);
        assert_eq!(sampled.l, 90);
    }

    #[test]
    fn test_css_strings() {
        assert_eq!(HslColor::new(145, 100, 39).to_css(), "hsl(145, 100%, 39%)");
        assert_eq!(HslColor::new(145, 100, 39).to_string(), "hsl(145, 100%, 39%)");
    }

    #[test]
    fn test_from_hex() {
        let hsl = HslColor::from_hex("#FF0000").unwrap();
        assert_eq!(hsl, HslColor::new(0, 100, 50));
        assert!(HslColor::from_hex("nonsense").is_err());
    }
}
