//! Saturation/lightness gradient surface.
//!
//! The picker selects saturation and lightness by pointing at a 2D gradient
//! rendered for the current hue. The surface is abstracted behind a small
//! capability trait so the sampling logic can be tested without a terminal,
//! and backed by an in-memory pixel buffer at a fixed resolution independent
//! of the displayed panel size.

// Allow intentional type casts for raster coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]

use crate::models::{HslColor, RgbColor};

/// Backing resolution of the pixel buffer, both axes.
pub const SURFACE_SIZE: u16 = 256;

/// A raster surface that can draw the saturation/lightness gradient for a
/// hue and read back single pixels.
///
/// Implementations must clamp out-of-range coordinates instead of failing,
/// and must treat sampling before the first render as "unavailable"
/// (`None`) rather than an error.
pub trait SaturationLightnessSurface {
    /// Draws the gradient field for `hue` (degrees, 0-360).
    fn render(&mut self, hue: u16);

    /// Reads back the pixel color at `(x, y)`, clamped into bounds.
    ///
    /// Returns `None` if the surface has not been rendered yet.
    fn sample(&self, x: u16, y: u16) -> Option<RgbColor>;

    /// Surface width in pixels.
    fn width(&self) -> u16;

    /// Surface height in pixels.
    fn height(&self) -> u16;
}

/// In-memory pixel buffer implementing the gradient surface.
///
/// Rendering composites three layers, in this order:
///
/// 1. a fill of the pure hue at full saturation, 50% lightness;
/// 2. a horizontal white gradient, opaque on the left fading to transparent
///    on the right;
/// 3. a vertical black gradient, transparent at the top fading to opaque at
///    the bottom.
///
/// White before black is what gives the standard picker corners: near-white
/// top-left, pure hue top-right, black along the bottom.
#[derive(Debug, Clone)]
pub struct PixelSurface {
    width: u16,
    height: u16,
    /// Empty until the first `render` call.
    pixels: Vec<RgbColor>,
}

impl PixelSurface {
    /// Creates an unrendered surface at the default backing resolution.
    #[must_use]
    pub fn new() -> Self {
        Self::with_size(SURFACE_SIZE, SURFACE_SIZE)
    }

    /// Creates an unrendered surface with an explicit resolution.
    #[must_use]
    pub fn with_size(width: u16, height: u16) -> Self {
        Self {
            width: width.max(2),
            height: height.max(2),
            pixels: Vec::new(),
        }
    }

    fn pixel_at(&self, x: u16, y: u16) -> RgbColor {
        self.pixels[usize::from(y) * usize::from(self.width) + usize::from(x)]
    }
}

impl Default for PixelSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl SaturationLightnessSurface for PixelSurface {
    fn render(&mut self, hue: u16) {
        let base = HslColor::new(hue, 100, 50).to_rgb();
        let w = f32::from(self.width - 1);
        let h = f32::from(self.height - 1);

        let mut pixels = Vec::with_capacity(usize::from(self.width) * usize::from(self.height));
        for y in 0..self.height {
            let black_alpha = f32::from(y) / h;
            for x in 0..self.width {
                let white_alpha = 1.0 - f32::from(x) / w;
                let lit = base.lerp(RgbColor::WHITE, white_alpha);
                pixels.push(lit.lerp(RgbColor::BLACK, black_alpha));
            }
        }
        self.pixels = pixels;
    }

    fn sample(&self, x: u16, y: u16) -> Option<RgbColor> {
        if self.pixels.is_empty() {
            return None;
        }
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);
        Some(self.pixel_at(x, y))
    }

    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }
}

/// Maps a coordinate from one resolution to another.
///
/// Used to scale displayed panel cells into backing-surface pixels and the
/// saved cursor position back again.
#[must_use]
pub fn scale_coord(value: u16, from_max: u16, to_max: u16) -> u16 {
    if from_max == 0 {
        return 0;
    }
    let scaled = f32::from(value.min(from_max)) / f32::from(from_max) * f32::from(to_max);
    (scaled.round() as u16).min(to_max)
}
