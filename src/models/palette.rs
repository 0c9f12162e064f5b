//! Tint and shade ramp generation.
//!
//! A ramp is an ordered list of hex strings linearly interpolating from a
//! base color (index 0) to white (tints) or black (shades). The picker shows
//! both ramps for whatever color is currently selected.

// Allow intentional type casts for interpolation factors
#![allow(clippy::cast_precision_loss)]

use super::RgbColor;

/// Number of steps in a ramp when nothing else is configured.
pub const DEFAULT_STEPS: usize = 10;

/// Generates a tint ramp from `base` toward white.
///
/// Index 0 is `base` itself; the last index is `#FFFFFF`. An unparseable
/// base yields an empty ramp so callers can simply render nothing.
///
/// # Examples
///
/// ```
/// use huepick::models::palette::generate_tints;
///
/// let tints = generate_tints("#00C950", 10);
/// assert_eq!(tints[0], "#00C950");
/// assert_eq!(tints[9], "#FFFFFF");
///
/// assert!(generate_tints("not-a-color", 10).is_empty());
/// ```
#[must_use]
pub fn generate_tints(base: &str, count: usize) -> Vec<String> {
    generate_ramp(base, RgbColor::WHITE, count)
}

/// Generates a shade ramp from `base` toward black.
///
/// Index 0 is `base` itself; the last index is `#000000`. An unparseable
/// base yields an empty ramp.
#[must_use]
pub fn generate_shades(base: &str, count: usize) -> Vec<String> {
    generate_ramp(base, RgbColor::BLACK, count)
}

fn generate_ramp(base: &str, target: RgbColor, count: usize) -> Vec<String> {
    let Ok(base) = RgbColor::from_hex(base) else {
        return Vec::new();
    };

    match count {
        0 => Vec::new(),
        1 => vec![base.to_hex()],
        _ => (0..count)
            .map(|i| {
                let factor = i as f32 / (count - 1) as f32;
                base.lerp(target, factor).to_hex()
            })
            .collect(),
    }
}
