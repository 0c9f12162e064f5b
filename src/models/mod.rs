//! Data models for the color picker.
//!
//! `HslColor` is the single source of truth for the current color; RGB and
//! hex values are derived from it on demand. Models are independent of the
//! UI and the CLI.

pub mod hsl;
pub mod palette;
pub mod rgb;

// Re-export all model types
pub use hsl::HslColor;
pub use rgb::RgbColor;
