//! Color conversion command.

use crate::cli::common::{CliError, CliResult};
use crate::models::HslColor;
use clap::Args;
use serde::Serialize;

/// Convert a hex color to all supported representations
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Hex color to convert (e.g., "#3B82F6"; the "#" is optional)
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct RgbChannels {
    r: u8,
    g: u8,
    b: u8,
}

#[derive(Debug, Serialize)]
struct HslComponents {
    h: u16,
    s: u8,
    l: u8,
}

#[derive(Debug, Serialize)]
struct ConvertResult {
    hex: String,
    rgb: RgbChannels,
    hsl: HslComponents,
    css_rgb: String,
    css_hsl: String,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> CliResult<()> {
        let hsl = HslColor::from_hex(&self.color)
            .map_err(|e| CliError::validation(format!("Invalid color '{}': {e}", self.color)))?;
        let rgb = hsl.to_rgb();

        let result = ConvertResult {
            hex: rgb.to_hex(),
            rgb: RgbChannels {
                r: rgb.r,
                g: rgb.g,
                b: rgb.b,
            },
            hsl: HslComponents {
                h: hsl.h,
                s: hsl.s,
                l: hsl.l,
            },
            css_rgb: rgb.to_css(),
            css_hsl: hsl.to_css(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Hex: {}", result.hex);
            println!("RGB: {}", result.css_rgb);
            println!("HSL: {}", result.css_hsl);
        }

        Ok(())
    }
}
