//! Palette generation command.

use crate::cli::common::{CliError, CliResult};
use crate::models::palette::{generate_shades, generate_tints, DEFAULT_STEPS};
use crate::models::RgbColor;
use clap::Args;
use serde::Serialize;

/// Generate tint and shade ramps from a base color
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Base hex color (e.g., "#3B82F6"; the "#" is optional)
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Number of steps per ramp
    #[arg(short, long, default_value_t = DEFAULT_STEPS)]
    pub count: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct PaletteResult {
    base: String,
    tints: Vec<String>,
    shades: Vec<String>,
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self) -> CliResult<()> {
        let base = RgbColor::from_hex(&self.color)
            .map_err(|e| CliError::validation(format!("Invalid color '{}': {e}", self.color)))?;

        let result = PaletteResult {
            base: base.to_hex(),
            tints: generate_tints(&base.to_hex(), self.count),
            shades: generate_shades(&base.to_hex(), self.count),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Base: {}", result.base);
            println!();
            println!("Tints:");
            for hex in &result.tints {
                println!("  {hex}");
            }
            println!();
            println!("Shades:");
            for hex in &result.shades {
                println!("  {hex}");
            }
        }

        Ok(())
    }
}
