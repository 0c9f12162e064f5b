//! Huepick - Terminal-based interactive color picker
//!
//! Pick a color from an HSL gradient surface, generate tint and shade
//! palettes, and copy any representation to the clipboard. Also exposes
//! headless `convert` and `palette` subcommands for scripting.

use anyhow::Result;
use clap::{Parser, Subcommand};
use huepick::cli::{ConvertArgs, PaletteArgs};
use huepick::config::Config;
use huepick::constants::APP_BINARY_NAME;
use huepick::models::HslColor;
use huepick::tui;

/// Huepick - Terminal-based interactive color picker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Hex color to start the picker from (e.g., "#3B82F6")
    #[arg(value_name = "COLOR")]
    color: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a hex color to all supported representations
    Convert(ConvertArgs),
    /// Generate tint and shade ramps from a base color
    Palette(PaletteArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Headless subcommands never touch the terminal state
    if let Some(command) = cli.command {
        let result = match command {
            Commands::Convert(args) => args.execute(),
            Commands::Palette(args) => args.execute(),
        };
        if let Err(e) = result {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code() as i32);
        }
        return Ok(());
    }

    // Interactive picker
    let initial_color = match cli.color.as_deref() {
        Some(hex) => match HslColor::from_hex(hex) {
            Ok(color) => Some(color),
            Err(e) => {
                eprintln!("Error: Invalid color '{hex}': {e}");
                eprintln!();
                eprintln!("Expected a 6-digit hex color, for example:");
                eprintln!("  {APP_BINARY_NAME} \"#3B82F6\"");
                eprintln!("  {APP_BINARY_NAME} 3b82f6");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let config = Config::load_or_default();

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(config, initial_color);

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result?;

    Ok(())
}
