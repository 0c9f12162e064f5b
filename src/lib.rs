//! Huepick Library
//!
//! Core functionality for the Huepick terminal color picker: HSL/RGB color
//! conversions, tint and shade palette generation, the saturation/lightness
//! gradient surface, and the TUI built on top of them.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod surface;
pub mod tui;
