//! CLI command handlers for Huepick.
//!
//! This module provides headless, scriptable access to the color engine
//! for automation and shell pipelines.

pub mod common;
pub mod convert;
pub mod palette;

// Re-export types used by main.rs and tests
pub use common::ExitCode;
pub use convert::ConvertArgs;
pub use palette::PaletteArgs;
