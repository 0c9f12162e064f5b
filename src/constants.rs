//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "Huepick";

/// The binary name of the application (used in command examples and for the
/// config directory).
pub const APP_BINARY_NAME: &str = "huepick";
