//! System clipboard integration.
//!
//! Copying is best-effort: a failure surfaces as a status-bar error and
//! nothing else. No retries.

use anyhow::Result;

/// Writes plain text to the system clipboard.
///
/// # Errors
///
/// Returns an error if the clipboard is unavailable or rejects the write
/// (common in headless environments).
pub fn copy_text(text: &str) -> Result<()> {
    arboard::Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
        .map_err(Into::into)
}
