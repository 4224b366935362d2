//! Clipboard helpers for the tenant ID input
//!
//! Uses `arboard` for cross-platform support (Windows, macOS, Linux).
//! The clipboard is created fresh each time to avoid holding resources.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Read text from the system clipboard (Ctrl+V into the input).
///
/// Common failure cases: no display server (headless Linux), empty
/// clipboard, non-text content.
pub fn paste_from_clipboard() -> Result<String> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .get_text()
        .context("Failed to read clipboard text")
}

/// Copy text to the system clipboard (Ctrl+Y copies the tenant ID).
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}
