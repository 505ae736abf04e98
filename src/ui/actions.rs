//! Actions on a selected result.

use crate::{NameFindError, Result};

/// Copy a name to the system clipboard.
///
/// # Errors
/// Returns error if clipboard access fails.
pub fn copy_to_clipboard(name: &str) -> Result<()> {
    tracing::info!("Copying name to clipboard: {:?}", name);

    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| NameFindError::Clipboard(format!("Failed to access clipboard: {}", e)))?;

    clipboard
        .set_text(name.to_string())
        .map_err(|e| NameFindError::Clipboard(format!("Failed to set clipboard text: {}", e)))
}

// Note: clipboard tests need a display/clipboard manager and are not run in CI
