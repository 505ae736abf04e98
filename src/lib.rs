//! Name Finder - filter a list of names by case-insensitive substring.
//!
//! The library holds the name registry, the search contract and the
//! egui window that sits on top of them. The window is a thin adapter:
//! everything it shows comes from [`service::NameFilterService`].

pub mod registry;
pub mod search;
pub mod service;
pub mod ui;

use std::path::PathBuf;

use thiserror::Error;

/// Error types for loading, configuration and UI actions.
#[derive(Error, Debug)]
pub enum NameFindError {
    /// The names file does not exist
    #[error("File not found: {}", path.display())]
    FileMissing { path: PathBuf },

    /// The names file exists but could not be read or decoded
    #[error("Failed to read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file errors
    #[error("Config error: {0}")]
    Config(String),

    /// Clipboard access errors
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using NameFindError
pub type Result<T> = std::result::Result<T, NameFindError>;
