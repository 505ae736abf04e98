//! Name filter service - the only thing the window talks to.
//!
//! This module ties the registry and the search together:
//! - Loading the names file once at startup
//! - Keeping the registry empty when loading fails
//! - Describing the startup condition for the status line
//! - Answering searches against the loaded registry

pub mod config;

pub use config::{AppConfig, WindowConfig};

use std::path::{Path, PathBuf};

use crate::registry::NameRegistry;
use crate::search::{self, SearchOutcome};
use crate::NameFindError;

/// Colour class of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Normal,
    Warning,
    Error,
}

/// Condition of the registry after startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Names loaded, registry non-empty
    Loaded(usize),
    /// File present but contained no names
    Empty,
    /// File does not exist
    FileMissing,
    /// File could not be read or decoded
    ReadError(String),
}

impl LoadStatus {
    fn from_result(result: &crate::Result<NameRegistry>) -> Self {
        match result {
            Ok(registry) if registry.is_empty() => LoadStatus::Empty,
            Ok(registry) => LoadStatus::Loaded(registry.len()),
            Err(NameFindError::FileMissing { .. }) => LoadStatus::FileMissing,
            Err(NameFindError::ReadError { source, .. }) => LoadStatus::ReadError(source.to_string()),
            Err(e) => LoadStatus::ReadError(e.to_string()),
        }
    }

    /// Initial status line for this condition.
    pub fn message(&self, path: &Path) -> String {
        let file = path.display();
        match self {
            LoadStatus::Loaded(_) => "Enter a name to search.".to_string(),
            LoadStatus::Empty => format!("\"{}\" is empty or has no valid names.", file),
            LoadStatus::FileMissing => format!("Error: \"{}\" does not exist.", file),
            LoadStatus::ReadError(cause) => format!("Error reading \"{}\": {}", file, cause),
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            LoadStatus::Loaded(_) => StatusTone::Normal,
            LoadStatus::Empty => StatusTone::Warning,
            LoadStatus::FileMissing | LoadStatus::ReadError(_) => StatusTone::Error,
        }
    }
}

/// Registry plus the outcome of loading it.
#[derive(Debug, Clone)]
pub struct NameFilterService {
    path: PathBuf,
    registry: NameRegistry,
    load_status: LoadStatus,
}

impl NameFilterService {
    /// Load the names file at `path`.
    ///
    /// Never fails: on error the registry is left empty and the error is
    /// returned alongside so the caller can report it.
    pub fn load(path: &Path) -> (Self, Option<NameFindError>) {
        let result = NameRegistry::load(path);
        let load_status = LoadStatus::from_result(&result);

        let (registry, error) = match result {
            Ok(registry) => {
                if registry.is_empty() {
                    tracing::warn!("Names file {:?} contains no names", path);
                }
                (registry, None)
            }
            Err(e) => {
                tracing::error!("Failed to load names: {}", e);
                (NameRegistry::default(), Some(e))
            }
        };

        let service = Self {
            path: path.to_path_buf(),
            registry,
            load_status,
        };
        (service, error)
    }

    /// Build a service around an in-memory registry.
    pub fn from_registry(path: impl Into<PathBuf>, registry: NameRegistry) -> Self {
        let load_status = if registry.is_empty() {
            LoadStatus::Empty
        } else {
            LoadStatus::Loaded(registry.len())
        };
        Self {
            path: path.into(),
            registry,
            load_status,
        }
    }

    /// Run a search against the loaded registry.
    pub fn search(&self, query: &str) -> SearchOutcome {
        let outcome = search::search(self.registry.names(), query);
        tracing::debug!("Search {:?}: {:?}", query.trim(), outcome.status);
        outcome
    }

    pub fn names(&self) -> &[String] {
        self.registry.names()
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    /// Status line to show before the first search.
    pub fn startup_message(&self) -> String {
        self.load_status.message(&self.path)
    }
}
