//! Search window for the Name Finder desktop application.
//!
//! Provides the egui-based window around [`crate::service::NameFilterService`]:
//! query line, result list, status line and CJK font setup.

pub mod actions;
pub mod app;
pub mod fonts;
pub mod results;

pub use app::{NameSearchApp, SearchState};
