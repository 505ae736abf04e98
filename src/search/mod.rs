//! Search module - case-insensitive substring filtering over the registry.
//!
//! A search is a pure function of the names and the query. The query is
//! trimmed, both sides are lowercased, and every name containing the query
//! is returned in registry order. No ranking, no deduplication, no limit.

pub mod status;

pub use status::SearchStatus;

/// Result of a single search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Matching names in registry order
    pub results: Vec<String>,
    /// What kind of outcome this is
    pub status: SearchStatus,
}

impl SearchOutcome {
    fn empty(status: SearchStatus) -> Self {
        Self {
            results: Vec::new(),
            status,
        }
    }
}

/// Filter `names` by `query`.
///
/// An empty `names` slice always yields `RegistryUnavailable`, checked
/// before the query. A query that is empty after trimming yields `NoQuery`.
///
/// # Examples
///
/// ```
/// use namefind::search::{search, SearchStatus};
///
/// let names = vec!["Alice".to_string(), "Bob".to_string(), "Carl".to_string()];
/// let outcome = search(&names, "a");
/// assert_eq!(outcome.results, ["Alice", "Carl"]);
/// assert_eq!(outcome.status, SearchStatus::Found(2));
/// ```
pub fn search(names: &[String], query: &str) -> SearchOutcome {
    if names.is_empty() {
        return SearchOutcome::empty(SearchStatus::RegistryUnavailable);
    }

    let query = query.trim();
    if query.is_empty() {
        return SearchOutcome::empty(SearchStatus::NoQuery);
    }

    let needle = query.to_lowercase();
    let results: Vec<String> = names
        .iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    let status = if results.is_empty() {
        SearchStatus::NotFound
    } else {
        SearchStatus::Found(results.len())
    };

    SearchOutcome { results, status }
}
