//! Search status kinds and the text shown for them.

/// Outcome category of a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// Query was empty after trimming
    NoQuery,
    /// Registry is empty (never loaded, load failed, or empty file)
    RegistryUnavailable,
    /// At least one name matched
    Found(usize),
    /// Query was valid but nothing matched
    NotFound,
}

impl SearchStatus {
    /// Message for the status line.
    pub fn message(&self) -> String {
        match self {
            SearchStatus::NoQuery => "Please enter a search keyword.".to_string(),
            SearchStatus::RegistryUnavailable => "Name list is not loaded or is empty.".to_string(),
            SearchStatus::Found(1) => "Found 1 result.".to_string(),
            SearchStatus::Found(n) => format!("Found {} results.", n),
            SearchStatus::NotFound => "No matching name.".to_string(),
        }
    }

    /// Dimmed row shown in the result list in place of results, if any.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            SearchStatus::RegistryUnavailable => Some("Name list is not loaded or is empty"),
            SearchStatus::NotFound => Some("No such person"),
            SearchStatus::NoQuery | SearchStatus::Found(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_distinct() {
        let messages = [
            SearchStatus::NoQuery.message(),
            SearchStatus::RegistryUnavailable.message(),
            SearchStatus::Found(2).message(),
            SearchStatus::NotFound.message(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_found_message_counts() {
        assert_eq!(SearchStatus::Found(1).message(), "Found 1 result.");
        assert_eq!(SearchStatus::Found(12).message(), "Found 12 results.");
    }

    #[test]
    fn test_placeholders() {
        assert!(SearchStatus::NoQuery.placeholder().is_none());
        assert!(SearchStatus::Found(3).placeholder().is_none());
        assert_eq!(SearchStatus::NotFound.placeholder(), Some("No such person"));
        assert!(SearchStatus::RegistryUnavailable.placeholder().is_some());
    }
}
