//! Seams between the home screen and the search store
//!
//! The store owns [`SearchState`] and performs lookups. The screen only
//! sends [`SearchIntent`]s through a [`SearchDispatcher`] and observes the
//! store through a read-only [`SearchStateSource`]. Both are injected at the
//! composition root so that any store implementation can be plugged in.

use color_eyre::eyre::Result;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::core::state::search::SearchState;

/// Requests for a search state transition. Their effect is defined by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchIntent {
    /// Start looking up `query`
    Search { query: String },
    /// Stop searching and forget the current results
    CancelSearch,
}

impl SearchIntent {
    pub fn search(query: impl Into<String>) -> Self {
        SearchIntent::Search {
            query: query.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SearchIntent::Search { .. } => "Search",
            SearchIntent::CancelSearch => "CancelSearch",
        }
    }
}

/// Write side of the store
pub trait SearchDispatcher: Send + Sync {
    fn dispatch(&self, intent: SearchIntent) -> Result<()>;
}

/// Read side of the store
pub trait SearchStateSource: Send + Sync {
    /// Current state
    fn snapshot(&self) -> SearchState;

    /// Receiver notified whenever the store publishes a new state
    fn subscribe(&self) -> watch::Receiver<SearchState>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_helpers() {
        assert_eq!(
            SearchIntent::search("heat"),
            SearchIntent::Search {
                query: "heat".to_string()
            }
        );
        assert_eq!(SearchIntent::search("heat").name(), "Search");
        assert_eq!(SearchIntent::CancelSearch.name(), "CancelSearch");
    }

    #[test]
    fn test_intent_serde() -> Result<()> {
        let intent = SearchIntent::search("dune");
        let s = serde_json::to_string(&intent)?;
        let back: SearchIntent = serde_json::from_str(&s)?;
        assert_eq!(intent, back);
        Ok(())
    }
}
