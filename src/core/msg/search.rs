use serde::{Deserialize, Serialize};

use crate::core::state::search::SearchState;

/// Notifications coming from the search store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchMsg {
    /// The store published a new state
    Synced(SearchState),
}
