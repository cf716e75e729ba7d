use serde::{Deserialize, Serialize};

use crate::{
    core::{cmd::Cmd, msg::search::SearchMsg},
    domain::catalog::MediaItem,
};

/// Mirror of the store-owned search state.
///
/// Only the store decides its content; the home screen replaces its copy
/// whenever the store publishes and otherwise treats it as read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    pub searching: bool,
    pub has_results: bool,
    pub search_results: Vec<MediaItem>,
}

impl SearchState {
    pub fn result_count(&self) -> usize {
        self.search_results.len()
    }

    /// Search-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SearchMsg) -> Vec<Cmd> {
        match msg {
            SearchMsg::Synced(snapshot) => {
                *self = snapshot;
                vec![]
            }
        }
    }
}
