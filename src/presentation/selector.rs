//! Chooses what the home screen shows below the header
//!
//! Two regions share one container. The search region shows whichever
//! variant matches the store state, and the feed region shows either the
//! home feed or the search results. With results available and a search
//! pending both regions show the results, one above the other.

use crate::core::state::{home::HomeState, search::SearchState};

/// Content of the search region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchVariant {
    Results,
    Loading,
    NoResult,
}

/// Content of the feed region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedRegion {
    HomeFeed,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeLayout {
    pub search: Option<SearchVariant>,
    pub feed: FeedRegion,
}

pub fn select_search_variant(
    searching: bool,
    has_results: bool,
    pending_search: bool,
) -> Option<SearchVariant> {
    match (searching, has_results, pending_search) {
        (true, true, _) => Some(SearchVariant::Results),
        (true, false, _) => Some(SearchVariant::Loading),
        (false, true, true) => Some(SearchVariant::Results),
        (false, false, true) => Some(SearchVariant::NoResult),
        (false, _, false) => None,
    }
}

pub fn select_feed_region(pending_search: bool) -> FeedRegion {
    if pending_search {
        FeedRegion::Results
    } else {
        FeedRegion::HomeFeed
    }
}

pub fn select_layout(search: &SearchState, home: &HomeState) -> HomeLayout {
    HomeLayout {
        search: select_search_variant(search.searching, search.has_results, home.pending_search),
        feed: select_feed_region(home.pending_search),
    }
}
