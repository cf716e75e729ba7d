use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::Shelf;

/// Identity of a long-pressed content item. Only logged, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongPress {
    pub shelf: Shelf,
    pub index: usize,
}

/// Messages for HomeState transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HomeMsg {
    /// The search bar value changed to the given text
    PerformSearch(String),
    /// Clear the query; `abort` is set by the explicit clear gesture
    CancelQuery { abort: bool },
    /// Raw editing key for the search bar
    SearchBarInput(KeyEvent),
    /// Switch key input between the search bar and the feed
    ToggleFocus,
    FocusSearchBar,
    /// A content list reported a long press
    ItemLongPressed(LongPress),
    /// The dimming overlay was tapped
    OverlayTapped,
}
