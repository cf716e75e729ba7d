use serde::{Deserialize, Serialize};

use crate::{
    core::{cmd::Cmd, msg::home::HomeMsg, textarea_engine::TextAreaEngine},
    domain::{
        overlay::OverlayState,
        ui::{CursorPosition, Focus, TextSelection},
    },
};

/// Snapshot of the search bar editor
/// Holds everything needed to rebuild the editor between key presses
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchBarState {
    pub content: String,
    pub cursor_position: CursorPosition,
    pub selection: Option<TextSelection>,
}

impl SearchBarState {
    pub fn new(
        content: String,
        cursor_position: CursorPosition,
        selection: Option<TextSelection>,
    ) -> Self {
        Self {
            content,
            cursor_position,
            selection,
        }
    }

    /// Editor holding `content` with the cursor at its end
    pub fn with_content(content: &str) -> Self {
        Self::new(content.to_string(), CursorPosition::end_of(content), None)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Screen-local state of the home screen
///
/// Invariant: `pending_search` is false whenever `query` is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeState {
    pub query: String,
    pub pending_search: bool,
    pub item_pressed: bool,
    pub search_bar: SearchBarState,
    pub focus: Focus,
}

impl HomeState {
    pub fn overlay(&self) -> OverlayState {
        OverlayState::from_pressed(self.item_pressed)
    }

    pub fn is_overlay_visible(&self, supports_overlay_blur: bool) -> bool {
        self.overlay().is_visible(supports_overlay_blur)
    }

    /// Home-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: HomeMsg, text_area: &dyn TextAreaEngine) -> Vec<Cmd> {
        match msg {
            HomeMsg::PerformSearch(value) => self.perform_search(value),
            HomeMsg::CancelQuery { abort } => self.cancel_query(abort),
            HomeMsg::SearchBarInput(key) => {
                let snapshot = text_area.apply_keys(&self.search_bar, &[key]);
                self.apply_search_bar(snapshot)
            }
            HomeMsg::ToggleFocus => {
                self.focus = self.focus.toggle();
                vec![]
            }
            HomeMsg::FocusSearchBar => {
                self.focus = Focus::SearchBar;
                vec![]
            }
            HomeMsg::ItemLongPressed(press) => {
                log::debug!("long press on {:?} #{}", press.shelf, press.index);
                self.item_pressed = self.overlay().long_press().is_shown();
                vec![]
            }
            HomeMsg::OverlayTapped => {
                self.item_pressed = self.overlay().tap().is_shown();
                vec![]
            }
        }
    }

    /// Called on every change of the search bar value.
    ///
    /// A non-empty value marks a search as pending and asks the store to look
    /// it up; an empty value resets the query and asks the store to stop.
    pub fn perform_search(&mut self, value: String) -> Vec<Cmd> {
        if value.is_empty() {
            return self.reset_query();
        }

        self.pending_search = true;
        self.query.clone_from(&value);
        if self.search_bar.content != self.query {
            self.search_bar = SearchBarState::with_content(&self.query);
        }
        vec![Cmd::search(value)]
    }

    /// Clear the query.
    ///
    /// With `abort` (the clear gesture) the query is always reset. Without it
    /// the reset only happens when the query is already empty. Nothing in the
    /// UI sends `abort: false`; the guard is kept until its intent is settled.
    pub fn cancel_query(&mut self, abort: bool) -> Vec<Cmd> {
        if abort || self.query.is_empty() {
            self.reset_query()
        } else {
            vec![]
        }
    }

    fn reset_query(&mut self) -> Vec<Cmd> {
        self.pending_search = false;
        self.query.clear();
        self.search_bar = SearchBarState::default();
        vec![Cmd::cancel_search()]
    }

    /// Store an edited search bar snapshot and run a search when its value changed
    fn apply_search_bar(&mut self, snapshot: SearchBarState) -> Vec<Cmd> {
        let changed = snapshot.content != self.query;
        self.search_bar = snapshot;
        if changed {
            let value = self.search_bar.content.clone();
            self.perform_search(value)
        } else {
            vec![]
        }
    }
}
