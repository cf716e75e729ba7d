use serde::{Deserialize, Serialize};

/// Cursor position inside the single-line search bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

impl CursorPosition {
    /// Position right after the last character of `text`
    pub fn end_of(text: &str) -> Self {
        Self {
            line: 0,
            column: text.chars().count(),
        }
    }
}

/// Text selection range within the search bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSelection {
    pub start: CursorPosition,
    pub end: CursorPosition,
}

/// Which part of the home screen receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Focus {
    #[default]
    SearchBar,
    Feed,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::SearchBar => Focus::Feed,
            Focus::Feed => Focus::SearchBar,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Focus::SearchBar => "SEARCH",
            Focus::Feed => "BROWSE",
        }
    }
}
