//! Search bar component
//!
//! Single-line input with a "Discover" placeholder. The text and cursor come
//! from the search bar snapshot kept in `HomeState`.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::{core::state::AppState, domain::ui::Focus};

const PLACEHOLDER: &str = "Discover";

#[derive(Debug, Clone, Default)]
pub struct SearchBarComponent;

impl SearchBarComponent {
    /// Rows taken by the bordered input
    pub const HEIGHT: u16 = 3;

    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let focused = state.home.focus == Focus::SearchBar;
        let style = if focused {
            styles.style("search_bar_focused")
        } else {
            styles.style("search_bar")
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(style);
        let inner = block.inner(area);

        let bar = &state.home.search_bar;
        let text = if bar.is_empty() {
            Line::from(PLACEHOLDER).dim()
        } else {
            Line::from(bar.content.as_str())
        };
        frame.render_widget(Paragraph::new(text).block(block), area);

        if focused && inner.width > 0 && inner.height > 0 && !state.is_overlay_visible() {
            let offset = Self::cursor_offset(&bar.content, bar.cursor_position.column);
            let x = inner.x + offset.min(inner.width - 1);
            frame.set_cursor_position((x, inner.y));
        }
    }

    /// Display columns before the cursor at char index `column`
    pub fn cursor_offset(content: &str, column: usize) -> u16 {
        let prefix: String = content.chars().take(column).collect();
        u16::try_from(prefix.width()).unwrap_or(u16::MAX)
    }
}
