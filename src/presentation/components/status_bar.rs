//! Status bar component
//!
//! Displays the input mode and the latest status message at the bottom of the screen.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        let style = state.config.config.styles.style("status_bar");
        frame.render_widget(Paragraph::new(Self::line(state)).style(style), area);
    }

    /// Mode label followed by the status message, if any
    pub fn line(state: &AppState) -> Line<'static> {
        let mut spans = vec![Span::raw(format!(" {} ", state.home.focus.label())).reversed()];
        if let Some(message) = state.system.status_message() {
            spans.push(Span::raw(format!(" {message}")));
        }
        Line::from(spans)
    }
}
