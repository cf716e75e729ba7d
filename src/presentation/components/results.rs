//! Search results component

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};

use crate::core::state::AppState;

#[derive(Debug, Clone, Default)]
pub struct ResultsComponent;

impl ResultsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let style = state.config.config.styles.style("results");
        let items: Vec<ListItem> = state
            .search
            .search_results
            .iter()
            .map(|item| {
                ListItem::new(Line::from(vec![
                    Span::raw(item.label()),
                    Span::raw(format!("  {}", item.kind)).dim(),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::TOP).title(" Results "))
            .style(style);
        frame.render_widget(list, area);
    }
}
