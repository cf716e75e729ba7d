//! Home feed component
//!
//! Poster for the featured item followed by the curated shelves.

use ratatui::prelude::*;
use strum::IntoEnumIterator;

use crate::{
    core::state::AppState,
    domain::{catalog::Shelf, ui::Focus},
    presentation::widgets::{
        poster::PosterWidget,
        shelf::{ShelfStyles, ShelfWidget},
    },
};

const POSTER_HEIGHT: u16 = 5;
const SHELF_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Default)]
pub struct FeedComponent;

impl FeedComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let catalog = state.catalog();

        let constraints = std::iter::once(Constraint::Length(POSTER_HEIGHT))
            .chain(Shelf::iter().map(|_| Constraint::Length(SHELF_HEIGHT)))
            .chain(std::iter::once(Constraint::Min(0)));
        let areas = Layout::vertical(constraints).split(area);

        frame.render_widget(
            PosterWidget::new(catalog.featured()).style(styles.style("poster")),
            areas[0],
        );

        let browsing = state.home.focus == Focus::Feed;
        for (shelf, shelf_area) in Shelf::iter().zip(areas.iter().skip(1)) {
            let shelf_styles = ShelfStyles {
                title: styles.style("shelf_title"),
                item: styles.style("item"),
                selected: styles.style("selected_item"),
            };
            let widget = ShelfWidget::new(shelf, catalog.items(shelf), shelf_styles).selected(
                state.feed.selected_index(shelf),
                browsing && state.feed.shelf == shelf,
            );
            frame.render_widget(widget, *shelf_area);
        }
    }
}
