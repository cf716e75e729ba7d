//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::{core::state::AppState, presentation::widgets::overlay::OverlayWidget};

pub mod feed;
pub mod home;
pub mod results;
pub mod search_bar;
pub mod status_bar;

pub use feed::FeedComponent;
pub use home::HomeComponent;
pub use results::ResultsComponent;
pub use search_bar::SearchBarComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
///
/// This struct holds instances of all components used in the application.
/// Components are stateless and receive state as parameters during render.
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub home: HomeComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    /// Create a new component collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Render all components
    ///
    /// This is the main rendering entry point that delegates to individual components.
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();

        let [main, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        self.home.view(state, frame, main);
        self.status_bar.view(state, frame, status);

        // The overlay covers everything, status bar included
        if state.is_overlay_visible() {
            let style = state.config.config.styles.style("overlay");
            frame.render_widget(OverlayWidget::new(style), area);
        }
    }
}
