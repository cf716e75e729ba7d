//! Home component
//!
//! Header (top padding, search bar and result stats) above a container that
//! holds the search region and the feed region picked by the selector.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    core::state::AppState,
    presentation::{
        components::{FeedComponent, ResultsComponent, SearchBarComponent},
        selector::{select_layout, FeedRegion, SearchVariant},
        widgets::spinner::SpinnerWidget,
    },
};

const NO_RESULT: &str = "No result found";

#[derive(Debug, Clone, Default)]
pub struct HomeComponent {
    search_bar: SearchBarComponent,
    feed: FeedComponent,
    results: ResultsComponent,
}

impl HomeComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let capabilities = &state.config.config.capabilities;
        let stats_height = u16::from(state.home.pending_search);

        let [padding, search_bar, stats, container] = Layout::vertical([
            Constraint::Length(capabilities.top_padding()),
            Constraint::Length(SearchBarComponent::HEIGHT),
            Constraint::Length(stats_height),
            Constraint::Min(0),
        ])
        .areas(area);

        let header_style = state.config.config.styles.style("header");
        frame.render_widget(Paragraph::new("").style(header_style), padding);
        self.search_bar.view(state, frame, search_bar);
        if state.home.pending_search {
            frame.render_widget(
                Paragraph::new(Self::stats_text(state))
                    .style(state.config.config.styles.style("stats")),
                stats,
            );
        }

        self.view_container(state, frame, container);
    }

    /// Line under the search bar while a search is pending
    pub fn stats_text(state: &AppState) -> String {
        format!("{} items found", state.search.result_count())
    }

    fn view_container(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let layout = select_layout(&state.search, &state.home);
        let compact = state.config.config.capabilities.compact_spinner();

        let search_height = match layout.search {
            None => Constraint::Length(0),
            Some(SearchVariant::Results) => Constraint::Percentage(50),
            Some(SearchVariant::Loading) => Constraint::Length(SpinnerWidget::height(compact)),
            Some(SearchVariant::NoResult) => Constraint::Length(1),
        };
        let [search_area, feed_area] =
            Layout::vertical([search_height, Constraint::Min(0)]).areas(area);

        match layout.search {
            Some(SearchVariant::Results) => self.results.view(state, frame, search_area),
            Some(SearchVariant::Loading) => {
                let spinner = SpinnerWidget::new(compact)
                    .style(state.config.config.styles.style("spinner"));
                frame.render_widget(spinner, search_area);
            }
            Some(SearchVariant::NoResult) => {
                let placeholder = Paragraph::new(NO_RESULT)
                    .alignment(Alignment::Center)
                    .style(state.config.config.styles.style("no_result"));
                frame.render_widget(placeholder, search_area);
            }
            None => {}
        }

        match layout.feed {
            FeedRegion::HomeFeed => self.feed.view(state, frame, feed_area),
            FeedRegion::Results => self.results.view(state, frame, feed_area),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::search::SearchState;
    use crate::domain::catalog::MediaItem;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(state: &AppState) -> color_eyre::Result<String> {
        let mut terminal = Terminal::new(TestBackend::new(80, 30))?;
        terminal.draw(|f| HomeComponent::new().view(state, f, f.area()))?;
        let buffer = terminal.backend().buffer();
        Ok((0..30)
            .map(|y| (0..80).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn pending(search: SearchState) -> AppState {
        let mut state = AppState::default();
        state.home.query = "dune".into();
        state.home.pending_search = true;
        state.search = search;
        state
    }

    #[test]
    fn test_idle_shows_feed_without_stats() -> color_eyre::Result<()> {
        let screen = render(&AppState::default())?;

        assert!(screen.contains("Popular Movies"));
        assert!(!screen.contains("items found"));
        assert!(!screen.contains(NO_RESULT));
        Ok(())
    }

    #[test]
    fn test_no_result_placeholder() -> color_eyre::Result<()> {
        let screen = render(&pending(SearchState::default()))?;

        assert!(screen.contains(NO_RESULT));
        assert!(screen.contains("0 items found"));
        assert!(!screen.contains("Popular Movies"));
        Ok(())
    }

    #[test]
    fn test_results_are_rendered_in_both_regions() -> color_eyre::Result<()> {
        let screen = render(&pending(SearchState {
            searching: false,
            has_results: true,
            search_results: vec![MediaItem::new(1, "Dune").with_year(2021)],
        }))?;

        assert_eq!(screen.matches("Dune (2021)").count(), 2);
        assert!(screen.contains("1 items found"));
        Ok(())
    }

    #[test]
    fn test_loading_indicator() -> color_eyre::Result<()> {
        let screen = render(&pending(SearchState {
            searching: true,
            ..Default::default()
        }))?;

        assert!(screen.contains("Searching"));
        Ok(())
    }
}
