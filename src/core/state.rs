pub mod feed;
pub mod home;
pub mod search;
pub mod system;

use crate::{domain::catalog::Catalog, infrastructure::config::Config};

use feed::FeedState;
use home::HomeState;
use search::SearchState;
use system::SystemState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub home: HomeState,
    pub feed: FeedState,
    pub search: SearchState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded at startup
    pub config: Config,
}

impl AppState {
    /// Initialize AppState with the given configuration
    pub fn new_with_config(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Default::default()
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.config.config.catalog
    }

    pub fn supports_overlay_blur(&self) -> bool {
        self.config.config.capabilities.supports_overlay_blur
    }

    /// Whether the dimming overlay is currently drawn over the screen
    pub fn is_overlay_visible(&self) -> bool {
        self.home.is_overlay_visible(self.supports_overlay_blur())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ui::Focus;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert_eq!(state.home.query, "");
        assert!(!state.home.pending_search);
        assert!(!state.home.item_pressed);
        assert_eq!(state.home.focus, Focus::SearchBar);
        assert!(!state.search.searching);
        assert!(!state.system.should_quit);
    }

    #[test]
    fn test_overlay_visibility_follows_capability() {
        let mut config = Config::default();
        config.capabilities.supports_overlay_blur = false;
        let mut state = AppState::new_with_config(config);
        state.home.item_pressed = true;
        assert!(!state.is_overlay_visible());

        state.config.config.capabilities.supports_overlay_blur = true;
        assert!(state.is_overlay_visible());
    }
}
