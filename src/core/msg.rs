use serde::{Deserialize, Serialize};

pub mod feed;
pub mod home;
pub mod search;
pub mod system;

use feed::FeedMsg;
use home::HomeMsg;
use search::SearchMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Search bar, overlay and focus (delegated to HomeState)
    Home(HomeMsg),

    // Curated list navigation (delegated to FeedState)
    Feed(FeedMsg),

    // Store notifications (mirrored into SearchState)
    Search(SearchMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(msg) => msg.is_frequent(),
            Msg::Home(_) | Msg::Feed(_) | Msg::Search(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use color_eyre::Result;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
        assert!(!Msg::Home(HomeMsg::OverlayTapped).is_frequent());
        assert!(!Msg::Feed(FeedMsg::NextItem).is_frequent());
    }

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::System(SystemMsg::Quit), Msg::System(SystemMsg::Quit));
        assert_ne!(Msg::Feed(FeedMsg::NextItem), Msg::Feed(FeedMsg::PrevItem));
    }

    #[test]
    fn test_msg_serialization() -> Result<()> {
        let msg = Msg::Home(HomeMsg::PerformSearch("alien".to_string()));
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: Msg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);
        Ok(())
    }
}
