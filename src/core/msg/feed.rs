use serde::{Deserialize, Serialize};

/// Messages for FeedState transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedMsg {
    NextShelf,
    PrevShelf,
    NextItem,
    PrevItem,
}
