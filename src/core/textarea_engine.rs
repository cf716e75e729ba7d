use crossterm::event::KeyEvent;

use crate::core::state::home::SearchBarState;

/// Engine interface that applies a sequence of key events to a search bar snapshot
/// and returns the resulting snapshot. The implementation should be deterministic
/// and free of external side effects so that it can be used from the pure update path.
pub trait TextAreaEngine: Send + Sync {
    /// Apply keys to the given snapshot and return the updated snapshot.
    fn apply_keys(&self, snapshot: &SearchBarState, keys: &[KeyEvent]) -> SearchBarState;
}

/// No-op engine used for tests or when no editing should occur.
pub struct NoopTextAreaEngine;

impl TextAreaEngine for NoopTextAreaEngine {
    fn apply_keys(&self, snapshot: &SearchBarState, _keys: &[KeyEvent]) -> SearchBarState {
        snapshot.clone()
    }
}
