//! Dimming overlay shown after a long press on a content item

use serde::{Deserialize, Serialize};

/// Overlay lifecycle: `Dismissed` until a long press, `Shown` until tapped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverlayState {
    #[default]
    Dismissed,
    Shown,
}

impl OverlayState {
    pub fn from_pressed(item_pressed: bool) -> Self {
        if item_pressed {
            OverlayState::Shown
        } else {
            OverlayState::Dismissed
        }
    }

    /// A long press on any content item shows the overlay
    pub fn long_press(self) -> Self {
        OverlayState::Shown
    }

    /// Tapping the overlay dismisses it
    pub fn tap(self) -> Self {
        OverlayState::Dismissed
    }

    pub fn is_shown(&self) -> bool {
        *self == OverlayState::Shown
    }

    /// The overlay is only part of the render tree when the terminal
    /// supports it. Without support the state still changes but never shows.
    pub fn is_visible(&self, supports_overlay_blur: bool) -> bool {
        supports_overlay_blur && self.is_shown()
    }
}
