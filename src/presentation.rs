//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Stateless components rendering `AppState`
//! - The selector deciding what the home screen shows
//! - Reusable widgets
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod selector;
pub mod widgets;
