//! Parsers for the user-facing parts of the config file: key sequences
//! mapped to actions, and named styles for the home screen widgets.

pub mod keybindings;
pub mod styles;
