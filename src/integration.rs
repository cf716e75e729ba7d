//! Integration layer
//!
//! This module wires the Elm core to the outside world:
//! - Runtime driving translate, update and command execution
//! - App runner hosting the terminal and the search store subscription

pub mod app_runner;
pub mod runtime;
