//! # Marquee - a terminal home screen for a media catalog
//!
//! The home screen shows a search bar above a feed of curated lists (a
//! featured poster, popular movies, popular TV, family and documentary) and
//! swaps in search results, a loading indicator or a "No result found"
//! placeholder while a search is pending. Lookups are owned by a search
//! store that the screen only talks to through injected seams.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): Application state
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **Command** (`core::cmd`): Side effects (store intents, terminal resizes)
//! - **View** (`presentation`): UI rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use marquee::core::{cmd::Cmd, msg::{home::HomeMsg, Msg}, state::AppState, update::update};
//!
//! let (state, commands) = update(
//!     Msg::Home(HomeMsg::PerformSearch("dune".into())),
//!     AppState::default(),
//! );
//!
//! assert!(state.home.pending_search);
//! assert_eq!(commands, vec![Cmd::search("dune")]);
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
