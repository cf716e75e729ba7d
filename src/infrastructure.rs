//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - The in-process catalog search store

pub mod catalog_store;
pub mod cli;
pub mod config;
pub mod tui;
