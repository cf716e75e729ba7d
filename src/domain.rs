//! Domain logic
//!
//! This module contains domain-specific business logic:
//! - Media catalog and title search
//! - Overlay state machine
//! - Text processing utilities

pub mod catalog;
pub mod overlay;
pub mod text;
pub mod ui;
