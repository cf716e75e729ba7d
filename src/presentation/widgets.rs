//! Reusable UI widgets
//!
//! This module contains stateless widgets that components compose.

pub mod overlay;
pub mod poster;
pub mod shelf;
pub mod spinner;
