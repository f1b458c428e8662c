//! Terminal styling for todo lists.
//!
//! Provides terminal detection and colored list rendering for CLI output.

pub mod styles;
pub mod terminal;
