//! academy-tui - Terminal UI for Crypto Academy
//!
//! Renders the module detail page, the module list and the not-found
//! notice with ratatui, and drives the TEA loop from `academy-app`.
//!
//! ## Public API
//!
//! - [`run()`] - Run the interactive TUI
//! - [`render::view()`] - Draw one frame for an `AppState`

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod text;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

pub use runner::run;
