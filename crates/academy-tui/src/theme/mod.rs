//! Centralized theme for the academy TUI.
//!
//! - `palette`: Raw color constants
//! - `styles`: Semantic style builders and tone mapping
//! - `icons`: Glyphs with Nerd Font and Unicode variants

pub mod icons;
pub mod palette;
pub mod styles;
