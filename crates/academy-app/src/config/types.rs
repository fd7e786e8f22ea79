//! Configuration types for Crypto Academy
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `UiSettings`, `CatalogSettings` - Per-section settings
//! - `IconMode` - Glyph set used by the renderer

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Icon rendering mode.
///
/// Choose between Nerd Font glyphs (requires a Nerd Font in the terminal)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// Render the extended sections on module pages that have them
    #[serde(default = "default_true")]
    pub show_deep_dives: bool,

    /// Render keyword tags under the module summary
    #[serde(default = "default_true")]
    pub show_keywords: bool,

    /// Lines moved per scroll step
    #[serde(default = "default_scroll_step")]
    pub scroll_step: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            show_deep_dives: true,
            show_keywords: true,
            scroll_step: default_scroll_step(),
        }
    }
}

impl UiSettings {
    /// Scroll step, never zero
    pub fn effective_scroll_step(&self) -> usize {
        self.scroll_step.max(1)
    }
}

/// Catalog source settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// Path to a TOML or JSON catalog; empty means the embedded dataset
    #[serde(default)]
    pub path: String,
}

impl CatalogSettings {
    pub fn custom_path(&self) -> Option<PathBuf> {
        let path = self.path.trim();
        if path.is_empty() {
            None
        } else {
            Some(PathBuf::from(path))
        }
    }
}

/// Global application settings from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,
}

fn default_true() -> bool {
    true
}

fn default_scroll_step() -> usize {
    1
}
