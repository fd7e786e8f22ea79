//! Crypto Academy Library
//!
//! A terminal browser for a cryptocurrency learning catalog: the module
//! detail page, sequential navigation and a headless JSON mode.

pub mod headless;

use std::path::Path;

use academy_app::config::Settings;
use academy_app::state::AppState;
use academy_app::Route;
use academy_core::prelude::*;
use academy_core::Catalog;

pub use headless::{list_modules, run_headless};

/// Pick the catalog: an explicit path wins over the settings file, and
/// with neither the embedded dataset is used
pub fn load_catalog(override_path: Option<&Path>, settings: &Settings) -> Result<Catalog> {
    let path = override_path
        .map(Path::to_path_buf)
        .or_else(|| settings.catalog.custom_path());

    match path {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            Catalog::load(&path)
        }
        None => {
            debug!("Using embedded catalog");
            Catalog::embedded()
        }
    }
}

/// Run the interactive TUI starting at `route`
pub async fn run_tui(catalog: Catalog, settings: Settings, route: Route) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("Crypto Academy starting at {}", route);
    info!("═══════════════════════════════════════════════════════");

    let mut state = AppState::new(catalog, settings).with_route(route);
    let result = academy_tui::run(&mut state).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Crypto Academy exiting");
    result
}
