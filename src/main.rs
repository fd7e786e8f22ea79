//! Crypto Academy - a terminal browser for a cryptocurrency learning catalog
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use academy_app::config::{default_config_path, init_config_file, load_settings, Settings};
use academy_app::Route;
use academy_core::prelude::*;
use clap::Parser;

/// Crypto Academy - browse cryptocurrency learning modules in the terminal
#[derive(Parser, Debug)]
#[command(name = "academy", version)]
#[command(about = "Browse cryptocurrency learning modules in the terminal", long_about = None)]
struct Args {
    /// Module to open, e.g. `module-1` or `/module/module-1` (home if omitted)
    #[arg(value_name = "MODULE_ID")]
    module: Option<String>,

    /// Load modules from a TOML or JSON file instead of the built-in catalog
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Settings file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the page as JSON instead of starting the TUI
    #[arg(long)]
    headless: bool,

    /// Print `number id title` for every module and exit
    #[arg(long, conflicts_with = "headless")]
    list: bool,

    /// Write the default settings file (if missing) and print where files live
    #[arg(long, conflicts_with_all = ["headless", "list"])]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    let log_dir = academy_core::logging::init()?;

    let config_path = args.config.clone().or_else(default_config_path);

    if args.init_config {
        let path = config_path.ok_or_else(|| Error::config("No config directory available"))?;
        init_config_file(&path)?;
        println!("config: {}", path.display());
        println!("logs:   {}", log_dir.display());
        return Ok(());
    }

    let settings = match &config_path {
        Some(path) => load_settings(path),
        None => Settings::default(),
    };

    let catalog = crypto_academy::load_catalog(args.catalog.as_deref(), &settings)?;
    let route = Route::from_arg(args.module.as_deref());

    if args.list {
        return crypto_academy::list_modules(&catalog);
    }

    if args.headless {
        let found = crypto_academy::run_headless(&catalog, &route)?;
        return match route.module_id() {
            // Non-zero exit status for scripts
            Some(id) if !found => Err(Error::module_not_found(id)),
            _ => Ok(()),
        };
    }

    crypto_academy::run_tui(catalog, settings, route).await
}

