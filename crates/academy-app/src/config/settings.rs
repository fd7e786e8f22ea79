//! Settings parser for `<config_dir>/crypto-academy/config.toml`

use super::types::Settings;
use academy_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "crypto-academy";

const DEFAULT_CONFIG: &str = r#"# Crypto Academy Configuration

[ui]
icons = "unicode"        # "unicode" or "nerd_fonts"
show_deep_dives = true   # Render extended sections on module pages
show_keywords = true     # Render keyword tags under the summary
scroll_step = 1          # Lines per scroll step

[catalog]
path = ""                # TOML/JSON catalog file; empty = embedded dataset
"#;

/// Default settings file location, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from a config file.
///
/// Never fails: a missing, unreadable or invalid file yields defaults.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write the commented default config file if none exists
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        debug!("Config file already exists at {:?}", config_path);
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    info!("Created default config at {:?}", config_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconMode;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join("config.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        let config = r#"
[ui]
icons = "nerd_fonts"
show_deep_dives = false
scroll_step = 3

[catalog]
path = "/data/catalog.json"
"#;
        std::fs::write(&path, config).unwrap();

        let settings = load_settings(&path);

        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert!(!settings.ui.show_deep_dives);
        assert!(settings.ui.show_keywords);
        assert_eq!(settings.ui.scroll_step, 3);
        assert_eq!(
            settings.catalog.custom_path(),
            Some(PathBuf::from("/data/catalog.json"))
        );
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_load_settings_wrong_type_falls_back() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui]\nscroll_step = \"fast\"\n").unwrap();

        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_init_config_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        init_config_file(&path).unwrap();

        assert!(path.exists());
        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Settings = toml::from_str(&content).expect("Default config should be valid TOML");
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn test_init_config_file_keeps_existing() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui]\nscroll_step = 5\n").unwrap();

        init_config_file(&path).unwrap();

        assert_eq!(load_settings(&path).ui.scroll_step, 5);
    }

    #[test]
    fn test_default_config_path_names_app_dir() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("crypto-academy/config.toml"));
        }
    }
}
