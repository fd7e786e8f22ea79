//! Headless mode - JSON output instead of the TUI
//!
//! Prints the composed page for a route as pretty JSON to stdout so scripts
//! and tests can inspect exactly what the TUI would show.
//!
//! # Example Output
//!
//! ```json
//! {
//!   "route": "/module/module-1",
//!   "page": {
//!     "view": "module",
//!     "module": { "id": "module-1", "title": "Layer 1（L1）区块链", ... },
//!     "difficulty": { "difficulty": "beginner", "label": "初级", ... },
//!     ...
//!   }
//! }
//! ```

use std::io::{self, Write};

use academy_app::{compose_page, Page, Route};
use academy_core::prelude::*;
use academy_core::Catalog;
use serde::Serialize;

/// Document written to stdout in headless mode
#[derive(Debug, Serialize)]
pub struct HeadlessOutput<'a> {
    pub route: &'a Route,
    pub page: Page<'a>,
}

impl<'a> HeadlessOutput<'a> {
    /// Compose the page a route shows; home lists every module
    pub fn compose(catalog: &'a Catalog, route: &'a Route) -> Self {
        Self {
            route,
            page: compose_page(catalog, route, ""),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.page, Page::NotFound(_))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Print the page for `route` and report whether it resolved.
///
/// Returns `Ok(false)` for an unknown module so the caller can set the
/// exit status.
pub fn run_headless(catalog: &Catalog, route: &Route) -> Result<bool> {
    let output = HeadlessOutput::compose(catalog, route);
    if output.is_not_found() {
        warn!("Headless: no module for {}", route);
    }

    write_stdout(&output.to_json()?)?;
    Ok(!output.is_not_found())
}

/// One `moduleNumber id title` line per module, in catalog order
pub fn list_lines(catalog: &Catalog) -> Vec<String> {
    catalog
        .iter()
        .map(|module| format!("{} {} {}", module.module_number, module.id, module.title))
        .collect()
}

pub fn list_modules(catalog: &Catalog) -> Result<()> {
    write_stdout(&list_lines(catalog).join("\n"))
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}")?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::embedded().unwrap()
    }

    fn json(route: Route) -> serde_json::Value {
        let catalog = catalog();
        let output = HeadlessOutput::compose(&catalog, &route);
        serde_json::from_str(&output.to_json().unwrap()).unwrap()
    }

    #[test]
    fn test_module_page_json() {
        let value = json(Route::module("module-1"));

        assert_eq!(value["route"], "/module/module-1");
        assert_eq!(value["page"]["view"], "module");
        assert_eq!(value["page"]["module"]["title"], "Layer 1（L1）区块链");
        assert_eq!(value["page"]["difficulty"]["label"], "初级");
        assert!(value["page"]["previous"].is_null());
        assert_eq!(value["page"]["next"]["id"], "module-2");
        assert!(value["page"]["content"]["introduction"]
            .as_str()
            .unwrap()
            .starts_with("Layer 1 (L1) 区块链是"));
    }

    #[test]
    fn test_not_found_json() {
        let catalog = catalog();
        let route = Route::module("module-999");
        let output = HeadlessOutput::compose(&catalog, &route);
        assert!(output.is_not_found());

        let value: serde_json::Value = serde_json::from_str(&output.to_json().unwrap()).unwrap();
        assert_eq!(value["page"]["view"], "not_found");
        assert_eq!(value["page"]["requested"], "module-999");
    }

    #[test]
    fn test_home_json_lists_everything() {
        let value = json(Route::Home);

        assert_eq!(value["route"], "/");
        assert_eq!(value["page"]["view"], "home");
        assert_eq!(
            value["page"]["entries"].as_array().unwrap().len(),
            catalog().len()
        );
    }

    #[test]
    fn test_list_lines() {
        let lines = list_lines(&catalog());
        assert_eq!(lines[0], "1 module-1 Layer 1（L1）区块链");
        assert_eq!(lines.len(), catalog().len());
    }
}
