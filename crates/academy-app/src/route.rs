//! Application routes: the home list and module detail pages.

use std::fmt;

use serde::{Serialize, Serializer};

const MODULE_PREFIX: &str = "/module/";

/// A navigable location
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// Module list (`/`)
    #[default]
    Home,
    /// Module detail page (`/module/<id>`)
    Module(String),
}

impl Route {
    pub fn module(id: impl Into<String>) -> Self {
        Route::Module(id.into())
    }

    /// Path form of the route
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Module(id) => format!("{MODULE_PREFIX}{id}"),
        }
    }

    /// Parse a path. Returns `None` for paths outside the route table.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim();
        if path.is_empty() || path == "/" {
            return Some(Route::Home);
        }
        path.strip_prefix(MODULE_PREFIX)
            .map(|id| id.trim_end_matches('/'))
            .filter(|id| !id.is_empty() && !id.contains('/'))
            .map(Route::module)
    }

    /// Route for an optional CLI argument: a module id, a path, or nothing
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg.map(str::trim) {
            None | Some("") => Route::Home,
            Some(arg) if arg.starts_with('/') => {
                Route::from_path(arg).unwrap_or_else(|| Route::module(arg))
            }
            Some(id) => Route::module(id),
        }
    }

    /// Module id carried by this route
    pub fn module_id(&self) -> Option<&str> {
        match self {
            Route::Home => None,
            Route::Module(id) => Some(id),
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Route::Home)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.path())
    }
}
