//! Learning catalog: the static, ordered collection of modules.
//!
//! The catalog owns every [`Module`] record, keeps them in `moduleNumber`
//! order and answers the lookups the pages need: resolve an identifier,
//! and find the previous/next module for sequential navigation.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::prelude::*;
use crate::types::Module;

/// Catalog compiled into the binary
const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.toml");

/// On-disk catalog file shape (`[[modules]]` array)
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    modules: Vec<Module>,
}

/// Outcome of resolving a route parameter against the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    Found(&'a Module),
    /// No record matched. `requested` is `None` when no identifier was given.
    NotFound { requested: Option<String> },
}

impl<'a> Resolution<'a> {
    pub fn module(&self) -> Option<&'a Module> {
        match self {
            Resolution::Found(module) => Some(module),
            Resolution::NotFound { .. } => None,
        }
    }
}

/// Previous and next modules around a given one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neighbours<'a> {
    pub previous: Option<&'a Module>,
    pub next: Option<&'a Module>,
}

/// Ordered, read-only module collection
#[derive(Debug, Clone)]
pub struct Catalog {
    modules: Vec<Module>,
}

impl Catalog {
    /// Build a catalog, enforcing unique ids.
    ///
    /// Modules are sorted by `module_number`. Gaps or repeated numbers are
    /// tolerated but logged, since navigation only looks for exact neighbours.
    pub fn new(mut modules: Vec<Module>) -> Result<Self> {
        if modules.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for module in &modules {
            if !seen.insert(module.id.as_str()) {
                return Err(Error::duplicate_module_id(&module.id));
            }
        }

        modules.sort_by_key(|m| m.module_number);

        for pair in modules.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if a.module_number == b.module_number {
                warn!(
                    "Modules {} and {} share module number {}",
                    a.id, b.id, a.module_number
                );
            } else if b.module_number != a.module_number + 1 {
                warn!(
                    "Gap in module numbers between {} ({}) and {} ({})",
                    a.id, a.module_number, b.id, b.module_number
                );
            }
        }

        debug!("Catalog built with {} modules", modules.len());
        Ok(Self { modules })
    }

    /// The catalog shipped with the binary
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_CATALOG)
    }

    /// Parse a TOML catalog (`[[modules]]` tables)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.modules)
    }

    /// Parse a JSON catalog: either `{"modules": [...]}` or a bare array
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        let modules: Vec<Module> = if value.is_array() {
            serde_json::from_value(value)?
        } else {
            serde_json::from_value::<CatalogFile>(value)?.modules
        };
        Self::new(modules)
    }

    /// Load a catalog file: `.json` is JSON, anything else is TOML
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;

        let catalog = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content)?,
            _ => Self::from_toml_str(&content)?,
        };

        info!(
            "Loaded {} modules from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Find the module with the given id
    pub fn find(&self, id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// Resolve an optional route parameter
    pub fn resolve(&self, id: Option<&str>) -> Resolution<'_> {
        match id.and_then(|id| self.find(id)) {
            Some(module) => Resolution::Found(module),
            None => {
                debug!("Module lookup missed: {:?}", id);
                Resolution::NotFound {
                    requested: id.map(str::to_string),
                }
            }
        }
    }

    /// Find the module at an exact position
    pub fn by_number(&self, module_number: u32) -> Option<&Module> {
        self.modules
            .iter()
            .find(|m| m.module_number == module_number)
    }

    /// Module whose number is exactly one less
    pub fn previous(&self, module: &Module) -> Option<&Module> {
        module
            .module_number
            .checked_sub(1)
            .and_then(|n| self.by_number(n))
    }

    /// Module whose number is exactly one more
    pub fn next(&self, module: &Module) -> Option<&Module> {
        module
            .module_number
            .checked_add(1)
            .and_then(|n| self.by_number(n))
    }

    pub fn neighbours(&self, module: &Module) -> Neighbours<'_> {
        Neighbours {
            previous: self.previous(module),
            next: self.next(module),
        }
    }

    /// Modules matching a search query, in catalog order
    pub fn search(&self, query: &str) -> Vec<&Module> {
        self.modules
            .iter()
            .filter(|m| m.matches_query(query))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Module> {
        self.modules.iter()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
