//! Page composition.
//!
//! Turns a route into everything a renderer needs: the resolved module, its
//! derived metadata, the selected content bundle, the optional deep dive and
//! the navigation targets. Renderers (TUI, headless JSON) only lay this out.

use academy_core::{
    category_info, deep_dive, difficulty_info, select_content, Catalog, CategoryInfo, DeepDive,
    DifficultyInfo, Module, ModuleDetailBundle, Resolution,
};
use serde::Serialize;

use crate::route::Route;

/// Fully composed view for a route
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Page<'a> {
    Home(HomePage<'a>),
    Module(Box<ModulePage<'a>>),
    NotFound(NotFoundPage),
}

/// Compose the page for a route. `query` filters the home list.
pub fn compose_page<'a>(catalog: &'a Catalog, route: &Route, query: &str) -> Page<'a> {
    match route {
        Route::Home => Page::Home(HomePage::new(catalog, query)),
        Route::Module(id) => match catalog.resolve(Some(id.as_str())) {
            Resolution::Found(module) => {
                Page::Module(Box::new(ModulePage::compose(catalog, module)))
            }
            Resolution::NotFound { requested } => {
                tracing::info!("Module not found: {:?}", requested);
                Page::NotFound(NotFoundPage::new(requested.as_deref()))
            }
        },
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Module page
// ─────────────────────────────────────────────────────────────────────────────

/// Previous/next navigation control target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavTarget {
    pub id: String,
    pub title: String,
    pub module_number: u32,
    pub route: Route,
}

impl NavTarget {
    fn for_module(module: &Module) -> Self {
        Self {
            id: module.id.clone(),
            title: module.title.clone(),
            module_number: module.module_number,
            route: Route::module(&module.id),
        }
    }
}

/// Composed module detail page
#[derive(Debug, Clone, Serialize)]
pub struct ModulePage<'a> {
    pub module: &'a Module,
    pub difficulty: DifficultyInfo,
    pub category: CategoryInfo,
    pub content: ModuleDetailBundle,
    /// Extended sections, rendered between topics and resources
    pub deep_dive: Option<&'static DeepDive>,
    /// Absent at the first module
    pub previous: Option<NavTarget>,
    /// Absent at the last module
    pub next: Option<NavTarget>,
    pub home: Route,
}

impl<'a> ModulePage<'a> {
    pub fn compose(catalog: &'a Catalog, module: &'a Module) -> Self {
        let neighbours = catalog.neighbours(module);
        Self {
            module,
            difficulty: difficulty_info(&module.difficulty),
            category: category_info(&module.category),
            content: select_content(module),
            deep_dive: deep_dive(&module.id),
            previous: neighbours.previous.map(NavTarget::for_module),
            next: neighbours.next.map(NavTarget::for_module),
            home: Route::Home,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Not found page
// ─────────────────────────────────────────────────────────────────────────────

pub const NOT_FOUND_TITLE: &str = "模块未找到";
pub const NOT_FOUND_MESSAGE: &str = "抱歉，您访问的学习模块不存在或已被移除。";
pub const BACK_HOME_LABEL: &str = "返回首页";

/// View shown when a route parameter matches no module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundPage {
    pub requested: Option<String>,
    pub title: &'static str,
    pub message: &'static str,
    pub action_label: &'static str,
    /// The single recovery action
    pub action: Route,
}

impl NotFoundPage {
    pub fn new(requested: Option<&str>) -> Self {
        Self {
            requested: requested.map(str::to_string),
            title: NOT_FOUND_TITLE,
            message: NOT_FOUND_MESSAGE,
            action_label: BACK_HOME_LABEL,
            action: Route::Home,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Home page
// ─────────────────────────────────────────────────────────────────────────────

/// One row of the module list
#[derive(Debug, Clone, Serialize)]
pub struct HomeEntry<'a> {
    pub module: &'a Module,
    pub difficulty: DifficultyInfo,
    pub category: CategoryInfo,
    pub has_deep_dive: bool,
}

/// Module list, filtered by a search query
#[derive(Debug, Clone, Serialize)]
pub struct HomePage<'a> {
    pub query: String,
    pub entries: Vec<HomeEntry<'a>>,
    /// Size of the unfiltered catalog
    pub total: usize,
}

impl<'a> HomePage<'a> {
    pub fn new(catalog: &'a Catalog, query: &str) -> Self {
        let entries = catalog
            .search(query)
            .into_iter()
            .map(|module| HomeEntry {
                module,
                difficulty: difficulty_info(&module.difficulty),
                category: category_info(&module.category),
                has_deep_dive: deep_dive(&module.id).is_some(),
            })
            .collect();

        Self {
            query: query.to_string(),
            entries,
            total: catalog.len(),
        }
    }

    pub fn is_filtered(&self) -> bool {
        !self.query.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_core::{CategoryIcon, Tone};

    fn catalog() -> Catalog {
        Catalog::embedded().unwrap()
    }

    fn module_page<'a>(page: &'a Page<'a>) -> &'a ModulePage<'a> {
        match page {
            Page::Module(page) => &**page,
            other => panic!("expected module page, got {other:?}"),
        }
    }

    #[test]
    fn test_compose_module_1() {
        let catalog = catalog();
        let page = compose_page(&catalog, &Route::module("module-1"), "");
        let page = module_page(&page);

        assert_eq!(page.module.title, "Layer 1（L1）区块链");
        assert!(page.content.introduction.starts_with("Layer 1 (L1) 区块链是"));
        assert_eq!(page.difficulty.label, "初级");
        assert!(page.deep_dive.is_some());
        assert!(page.previous.is_none());
        assert_eq!(page.next.as_ref().unwrap().id, "module-2");
        assert_eq!(page.home, Route::Home);
    }

    #[test]
    fn test_compose_last_module_has_no_next() {
        let catalog = catalog();
        let last = catalog.iter().last().unwrap();
        let page = compose_page(&catalog, &Route::module(&last.id), "");
        let page = module_page(&page);

        assert!(page.next.is_none());
        assert_eq!(
            page.previous.as_ref().unwrap().module_number,
            last.module_number - 1
        );
    }

    #[test]
    fn test_compose_unknown_module_is_not_found() {
        let catalog = catalog();
        let page = compose_page(&catalog, &Route::module("module-999"), "");
        match page {
            Page::NotFound(not_found) => {
                assert_eq!(not_found.requested.as_deref(), Some("module-999"));
                assert_eq!(not_found.action, Route::Home);
                assert_eq!(not_found.action.path(), "/");
            }
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_category_falls_back_on_known_id() {
        let mut modules: Vec<Module> = catalog().iter().cloned().collect();
        modules[0].category = "foo".to_string();
        let catalog = Catalog::new(modules).unwrap();

        let page = compose_page(&catalog, &Route::module("module-1"), "");
        let page = module_page(&page);
        assert_eq!(page.category.icon, CategoryIcon::QuestionMark);
        assert_eq!(page.category.text_tone, Tone::Neutral);
        assert!(page.content.introduction.starts_with("Layer 1 (L1) 区块链是"));
    }

    #[test]
    fn test_fallback_module_uses_template() {
        let catalog = catalog();
        let page = compose_page(&catalog, &Route::module("module-11"), "");
        let page = module_page(&page);
        assert!(page.content.introduction.contains(&page.module.title));
        assert!(page.deep_dive.is_none());
    }

    #[test]
    fn test_home_page_lists_all_modules_in_order() {
        let catalog = catalog();
        let page = compose_page(&catalog, &Route::Home, "");
        match page {
            Page::Home(home) => {
                assert_eq!(home.entries.len(), catalog.len());
                assert!(!home.is_filtered());
                let numbers: Vec<u32> =
                    home.entries.iter().map(|e| e.module.module_number).collect();
                let mut sorted = numbers.clone();
                sorted.sort_unstable();
                assert_eq!(numbers, sorted);
            }
            other => panic!("expected home, got {other:?}"),
        }
    }

    #[test]
    fn test_home_page_applies_query() {
        let catalog = catalog();
        match compose_page(&catalog, &Route::Home, "dao") {
            Page::Home(home) => {
                assert!(home.is_filtered());
                assert_eq!(home.total, catalog.len());
                assert!(home.entries.iter().any(|e| e.module.id == "module-9"));
                assert!(home.entries.len() < catalog.len());
            }
            other => panic!("expected home, got {other:?}"),
        }
    }

    #[test]
    fn test_query_does_not_affect_module_pages() {
        let catalog = catalog();
        let page = compose_page(&catalog, &Route::module("module-1"), "zzzz-nothing");
        assert!(matches!(page, Page::Module(_)));
    }

    #[test]
    fn test_home_page_filters_by_query() {
        let catalog = catalog();
        let home = HomePage::new(&catalog, "NFT");
        assert!(home.is_filtered());
        assert!(home.entries.iter().any(|e| e.module.id == "module-7"));
        assert!(home.entries.len() < home.total);
    }

    #[test]
    fn test_page_serializes_with_view_tag() {
        let catalog = catalog();
        let page = compose_page(&catalog, &Route::module("module-999"), "");
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["view"], "not_found");
        assert_eq!(json["action"], "/");
    }
}
