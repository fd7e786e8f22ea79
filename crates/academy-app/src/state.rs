//! Application state (Model in TEA pattern)

use academy_core::{Catalog, Module};

use crate::config::Settings;
use crate::page::{compose_page, Page};
use crate::page_view_state::PageViewState;
use crate::route::Route;

/// Current UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Reading a page
    #[default]
    Browse,
    /// Typing a search query on the home list
    SearchInput,
    /// Keybinding overlay
    Help,
}

/// Home list selection and filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeState {
    /// Index into the filtered list
    pub selected: usize,
    pub query: String,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub catalog: Catalog,
    pub settings: Settings,
    pub route: Route,
    pub ui_mode: UiMode,
    pub page_view: PageViewState,
    pub home: HomeState,
    quitting: bool,
}

impl AppState {
    pub fn new(catalog: Catalog, settings: Settings) -> Self {
        Self {
            catalog,
            settings,
            route: Route::Home,
            ui_mode: UiMode::Browse,
            page_view: PageViewState::new(),
            home: HomeState::default(),
            quitting: false,
        }
    }

    pub fn with_route(mut self, route: Route) -> Self {
        self.navigate(route);
        self
    }

    /// Change route. The page scroll resets to the top whenever the route changes.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }

        tracing::info!("Navigate {} -> {}", self.route, route);

        if route.is_home() {
            self.select_module_in_home(self.route.module_id().map(str::to_string));
        }

        self.route = route;
        self.page_view.reset();
        self.ui_mode = UiMode::Browse;
    }

    /// Keep the module we came from highlighted when returning home
    fn select_module_in_home(&mut self, id: Option<String>) {
        let Some(id) = id else { return };
        let index = self.home_matches().iter().position(|m| m.id == id);
        if let Some(index) = index {
            self.home.selected = index;
        }
    }

    /// Module for the current route, if it resolves
    pub fn current_module(&self) -> Option<&Module> {
        self.route.module_id().and_then(|id| self.catalog.find(id))
    }

    /// Compose the page for the current route
    pub fn page(&self) -> Page<'_> {
        compose_page(&self.catalog, &self.route, &self.home.query)
    }

    /// Modules visible in the home list
    pub fn home_matches(&self) -> Vec<&Module> {
        self.catalog.search(&self.home.query)
    }

    /// Module highlighted in the home list
    pub fn selected_module(&self) -> Option<&Module> {
        self.home_matches().get(self.home.selected).copied()
    }

    /// Keep the selection inside the filtered list
    pub fn clamp_selection(&mut self) {
        let count = self.home_matches().len();
        self.home.selected = self.home.selected.min(count.saturating_sub(1));
    }

    pub fn scroll_step(&self) -> usize {
        self.settings.ui.effective_scroll_step()
    }

    pub fn quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}
