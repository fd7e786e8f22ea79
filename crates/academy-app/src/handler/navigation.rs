//! Navigation handlers
//!
//! Route changes, sequential previous/next navigation and home list selection.

use tracing::debug;

use crate::message::Message;
use crate::route::Route;
use crate::state::AppState;

use super::UpdateResult;

pub fn handle_navigate(state: &mut AppState, route: Route) -> UpdateResult {
    state.navigate(route);
    UpdateResult::none()
}

pub fn handle_go_home(state: &mut AppState) -> UpdateResult {
    state.navigate(Route::Home);
    UpdateResult::none()
}

/// Navigate to the module numbered one less, if there is one
pub fn handle_previous_module(state: &mut AppState) -> UpdateResult {
    let target = state
        .current_module()
        .and_then(|m| state.catalog.previous(m))
        .map(|m| Route::module(&m.id));

    match target {
        Some(route) => UpdateResult::message(Message::Navigate(route)),
        None => {
            debug!("No previous module from {}", state.route);
            UpdateResult::none()
        }
    }
}

/// Navigate to the module numbered one more, if there is one
pub fn handle_next_module(state: &mut AppState) -> UpdateResult {
    let target = state
        .current_module()
        .and_then(|m| state.catalog.next(m))
        .map(|m| Route::module(&m.id));

    match target {
        Some(route) => UpdateResult::message(Message::Navigate(route)),
        None => {
            debug!("No next module from {}", state.route);
            UpdateResult::none()
        }
    }
}

pub fn handle_select_previous(state: &mut AppState) -> UpdateResult {
    state.home.selected = state.home.selected.saturating_sub(1);
    UpdateResult::none()
}

pub fn handle_select_next(state: &mut AppState) -> UpdateResult {
    state.home.selected = state.home.selected.saturating_add(1);
    state.clamp_selection();
    UpdateResult::none()
}

pub fn handle_select_first(state: &mut AppState) -> UpdateResult {
    state.home.selected = 0;
    UpdateResult::none()
}

pub fn handle_select_last(state: &mut AppState) -> UpdateResult {
    state.home.selected = usize::MAX;
    state.clamp_selection();
    UpdateResult::none()
}

/// Open the module highlighted in the home list
pub fn handle_open_selected(state: &mut AppState) -> UpdateResult {
    match state.selected_module() {
        Some(module) => UpdateResult::message(Message::Navigate(Route::module(&module.id))),
        None => UpdateResult::none(),
    }
}
