//! Home list search handlers

use crate::route::Route;
use crate::state::{AppState, UiMode};

use super::UpdateResult;

/// Enter search input mode (home list only)
pub fn handle_start_search(state: &mut AppState) -> UpdateResult {
    if state.route == Route::Home {
        state.ui_mode = UiMode::SearchInput;
    }
    UpdateResult::none()
}

/// Replace the query; the selection jumps back to the first match
pub fn handle_search_input(state: &mut AppState, text: String) -> UpdateResult {
    state.home.query = text;
    state.home.selected = 0;
    UpdateResult::none()
}

/// Leave input mode and keep filtering by the query
pub fn handle_submit_search(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Browse;
    state.clamp_selection();
    UpdateResult::none()
}

/// Leave input mode and show the full list again
pub fn handle_clear_search(state: &mut AppState) -> UpdateResult {
    state.home.query.clear();
    state.home.selected = 0;
    state.ui_mode = UiMode::Browse;
    UpdateResult::none()
}
