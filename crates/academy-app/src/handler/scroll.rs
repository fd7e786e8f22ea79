//! Scroll message handlers for module pages

use crate::state::AppState;

use super::UpdateResult;

pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    let step = state.scroll_step();
    state.page_view.scroll_up(step);
    UpdateResult::none()
}

pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    let step = state.scroll_step();
    state.page_view.scroll_down(step);
    UpdateResult::none()
}

pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.page_view.scroll_to_top();
    UpdateResult::none()
}

pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    state.page_view.scroll_to_bottom();
    UpdateResult::none()
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.page_view.page_up();
    UpdateResult::none()
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.page_view.page_down();
    UpdateResult::none()
}
