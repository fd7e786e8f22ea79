//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppState, UiMode};

use super::{keys::handle_key, navigation, scroll, search, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::Navigate(route) => navigation::handle_navigate(state, route),
        Message::GoHome => navigation::handle_go_home(state),
        Message::PreviousModule => navigation::handle_previous_module(state),
        Message::NextModule => navigation::handle_next_module(state),

        Message::SelectPrevious => navigation::handle_select_previous(state),
        Message::SelectNext => navigation::handle_select_next(state),
        Message::SelectFirst => navigation::handle_select_first(state),
        Message::SelectLast => navigation::handle_select_last(state),
        Message::OpenSelected => navigation::handle_open_selected(state),

        // ─────────────────────────────────────────────────────────
        // Search Messages
        // ─────────────────────────────────────────────────────────
        Message::StartSearch => search::handle_start_search(state),
        Message::SearchInput { text } => search::handle_search_input(state, text),
        Message::SubmitSearch => search::handle_submit_search(state),
        Message::ClearSearch => search::handle_clear_search(state),

        // ─────────────────────────────────────────────────────────
        // Overlay Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleHelp => {
            state.ui_mode = match state.ui_mode {
                UiMode::Help => UiMode::Browse,
                _ => UiMode::Help,
            };
            UpdateResult::none()
        }

        Message::CloseHelp => {
            if state.ui_mode == UiMode::Help {
                state.ui_mode = UiMode::Browse;
            }
            UpdateResult::none()
        }
    }
}
