//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::route::Route;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode and route
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Help => handle_key_help(key),
        UiMode::SearchInput => handle_key_search_input(state, key),
        UiMode::Browse => match &state.route {
            Route::Home => handle_key_home(state, key),
            Route::Module(_) if state.current_module().is_some() => handle_key_module(key),
            Route::Module(_) => handle_key_not_found(key),
        },
    }
}

/// Handle key events while the help overlay is open
fn handle_key_help(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('?' | 'q') | InputKey::Enter => Some(Message::CloseHelp),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in search input mode
fn handle_key_search_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Drop the query and leave input mode
        InputKey::Esc => Some(Message::ClearSearch),

        // Keep the query, leave input mode
        InputKey::Enter => Some(Message::SubmitSearch),

        InputKey::Backspace => {
            let mut query = state.home.query.clone();
            query.pop();
            Some(Message::SearchInput { text: query })
        }

        InputKey::CharCtrl('u') => Some(Message::SearchInput {
            text: String::new(),
        }),

        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Up => Some(Message::SelectPrevious),
        InputKey::Down => Some(Message::SelectNext),

        InputKey::Char(c) => {
            let mut query = state.home.query.clone();
            query.push(c);
            Some(Message::SearchInput { text: query })
        }

        _ => None,
    }
}

/// Keys shared by every browse view
fn handle_key_global(key: &InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('?') => Some(Message::ToggleHelp),
        _ => None,
    }
}

/// Handle key events on the module list
fn handle_key_home(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_key_global(&key) {
        return Some(msg);
    }

    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Home | InputKey::Char('g') => Some(Message::SelectFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::SelectLast),
        InputKey::Enter | InputKey::Right | InputKey::Char('l') => Some(Message::OpenSelected),
        InputKey::Char('/') => Some(Message::StartSearch),
        InputKey::Esc if !state.home.query.is_empty() => Some(Message::ClearSearch),
        _ => None,
    }
}

/// Handle key events on a module detail page
fn handle_key_module(key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_key_global(&key) {
        return Some(msg);
    }

    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp | InputKey::CharCtrl('b') => Some(Message::PageUp),
        InputKey::PageDown | InputKey::CharCtrl('f') | InputKey::Char(' ') => {
            Some(Message::PageDown)
        }
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),
        InputKey::Left | InputKey::Char('p') => Some(Message::PreviousModule),
        InputKey::Right | InputKey::Char('n') => Some(Message::NextModule),
        InputKey::Esc | InputKey::Char('h') => Some(Message::GoHome),
        _ => None,
    }
}

/// Handle key events on the not-found view: the only action is going home
fn handle_key_not_found(key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_key_global(&key) {
        return Some(msg);
    }

    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char('h') => Some(Message::GoHome),
        _ => None,
    }
}
