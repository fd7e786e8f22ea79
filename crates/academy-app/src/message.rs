//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::route::Route;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    PageUp,
    PageDown,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Change the current route
    Navigate(Route),
    /// Navigate to `/`
    GoHome,
    /// Open the module whose number is one less than the current one
    PreviousModule,
    /// Open the module whose number is one more than the current one
    NextModule,

    // ─────────────────────────────────────────────────────────
    // Home List Messages
    // ─────────────────────────────────────────────────────────
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// Open the module highlighted in the home list
    OpenSelected,

    // ─────────────────────────────────────────────────────────
    // Search Messages
    // ─────────────────────────────────────────────────────────
    /// Enter search input mode
    StartSearch,
    /// Replace the search query
    SearchInput { text: String },
    /// Leave input mode, keeping the query
    SubmitSearch,
    /// Leave input mode and drop the query
    ClearSearch,

    // ─────────────────────────────────────────────────────────
    // Overlay Messages
    // ─────────────────────────────────────────────────────────
    ToggleHelp,
    CloseHelp,
}
