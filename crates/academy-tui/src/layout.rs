//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the bordered header and footer bars
const BAR_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Breadcrumb bar
    pub header: Rect,

    /// Page content (module detail, home list or not-found notice)
    pub body: Rect,

    /// Navigation bar on module pages, key hints elsewhere
    pub footer: Rect,
}

/// Split the screen into header, body and footer
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(BAR_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(BAR_HEIGHT),
    ])
    .areas(area);

    ScreenAreas {
        header,
        body,
        footer,
    }
}
