//! Search prompt shown above the home list

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, styles};

/// Single-line search prompt: `/query█` while typing, `/query` with a
/// clear hint once submitted
pub struct SearchInput<'a> {
    query: &'a str,
    active: bool,
    icons: IconSet,
}

impl<'a> SearchInput<'a> {
    pub fn new(query: &'a str, active: bool, icons: IconSet) -> Self {
        Self {
            query,
            active,
            icons,
        }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(
                format!("{} ", self.icons.search()),
                styles::keybinding().add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.query.to_string(), styles::text_primary()),
        ];

        if self.active {
            spans.push(Span::styled("█", styles::accent()));
            spans.push(Span::styled(
                "  Enter 确认  Esc 取消",
                styles::text_muted(),
            ));
        } else {
            spans.push(Span::styled("  Esc 清除筛选", styles::text_muted()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
