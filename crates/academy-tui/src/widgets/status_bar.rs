//! Footer bar with key hints

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::text::display_width;
use crate::theme::styles;

/// A key and what it does
pub type KeyHint = (&'static str, &'static str);

pub const HOME_HINTS: &[KeyHint] = &[
    ("↑↓", "选择"),
    ("Enter", "打开"),
    ("/", "搜索"),
    ("?", "帮助"),
    ("q", "退出"),
];

pub const SEARCH_HINTS: &[KeyHint] = &[
    ("↑↓", "选择"),
    ("Enter", "确认"),
    ("Esc", "取消"),
    ("Ctrl+U", "清空"),
];

pub const NOT_FOUND_HINTS: &[KeyHint] = &[("Enter", "返回首页"), ("q", "退出")];

/// Key hints on the left, an optional note on the right
pub struct StatusBar<'a> {
    hints: &'a [KeyHint],
    info: Option<String>,
}

impl<'a> StatusBar<'a> {
    pub fn new(hints: &'a [KeyHint]) -> Self {
        Self { hints, info: None }
    }

    pub fn info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let info_width = self
            .info
            .as_deref()
            .map(|info| display_width(info) as u16 + 1)
            .unwrap_or(0);
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(info_width)]).areas(inner);

        let spans: Vec<Span> = self
            .hints
            .iter()
            .flat_map(|(key, action)| {
                [
                    Span::styled(format!(" {key} "), styles::keybinding()),
                    Span::styled(format!("{action} "), styles::text_muted()),
                ]
            })
            .collect();
        Paragraph::new(Line::from(spans)).render(left, buf);

        if let Some(info) = self.info {
            Paragraph::new(Span::styled(info, styles::text_secondary()))
                .alignment(Alignment::Right)
                .render(right, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_renders_hints() {
        let mut term = TestTerminal::with_size(80, 3);
        let area = term.area();
        term.render_widget(StatusBar::new(HOME_HINTS), area);

        assert!(term.line_contains(1, "Enter"));
        assert!(term.line_contains(1, "搜索"));
        assert!(term.line_contains(1, "退出"));
    }

    #[test]
    fn test_renders_info_on_the_right() {
        let mut term = TestTerminal::with_size(80, 3);
        let area = term.area();
        term.render_widget(StatusBar::new(NOT_FOUND_HINTS).info("12 个模块"), area);

        let line = term.content().lines().nth(1).unwrap_or_default().to_string();
        assert!(line.trim_end_matches(['│', ' ']).ends_with("12 个模块"));
    }
}
