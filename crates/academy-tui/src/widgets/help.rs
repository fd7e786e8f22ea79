//! Keyboard help overlay

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use super::modal_overlay::{centered_rect, dim_background};
use crate::text::pad_to;
use crate::theme::styles;

pub const HELP_TITLE: &str = " 快捷键 ";

const KEY_COLUMN: usize = 14;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "模块页面",
        &[
            ("↑/k ↓/j", "滚动一行"),
            ("PgUp PgDn", "翻页"),
            ("g / G", "跳到顶部 / 底部"),
            ("←/p →/n", "上一个 / 下一个模块"),
            ("Esc / h", "返回首页"),
        ],
    ),
    (
        "首页",
        &[
            ("↑/k ↓/j", "选择模块"),
            ("Enter", "打开模块"),
            ("/", "搜索"),
        ],
    ),
    ("通用", &[("?", "显示 / 关闭帮助"), ("q / Ctrl+C", "退出")]),
];

/// Centered list of key bindings over a dimmed page
pub struct HelpOverlay;

impl HelpOverlay {
    fn lines() -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (index, (section, bindings)) in SECTIONS.iter().enumerate() {
            if index > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(*section, styles::section_heading())));
            for (key, action) in bindings.iter() {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {}", pad_to(key, KEY_COLUMN)), styles::keybinding()),
                    Span::styled(*action, styles::text_primary()),
                ]));
            }
        }
        lines
    }
}

impl Widget for HelpOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let lines = Self::lines();
        let height = lines.len() as u16 + 2;
        let modal = centered_rect(44, height, area);

        Clear.render(modal, buf);
        let block = styles::modal_block(HELP_TITLE);
        let inner = block.inner(modal);
        block.render(modal, buf);
        Paragraph::new(lines).render(inner, buf);
    }
}
