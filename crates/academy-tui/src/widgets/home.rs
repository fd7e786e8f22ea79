//! Module list shown on the home route

use academy_app::{HomeEntry, HomePage};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use super::SearchInput;
use crate::theme::{icons::IconSet, styles};

pub const NO_MATCHES_LABEL: &str = "没有匹配的模块";
pub const DEEP_DIVE_MARKER: &str = "含深度解析";

/// Numbered module list with difficulty badges; the selected row is
/// highlighted and kept in view
pub struct HomeView<'a> {
    page: &'a HomePage<'a>,
    selected: usize,
    searching: bool,
    icons: IconSet,
}

impl<'a> HomeView<'a> {
    pub fn new(page: &'a HomePage<'a>, selected: usize, icons: IconSet) -> Self {
        Self {
            page,
            selected,
            searching: false,
            icons,
        }
    }

    /// Show the search prompt in input mode
    pub fn searching(mut self, searching: bool) -> Self {
        self.searching = searching;
        self
    }

    fn entry_line(&self, entry: &HomeEntry) -> Line<'static> {
        let module = entry.module;
        let mut spans = vec![
            Span::styled(
                format!("{:>2}. ", module.module_number),
                styles::text_muted(),
            ),
            Span::styled(module.title.clone(), styles::text_primary()),
            Span::raw("  "),
            Span::styled(
                format!(" {} ", entry.difficulty.label),
                styles::tone_badge(entry.difficulty.tone),
            ),
            Span::raw("  "),
            Span::styled(
                format!(
                    " {} {} ",
                    self.icons.category(entry.category.icon),
                    entry.category.label
                ),
                styles::tone_chip(entry.category.text_tone, entry.category.background_tone),
            ),
        ];
        if entry.has_deep_dive {
            spans.push(Span::styled(
                format!("  {} {DEEP_DIVE_MARKER}", self.icons.book()),
                styles::text_muted(),
            ));
        }
        Line::from(spans)
    }

    fn title(&self) -> Line<'static> {
        let count = if self.page.is_filtered() {
            format!(" 学习模块 {}/{} ", self.page.entries.len(), self.page.total)
        } else {
            format!(" 学习模块 {} ", self.page.total)
        };
        Line::from(Span::styled(count, styles::accent_bold()))
    }
}

impl Widget for HomeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(self.title());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let list_area = if self.searching || self.page.is_filtered() {
            let [prompt, list] =
                Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
            SearchInput::new(&self.page.query, self.searching, self.icons).render(prompt, buf);
            list
        } else {
            inner
        };

        if self.page.entries.is_empty() {
            Paragraph::new(Span::styled(NO_MATCHES_LABEL, styles::text_muted()))
                .render(list_area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .page
            .entries
            .iter()
            .map(|entry| ListItem::new(self.entry_line(entry)))
            .collect();

        let list = List::new(items)
            .highlight_style(styles::focused_selected())
            .highlight_symbol("▶ ");
        let mut list_state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(list, list_area, buf, &mut list_state);
    }
}
