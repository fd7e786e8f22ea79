//! Module detail page
//!
//! Lays out a composed [`ModulePage`] as one long scrollable column:
//! a header with the difficulty badge and category chip, then the
//! introduction, the numbered learning topics, the optional deep dive,
//! recommended resources, and the suggestions checklist.


use academy_app::{ModulePage, PageViewState};
use academy_core::{Block as ContentBlock, DeepDive, RecommendedWebsite};
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

use crate::text::{display_width, pad_to, wrap};
use crate::theme::{icons::IconSet, styles};

pub const INTRODUCTION_HEADING: &str = "模块介绍";
pub const LEARNING_CONTENT_HEADING: &str = "学习内容";
pub const DEEP_DIVE_HEADING: &str = "深度解析";
pub const RESOURCES_HEADING: &str = "推荐资源";
pub const SUGGESTIONS_HEADING: &str = "学习建议";
pub const NO_RESOURCES: &str = "暂无推荐资源";
pub const SCROLL_TOP_LABEL: &str = "顶部";
pub const SCROLL_BOTTOM_LABEL: &str = "底部";

const COLUMN_SEPARATOR: &str = " │ ";

/// Scrollable module detail view
pub struct ModuleView<'a> {
    page: &'a ModulePage<'a>,
    icons: IconSet,
    show_deep_dives: bool,
    show_keywords: bool,
}

impl<'a> ModuleView<'a> {
    pub fn new(page: &'a ModulePage<'a>, icons: IconSet) -> Self {
        Self {
            page,
            icons,
            show_deep_dives: true,
            show_keywords: true,
        }
    }

    pub fn show_deep_dives(mut self, show: bool) -> Self {
        self.show_deep_dives = show;
        self
    }

    pub fn show_keywords(mut self, show: bool) -> Self {
        self.show_keywords = show;
        self
    }

    /// Every line of the page laid out for `width` columns, before scrolling
    pub fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let width = width.max(1);
        let mut out = Vec::new();

        self.push_header(&mut out, width);
        self.push_introduction(&mut out, width);
        self.push_learning_content(&mut out, width);
        if self.show_deep_dives {
            if let Some(deep_dive) = self.page.deep_dive {
                self.push_deep_dive(&mut out, deep_dive, width);
            }
        }
        self.push_resources(&mut out, width);
        self.push_suggestions(&mut out, width);

        out
    }

    fn push_header(&self, out: &mut Vec<Line<'static>>, width: usize) {
        let difficulty = &self.page.difficulty;
        let category = &self.page.category;
        let module = self.page.module;

        out.push(Line::from(vec![
            Span::styled(
                format!(" {} ", difficulty.label),
                styles::tone_badge(difficulty.tone),
            ),
            Span::raw("  "),
            Span::styled(
                format!(" {} {} ", self.icons.category(category.icon), category.label),
                styles::tone_chip(category.text_tone, category.background_tone),
            ),
            Span::styled(
                format!("  ·  模块 {}", module.module_number),
                styles::text_muted(),
            ),
        ]));
        out.push(Line::default());

        push_wrapped(out, &module.title, width, styles::title());
        push_wrapped(out, difficulty.description, width, styles::text_muted());

        let summary = module.learning_content.trim();
        if !summary.is_empty() {
            out.push(Line::default());
            push_wrapped(out, summary, width, styles::text_secondary());
        }

        if self.show_keywords && !module.search_keywords.is_empty() {
            let tags = module
                .search_keywords
                .iter()
                .map(|keyword| format!("#{keyword}"))
                .collect::<Vec<_>>()
                .join("  ");
            out.push(Line::default());
            push_wrapped(out, &tags, width, styles::accent());
        }
    }

    fn push_introduction(&self, out: &mut Vec<Line<'static>>, width: usize) {
        push_heading(out, self.icons.book(), INTRODUCTION_HEADING);
        push_wrapped(
            out,
            &self.page.content.introduction,
            width,
            styles::text_primary(),
        );
    }

    fn push_learning_content(&self, out: &mut Vec<Line<'static>>, width: usize) {
        push_heading(out, self.icons.bullet(), LEARNING_CONTENT_HEADING);
        for (index, topic) in self.page.content.learning_content.iter().enumerate() {
            push_prefixed(
                out,
                topic,
                width,
                &format!("{:>2}. ", index + 1),
                styles::accent(),
                styles::text_primary(),
            );
        }
    }

    fn push_deep_dive(&self, out: &mut Vec<Line<'static>>, deep_dive: &DeepDive, width: usize) {
        push_heading(out, self.icons.book(), DEEP_DIVE_HEADING);

        for (index, section) in deep_dive.sections.iter().enumerate() {
            if index > 0 {
                out.push(Line::default());
            }
            push_prefixed(
                out,
                section.title,
                width,
                "▍",
                styles::accent(),
                styles::accent_bold(),
            );

            for block in section.blocks {
                match block {
                    ContentBlock::Paragraph(text) => {
                        push_wrapped(out, text, width, styles::text_primary())
                    }
                    ContentBlock::Bullets(items) => {
                        let bullet = format!("  {} ", self.icons.bullet());
                        for item in *items {
                            push_prefixed(
                                out,
                                item,
                                width,
                                &bullet,
                                styles::accent(),
                                styles::text_primary(),
                            );
                        }
                    }
                    ContentBlock::Table { headers, rows } => {
                        push_table(out, headers, rows, width);
                    }
                    ContentBlock::Callout(text) => {
                        push_prefixed(
                            out,
                            text,
                            width,
                            "▌ ",
                            styles::callout(),
                            styles::callout(),
                        );
                    }
                }
            }
        }
    }

    fn push_resources(&self, out: &mut Vec<Line<'static>>, width: usize) {
        push_heading(out, self.icons.external_link(), RESOURCES_HEADING);

        let websites = &self.page.module.recommended_websites;
        if websites.is_empty() {
            out.push(Line::from(Span::styled(NO_RESOURCES, styles::text_muted())));
            return;
        }

        for (index, site) in websites.iter().enumerate() {
            if index > 0 {
                out.push(Line::default());
            }
            self.push_resource(out, site, width);
        }
    }

    fn push_resource(&self, out: &mut Vec<Line<'static>>, site: &RecommendedWebsite, width: usize) {
        let bullet = format!("{} ", self.icons.bullet());
        let host = site.host().map(|host| format!("  ({host})"));
        let one_line =
            display_width(&bullet) + display_width(&site.name) + host.as_deref().map_or(0, display_width);

        match host {
            Some(host) if one_line <= width => out.push(Line::from(vec![
                Span::styled(bullet, styles::accent()),
                Span::styled(site.name.clone(), styles::title()),
                Span::styled(host, styles::text_muted()),
            ])),
            _ => push_prefixed(
                out,
                &site.name,
                width,
                &bullet,
                styles::accent(),
                styles::title(),
            ),
        }

        if !site.description.trim().is_empty() {
            push_prefixed(
                out,
                &site.description,
                width,
                "  ",
                Style::default(),
                styles::text_secondary(),
            );
        }
        let link = format!("  {} ", self.icons.external_link());
        push_prefixed(out, &site.url, width, &link, styles::link(), styles::link());
    }

    fn push_suggestions(&self, out: &mut Vec<Line<'static>>, width: usize) {
        push_heading(out, self.icons.check(), SUGGESTIONS_HEADING);
        let check = format!("{} ", self.icons.check());
        for suggestion in &self.page.content.learning_suggestions {
            push_prefixed(
                out,
                suggestion,
                width,
                &check,
                styles::check(),
                styles::text_primary(),
            );
        }
    }
}

fn push_heading(out: &mut Vec<Line<'static>>, icon: &str, heading: &'static str) {
    out.push(Line::default());
    out.push(Line::from(vec![
        Span::styled(format!("{icon} "), styles::accent()),
        Span::styled(heading, styles::section_heading()),
    ]));
}

fn push_wrapped(out: &mut Vec<Line<'static>>, text: &str, width: usize, style: Style) {
    out.extend(
        wrap(text, width)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, style))),
    );
}

/// Wrap `text` after a prefix; continuation lines are indented to match
fn push_prefixed(
    out: &mut Vec<Line<'static>>,
    text: &str,
    width: usize,
    prefix: &str,
    prefix_style: Style,
    body_style: Style,
) {
    let indent = display_width(prefix);
    let body_width = width.saturating_sub(indent).max(1);

    for (index, line) in wrap(text, body_width).into_iter().enumerate() {
        let lead = if index == 0 {
            Span::styled(prefix.to_string(), prefix_style)
        } else {
            Span::raw(" ".repeat(indent))
        };
        out.push(Line::from(vec![lead, Span::styled(line, body_style)]));
    }
}

/// Aligned columns when the table fits, one "header: value" list per row
/// when it does not
fn push_table(out: &mut Vec<Line<'static>>, headers: &[&str], rows: &[&[&str]], width: usize) {
    let mut column_widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            match column_widths.get_mut(index) {
                Some(current) => *current = (*current).max(display_width(cell)),
                None => column_widths.push(display_width(cell)),
            }
        }
    }

    let separators = column_widths.len().saturating_sub(1) * display_width(COLUMN_SEPARATOR);
    let table_width = column_widths.iter().sum::<usize>() + separators;

    if table_width <= width {
        let render_row = |cells: &[&str]| {
            cells
                .iter()
                .zip(&column_widths)
                .map(|(cell, w)| pad_to(cell, *w))
                .collect::<Vec<_>>()
                .join(COLUMN_SEPARATOR)
                .trim_end()
                .to_string()
        };

        out.push(Line::from(Span::styled(
            render_row(headers),
            styles::accent_bold(),
        )));
        out.push(Line::from(Span::styled(
            "─".repeat(table_width),
            styles::text_muted(),
        )));
        for &row in rows {
            out.push(Line::from(Span::styled(
                render_row(row),
                styles::text_primary(),
            )));
        }
        return;
    }

    for row in rows {
        let pairs = row
            .iter()
            .enumerate()
            .map(|(index, cell)| match headers.get(index) {
                Some(header) => format!("{header}：{cell}"),
                None => cell.to_string(),
            })
            .collect::<Vec<_>>()
            .join("；");
        push_prefixed(
            out,
            &pairs,
            width,
            "  • ",
            styles::accent(),
            styles::text_primary(),
        );
    }
}

impl StatefulWidget for ModuleView<'_> {
    type State = PageViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = styles::glass_block(true)
            .title(Line::from(Span::styled(
                format!(" 模块 {} ", self.page.module.module_number),
                styles::accent_bold(),
            )))
            .title_bottom(Line::from(vec![
                Span::styled(" j/k ", styles::keybinding()),
                Span::styled("滚动 ", styles::text_muted()),
                Span::styled(" ←/→ ", styles::keybinding()),
                Span::styled("切换模块 ", styles::text_muted()),
            ]));
        let inner = block.inner(area);
        block.render(area, buf);

        let content = inner.inner(Margin::new(1, 0));
        if content.width == 0 || content.height == 0 {
            return;
        }

        let lines = self.lines(content.width as usize);
        let total_lines = lines.len();
        let visible_lines = content.height as usize;
        state.update_content_size(total_lines, visible_lines);

        let shown: Vec<Line> = lines
            .into_iter()
            .skip(state.offset)
            .take(visible_lines)
            .collect();
        Paragraph::new(shown).render(content, buf);

        if total_lines > visible_lines {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"))
                .track_symbol(Some("│"))
                .thumb_symbol("█");
            let mut scrollbar_state =
                ScrollbarState::new(total_lines.saturating_sub(visible_lines))
                    .position(state.offset);
            scrollbar.render(area, buf, &mut scrollbar_state);

            let position = if state.is_at_top() {
                SCROLL_TOP_LABEL.to_string()
            } else if state.is_at_bottom() {
                SCROLL_BOTTOM_LABEL.to_string()
            } else {
                format!("{}/{}", state.offset + 1, total_lines)
            };
            let border = Rect {
                x: area.x + 1,
                y: area.bottom() - 1,
                width: area.width.saturating_sub(2),
                height: 1,
            };
            Line::from(Span::styled(format!(" {position} "), styles::text_muted()))
                .right_aligned()
                .render(border, buf);
        }
    }
}
