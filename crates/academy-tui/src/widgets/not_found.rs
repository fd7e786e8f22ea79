//! Notice for a module id that is not in the catalog

use academy_app::NotFoundPage;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::modal_overlay::centered_rect;
use crate::theme::{icons::IconSet, styles};

pub struct NotFoundView<'a> {
    page: &'a NotFoundPage,
    icons: IconSet,
}

impl<'a> NotFoundView<'a> {
    pub fn new(page: &'a NotFoundPage, icons: IconSet) -> Self {
        Self { page, icons }
    }
}

impl Widget for NotFoundView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(Span::styled(self.page.title, styles::title())),
            Line::default(),
            Line::from(Span::styled(self.page.message, styles::text_secondary())),
        ];
        if let Some(requested) = &self.page.requested {
            lines.push(Line::from(Span::styled(
                format!("（{requested}）"),
                styles::text_muted(),
            )));
        }
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("[Enter] ", styles::keybinding()),
            Span::styled(
                format!("{} {}", self.icons.home(), self.page.action_label),
                styles::accent_bold(),
            ),
        ]));

        let height = lines.len() as u16;
        let card = centered_rect(inner.width, height, inner);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(card, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use academy_app::config::IconMode;
    use academy_app::page::{BACK_HOME_LABEL, NOT_FOUND_TITLE};

    #[test]
    fn test_renders_title_and_home_action() {
        let page = NotFoundPage::new(Some("module-404"));
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(NotFoundView::new(&page, IconSet::new(IconMode::Unicode)), area);

        assert!(term.buffer_contains(NOT_FOUND_TITLE));
        assert!(term.buffer_contains(BACK_HOME_LABEL));
        assert!(term.buffer_contains("module-404"));
        assert!(term.buffer_contains("[Enter]"));
    }

    #[test]
    fn test_missing_id_omits_requested_line() {
        let page = NotFoundPage::new(None);
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(NotFoundView::new(&page, IconSet::new(IconMode::Unicode)), area);

        assert!(term.buffer_contains(NOT_FOUND_TITLE));
        assert!(!term.buffer_contains("（"));
    }
}
