//! Breadcrumb header bar

use academy_app::page::NOT_FOUND_TITLE;
use academy_app::Route;
use academy_core::Module;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::text::display_width;
use crate::theme::{icons::IconSet, styles};

const APP_TITLE: &str = "Crypto Academy";

/// Header showing where the user is: app name, module number and title,
/// with the route path on the right
pub struct AppHeader<'a> {
    route: &'a Route,
    module: Option<&'a Module>,
    icons: IconSet,
}

impl<'a> AppHeader<'a> {
    pub fn new(route: &'a Route, module: Option<&'a Module>, icons: IconSet) -> Self {
        Self {
            route,
            module,
            icons,
        }
    }

    fn breadcrumb(&self) -> Line<'static> {
        let separator = Span::styled(" › ", styles::text_muted());
        let mut spans = vec![
            Span::styled(format!("{} ", self.icons.book()), styles::accent()),
            Span::styled(APP_TITLE, styles::accent_bold()),
            separator.clone(),
        ];

        match (self.route, self.module) {
            (Route::Home, _) => spans.push(Span::styled("全部模块", styles::text_primary())),
            (Route::Module(_), Some(module)) => {
                spans.push(Span::styled(
                    format!("模块 {}", module.module_number),
                    styles::text_secondary(),
                ));
                spans.push(separator);
                spans.push(Span::styled(module.title.clone(), styles::title()));
            }
            (Route::Module(_), None) => {
                spans.push(Span::styled(NOT_FOUND_TITLE, styles::text_secondary()))
            }
        }

        Line::from(spans)
    }
}

impl Widget for AppHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let path = self.route.path();
        let path_width = (display_width(&path) as u16).saturating_add(1);
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(path_width)]).areas(inner);

        Paragraph::new(self.breadcrumb()).render(left, buf);
        Paragraph::new(Span::styled(path, styles::text_muted()))
            .alignment(Alignment::Right)
            .render(right, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use academy_app::config::IconMode;
    use academy_core::Catalog;

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    #[test]
    fn test_home_breadcrumb() {
        let mut term = TestTerminal::new();
        let route = Route::Home;
        term.render_widget(AppHeader::new(&route, None, icons()), Rect::new(0, 0, 80, 3));

        assert!(term.line_contains(1, APP_TITLE));
        assert!(term.line_contains(1, "全部模块"));
        assert!(term.line_contains(1, "/"));
    }

    #[test]
    fn test_module_breadcrumb_shows_number_and_title() {
        let catalog = Catalog::embedded().unwrap();
        let module = catalog.find("module-3").unwrap();
        let route = Route::module("module-3");

        let mut term = TestTerminal::new();
        term.render_widget(
            AppHeader::new(&route, Some(module), icons()),
            Rect::new(0, 0, 80, 3),
        );

        assert!(term.line_contains(1, "模块 3"));
        assert!(term.buffer_contains(&module.title));
        assert!(term.line_contains(1, "/module/module-3"));
    }

    #[test]
    fn test_unknown_module_breadcrumb() {
        let route = Route::module("module-404");
        let mut term = TestTerminal::new();
        term.render_widget(AppHeader::new(&route, None, icons()), Rect::new(0, 0, 80, 3));

        assert!(term.buffer_contains(NOT_FOUND_TITLE));
    }
}
