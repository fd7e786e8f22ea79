//! Main render/view function (View in TEA pattern)


use academy_app::state::{AppState, UiMode};
use academy_app::{compose_page, Page};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::{icons::IconSet, palette};
use crate::widgets;

/// Render the complete UI
///
/// Only the page view state is written: the module page reports its
/// measured size so scrolling can be clamped.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    // Borrow fields, not `state`: the module view takes `page_view` mutably
    let page = compose_page(&state.catalog, &state.route, &state.home.query);

    let module = match &page {
        Page::Module(module_page) => Some(module_page.module),
        _ => None,
    };
    frame.render_widget(
        widgets::AppHeader::new(&state.route, module, icons),
        areas.header,
    );

    match &page {
        Page::Home(home) => {
            let searching = state.ui_mode == UiMode::SearchInput;
            frame.render_widget(
                widgets::HomeView::new(home, state.home.selected, icons).searching(searching),
                areas.body,
            );
            let hints = if searching {
                widgets::SEARCH_HINTS
            } else {
                widgets::HOME_HINTS
            };
            frame.render_widget(
                widgets::StatusBar::new(hints).info(format!("共 {} 个模块", home.total)),
                areas.footer,
            );
        }
        Page::Module(module_page) => {
            let ui = &state.settings.ui;
            let view = widgets::ModuleView::new(module_page, icons)
                .show_deep_dives(ui.show_deep_dives)
                .show_keywords(ui.show_keywords);
            frame.render_stateful_widget(view, areas.body, &mut state.page_view);
            frame.render_widget(
                widgets::NavBar::new(
                    module_page.previous.as_ref(),
                    module_page.next.as_ref(),
                    icons,
                ),
                areas.footer,
            );
        }
        Page::NotFound(not_found) => {
            frame.render_widget(widgets::NotFoundView::new(not_found, icons), areas.body);
            frame.render_widget(widgets::StatusBar::new(widgets::NOT_FOUND_HINTS), areas.footer);
        }
    }

    if state.ui_mode == UiMode::Help {
        frame.render_widget(widgets::HelpOverlay, area);
    }
}
