//! Previous / home / next navigation bar for module pages

use academy_app::page::BACK_HOME_LABEL;
use academy_app::NavTarget;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, styles};

pub const PREVIOUS_LABEL: &str = "上一模块";
pub const NEXT_LABEL: &str = "下一模块";

/// Three equal slots. A missing neighbour leaves its slot empty so the
/// home link stays centered on the first and last module.
pub struct NavBar<'a> {
    previous: Option<&'a NavTarget>,
    next: Option<&'a NavTarget>,
    icons: IconSet,
}

impl<'a> NavBar<'a> {
    pub fn new(previous: Option<&'a NavTarget>, next: Option<&'a NavTarget>, icons: IconSet) -> Self {
        Self {
            previous,
            next,
            icons,
        }
    }

    fn previous_line(&self, target: &NavTarget) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{} ", self.icons.previous()), styles::keybinding()),
            Span::styled(format!("{PREVIOUS_LABEL} "), styles::text_muted()),
            Span::styled(target.title.clone(), styles::text_primary()),
        ])
    }

    fn next_line(&self, target: &NavTarget) -> Line<'static> {
        Line::from(vec![
            Span::styled(target.title.clone(), styles::text_primary()),
            Span::styled(format!(" {NEXT_LABEL}"), styles::text_muted()),
            Span::styled(format!(" {}", self.icons.next()), styles::keybinding()),
        ])
    }

    fn home_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{} ", self.icons.home()), styles::keybinding()),
            Span::styled(BACK_HOME_LABEL, styles::accent()),
        ])
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let [left, center, right] = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .areas(inner);

        if let Some(target) = self.previous {
            Paragraph::new(self.previous_line(target)).render(left, buf);
        }
        Paragraph::new(self.home_line())
            .alignment(Alignment::Center)
            .render(center, buf);
        if let Some(target) = self.next {
            Paragraph::new(self.next_line(target))
                .alignment(Alignment::Right)
                .render(right, buf);
        }
    }
}
