//! Page view state - scroll position and viewport bounds.
//!
//! Shared by the handler layer (scroll commands) and the TUI layer, which
//! reports content and viewport sizes during render.

/// Vertical scroll state for a rendered page
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageViewState {
    /// Current scroll offset from top, in rendered lines
    pub offset: usize,
    /// Total rendered lines (set during render)
    pub total_lines: usize,
    /// Visible lines (set during render)
    pub visible_lines: usize,
}

impl PageViewState {
    pub fn new() -> Self {
        Self::default()
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn page_up(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_up(page);
    }

    pub fn page_down(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_down(page);
    }

    /// Update with new content size, clamping the offset if content shrank
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.total_lines = total;
        self.visible_lines = visible;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Forget everything measured for the previous page
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_at_top(&self) -> bool {
        self.offset == 0
    }

    pub fn is_at_bottom(&self) -> bool {
        self.offset >= self.max_offset()
    }
}
