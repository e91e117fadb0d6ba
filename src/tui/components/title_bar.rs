//! # TitleBar Component
//!
//! One-line bar with the current screen's title, centered on a filled
//! background.
//!
//! Stateless: the title and theme are props, nothing is remembered between
//! frames.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              Bhuwan Panta's CV               │
//! └──────────────────────────────────────────────┘
//! ```

use crate::tui::component::Component;
use crate::tui::layout::truncate;
use crate::tui::theme::Theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

pub struct TitleBar<'a> {
    pub title: &'a str,
    pub theme: &'a Theme,
}

impl<'a> TitleBar<'a> {
    pub fn new(title: &'a str, theme: &'a Theme) -> Self {
        Self { title, theme }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // One column of padding each side, inside the coloured block.
        let text = truncate(self.title, (area.width as usize).saturating_sub(2));
        let line = Line::from(Span::styled(format!(" {text} "), self.theme.title_bar())).centered();
        frame.render_widget(line, area);
    }
}
