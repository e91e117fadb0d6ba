//! # HelpBar Component
//!
//! Key hints under the list, shortened with an ellipsis on narrow terminals.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::tui::component::Component;
use crate::tui::layout::truncate;
use crate::tui::theme::Theme;

pub const LIST_HINT: &str = "↑/k up • ↓/j down • enter select • esc back • q quit";

pub struct HelpBar<'a> {
    pub theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Component for HelpBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = truncate(LIST_HINT, (area.width as usize).saturating_sub(2));
        let line = Line::from(Span::styled(format!("  {text}"), self.theme.hint()));
        frame.render_widget(line, area);
    }
}
