//! # DetailView Component
//!
//! Full text of one leaf, for entries whose text overflows a list row.
//!
//! ```text
//! Contact                                   (bold, underlined)
//!
//! Email: ricky.pantha@gmail.com | Phone:
//! +977-9844718578 | Location: Lalitpur,
//! Nepal
//!
//! ↑/k up • ↓/j down • q quit
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::node::Entry;
use crate::tui::component::Component;
use crate::tui::layout::{inner_width, wrap};
use crate::tui::theme::Theme;

pub const DETAIL_HINT: &str = "↑/k up • ↓/j down • q quit";

pub struct DetailView<'a> {
    pub entry: &'a Entry,
    pub theme: &'a Theme,
}

impl<'a> DetailView<'a> {
    pub fn new(entry: &'a Entry, theme: &'a Theme) -> Self {
        Self { entry, theme }
    }

    /// Lines of the view for a given terminal width.
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                self.entry.label().to_string(),
                self.theme.detail_title(),
            )),
            Line::default(),
        ];
        lines.extend(
            wrap(self.entry.description(), inner_width(width))
                .into_iter()
                .map(Line::from),
        );
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(DETAIL_HINT, self.theme.hint())));
        lines
    }
}

impl Component for DetailView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.lines(area.width)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::STORY;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::style::Modifier;

    #[test]
    fn test_lines_layout() {
        let theme = Theme::default();
        let entry = Entry::leaf("Story", STORY);
        let view = DetailView::new(&entry, &theme);
        let lines = view.lines(40);

        assert_eq!(lines[0].to_string(), "Story");
        assert!(lines[1].to_string().is_empty());
        assert_eq!(lines.last().unwrap().to_string(), DETAIL_HINT);

        let body: Vec<String> = lines[2..lines.len() - 2]
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert!(body.len() > 1);
        assert!(body.iter().all(|l| l.chars().count() <= 36));
        assert_eq!(body.join(" "), STORY);
    }

    #[test]
    fn test_title_style() {
        let theme = Theme::default();
        let entry = Entry::leaf("Story", STORY);
        let backend = TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut view = DetailView::new(&entry, &theme);

        terminal
            .draw(|f| {
                view.render(f, f.area());
            })
            .unwrap();

        let cell = &terminal.backend().buffer()[(0, 0)];
        assert_eq!(cell.symbol(), "S");
        assert!(cell.modifier.contains(Modifier::BOLD));
        assert!(cell.modifier.contains(Modifier::UNDERLINED));
    }
}
