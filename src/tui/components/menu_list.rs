//! # MenuList Component
//!
//! Renders one `Node` as a vertical list. Each entry takes two lines plus a
//! spacer: the label, then the description (branch summary or leaf text)
//! cut to the row width.
//!
//! ```text
//! │ Introduction                      ← cursor row, accent colour
//! │ Basic Information and Contact
//!
//!   Skills
//!   Technical and Non-Technical Pro…
//! ```
//!
//! The cursor lives in `NavigationStack`; the `ListState` built here is a
//! per-frame view of it so ratatui can scroll the selected row into view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::core::node::{Entry, Node};
use crate::tui::component::Component;
use crate::tui::layout::{inner_width, truncate};
use crate::tui::theme::Theme;

const SELECTED_GUTTER: &str = "│ ";
const GUTTER: &str = "  ";

pub struct MenuList<'a> {
    pub node: &'a Node,
    pub cursor: usize,
    pub theme: &'a Theme,
    list_state: ListState,
}

impl<'a> MenuList<'a> {
    pub fn new(node: &'a Node, cursor: usize, theme: &'a Theme) -> Self {
        let mut list_state = ListState::default();
        if !node.is_empty() {
            list_state.select(Some(cursor));
        }
        Self {
            node,
            cursor,
            theme,
            list_state,
        }
    }

    fn item(&self, entry: &Entry, selected: bool, width: usize) -> ListItem<'static> {
        let (gutter, label_style, desc_style) = if selected {
            (
                SELECTED_GUTTER,
                self.theme.selected_label(),
                self.theme.selected_description(),
            )
        } else {
            (GUTTER, self.theme.label(), self.theme.description())
        };

        let label = truncate(entry.label(), width);
        let description = truncate(entry.description(), width);

        ListItem::new(vec![
            Line::from(vec![
                Span::styled(gutter, label_style),
                Span::styled(label, label_style),
            ]),
            Line::from(vec![
                Span::styled(gutter, desc_style),
                Span::styled(description, desc_style),
            ]),
            Line::default(),
        ])
    }
}

impl Component for MenuList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.node.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                format!("{GUTTER}No items."),
                self.theme.hint(),
            )));
            frame.render_widget(empty, area);
            return;
        }

        let width = inner_width(area.width);
        let items: Vec<ListItem> = self
            .node
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| self.item(entry, i == self.cursor, width))
            .collect();

        frame.render_stateful_widget(List::new(items), area, &mut self.list_state);
    }
}
