use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{DetailView, HelpBar, MenuList, TitleBar};
use crate::tui::dispatch::RenderHint;
use crate::tui::theme::Theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

/// Draw one full frame: the detail view when the hint asks for it and the
/// entry is a leaf, the list otherwise.
pub fn draw_ui(frame: &mut Frame, app: &App, theme: &Theme, hint: RenderHint) {
    let node = app.nav.current_node();

    if let RenderHint::Detail(index) = hint
        && let Some(entry) = node.entry(index)
        && entry.is_leaf()
    {
        DetailView::new(entry, theme).render(frame, frame.area());
        return;
    }

    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(1)]);
    let [title_area, _gap, list_area, help_area] = layout.areas(frame.area());

    TitleBar::new(&node.title, theme).render(frame, title_area);
    MenuList::new(node, app.nav.cursor(), theme).render(frame, list_area);
    HelpBar::new(theme).render(frame, help_area);
}
