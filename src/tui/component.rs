use ratatui::layout::Rect;
use ratatui::Frame;

/// A reusable UI component.
///
/// Components follow the props pattern:
/// - They receive data via struct fields, borrowed for one frame.
/// - They render to a `Frame` within a given `Rect`.
///
/// `render` takes `&mut self` so a component may keep per-frame
/// presentation state (e.g. a `ListState`) while drawing, in line with
/// ratatui's `StatefulWidget`.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
