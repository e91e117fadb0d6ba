//! # Input Dispatcher
//!
//! Turns one `TuiEvent` into core actions and decides what the next frame
//! shows.
//!
//! ```text
//!            Submit on overflowing leaf
//!   Listing ───────────────────────────► Detail
//!      ▲                                   │
//!      └───────────── any event ───────────┘
//!                 (resize redraws Detail)
//! ```
//!
//! `Detail` lasts one cycle: it is a `RenderHint` returned from `dispatch`,
//! fed back in with the next event, and dropped unless that event is a
//! resize. Nothing about it is stored in `App`.

use log::info;

use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::tui::event::TuiEvent;
use crate::tui::layout::{measure_fits, page_size};

/// Which view the next frame draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderHint {
    /// The current node as a list.
    List,
    /// Full text of the leaf at this index of the current node.
    Detail(usize),
}

/// Outcome of dispatching one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Render(RenderHint),
    Quit,
}

/// Apply `event` to `app`. `showing` is what the last frame displayed.
pub fn dispatch(app: &mut App, event: TuiEvent, showing: RenderHint) -> Dispatch {
    let action = match event {
        TuiEvent::ForceQuit | TuiEvent::Quit => Action::Quit,
        TuiEvent::Resize(width, height) => {
            info!("Resized to {}x{}", width, height);
            update(app, Action::Resize { width, height });
            return Dispatch::Render(showing);
        }
        TuiEvent::Submit => {
            // Select stays unreachable on an empty screen.
            if app.nav.current_node().is_empty() {
                return Dispatch::Render(RenderHint::List);
            }
            Action::Select
        }
        TuiEvent::Escape => match showing {
            RenderHint::Detail(_) => Action::Dismiss,
            RenderHint::List => Action::Back,
        },
        TuiEvent::CursorUp => Action::CursorUp,
        TuiEvent::CursorDown => Action::CursorDown,
        TuiEvent::Home => Action::CursorFirst,
        TuiEvent::End => Action::CursorLast,
        TuiEvent::PageUp => Action::PageUp(page_size(app.viewport)),
        TuiEvent::PageDown => Action::PageDown(page_size(app.viewport)),
        TuiEvent::Unhandled => return Dispatch::Render(RenderHint::List),
    };

    match update(app, action) {
        Effect::Quit => Dispatch::Quit,
        Effect::InspectLeaf(index) => Dispatch::Render(inspect_leaf(app, index)),
        Effect::Redraw | Effect::None => Dispatch::Render(RenderHint::List),
    }
}

/// A leaf gets the detail view only when its text overflows a list row.
fn inspect_leaf(app: &App, index: usize) -> RenderHint {
    let Some(entry) = app.nav.current_node().entry(index) else {
        return RenderHint::List;
    };
    if measure_fits(entry.description(), app.viewport.width) {
        RenderHint::List
    } else {
        info!(
            "Showing full text of '{}' ({} columns available)",
            entry.label(),
            app.viewport.width
        );
        RenderHint::Detail(index)
    }
}
