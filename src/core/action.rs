//! # Actions
//!
//! Everything that can happen to the navigator becomes an `Action`.
//! User presses Enter? That's `Action::Select`. Terminal resized? That's
//! `Action::Resize { .. }`.
//!
//! `update()` applies an action to the state and returns an `Effect` telling
//! the adapter what to do next. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::navigation::{BackOutcome, Transition};
use crate::core::state::{App, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Activate the entry under the cursor.
    Select,
    /// Go to the parent screen (or exit from the root).
    Back,
    /// Close the detail view and return to the top of the listing.
    Dismiss,
    Quit,
    CursorUp,
    CursorDown,
    CursorFirst,
    CursorLast,
    /// Move up by this many rows.
    PageUp(usize),
    /// Move down by this many rows.
    PageDown(usize),
    Resize { width: u16, height: u16 },
}

/// What the adapter should do after an `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// State changed; draw the listing again.
    Redraw,
    /// The cursor sits on a leaf at this index; the adapter checks whether
    /// its text fits the row before choosing a view.
    InspectLeaf(usize),
    /// Leave the program.
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Quit => Effect::Quit,
        Action::Select => {
            if app.nav.current_node().is_empty() {
                return Effect::None;
            }
            match app.nav.select() {
                Transition::Descended => Effect::Redraw,
                Transition::Leaf(index) => Effect::InspectLeaf(index),
                Transition::Unchanged => Effect::None,
            }
        }
        Action::Back => match app.nav.back() {
            BackOutcome::Ascended => Effect::Redraw,
            BackOutcome::NoParent => {
                info!("Back pressed at root, exiting");
                Effect::Quit
            }
        },
        Action::Dismiss => {
            app.nav.reset_cursor();
            Effect::Redraw
        }
        Action::CursorUp => {
            app.nav.cursor_up();
            Effect::Redraw
        }
        Action::CursorDown => {
            app.nav.cursor_down();
            Effect::Redraw
        }
        Action::CursorFirst => {
            app.nav.cursor_first();
            Effect::Redraw
        }
        Action::CursorLast => {
            app.nav.cursor_last();
            Effect::Redraw
        }
        Action::PageUp(rows) => {
            app.nav.page_up(rows);
            Effect::Redraw
        }
        Action::PageDown(rows) => {
            app.nav.page_down(rows);
            Effect::Redraw
        }
        Action::Resize { width, height } => {
            app.viewport = Viewport::new(width, height);
            Effect::Redraw
        }
    }
}
