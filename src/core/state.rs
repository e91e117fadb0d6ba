//! # Application State
//!
//! Everything the navigator knows, in one place:
//!
//! ```text
//! App
//! ├── nav: NavigationStack   // current screen, ancestry, cursor
//! └── viewport: Viewport     // last known terminal size
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! Whether the detail view is showing is deliberately *not* stored here: it is
//! a render hint produced per event by the dispatcher.

use crate::core::navigation::NavigationStack;

/// Terminal dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

pub struct App {
    pub nav: NavigationStack,
    pub viewport: Viewport,
}

impl App {
    pub fn new(nav: NavigationStack, viewport: Viewport) -> Self {
        Self { nav, viewport }
    }
}
