//! # Navigation Stack
//!
//! The state machine at the heart of the navigator: the screen currently on
//! display, the screens above it, and the cursor.
//!
//! ```text
//! ancestry: [Résumé, Experience]    current: RippeyAI    cursor: 2
//!            ▲ outermost              ▲ on screen
//! ```
//!
//! `enter` pushes `current` and replaces it with the branch's freshly produced
//! child; `back` pops the last ancestor. The exact `Node` we came from is
//! restored, so a parent never needs to be rebuilt or referenced by its child.
//!
//! Invariants:
//! - `ancestry` is empty iff `current` is the root screen.
//! - `cursor < current.len()` whenever `current` has entries, `0` otherwise.
//! - The cursor is reset to `0` on every push and pop.

use log::{debug, info};

use crate::core::node::{Entry, Node};

/// Result of `NavigationStack::enter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A branch was entered; `current` is now its child.
    Descended,
    /// The entry at this index is a leaf. The stack is unchanged; the caller
    /// decides whether its text warrants the detail view.
    Leaf(usize),
    /// No entry at the requested position.
    Unchanged,
}

/// Result of `NavigationStack::back`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    Ascended,
    /// Already at the root. Callers treat this as a request to exit.
    NoParent,
}

#[derive(Debug, Clone)]
pub struct NavigationStack {
    current: Node,
    ancestry: Vec<Node>,
    cursor: usize,
}

impl NavigationStack {
    pub fn new(root: Node) -> Self {
        Self {
            current: root,
            ancestry: Vec::new(),
            cursor: 0,
        }
    }

    /// Activate the entry at `position`.
    pub fn enter(&mut self, position: usize) -> Transition {
        let child = match self.current.entry(position) {
            Some(Entry::Branch { child, .. }) => *child,
            Some(Entry::Leaf { .. }) => return Transition::Leaf(position),
            None => {
                debug!(
                    "Ignoring enter at {} on '{}' ({} entries)",
                    position,
                    self.current.title,
                    self.current.len()
                );
                return Transition::Unchanged;
            }
        };

        let next = child();
        let parent = std::mem::replace(&mut self.current, next);
        self.ancestry.push(parent);
        self.cursor = 0;
        info!(
            "Entered '{}' (depth {})",
            self.current.title,
            self.ancestry.len()
        );
        Transition::Descended
    }

    /// Activate the entry under the cursor.
    pub fn select(&mut self) -> Transition {
        self.enter(self.cursor)
    }

    /// Return to the parent screen.
    pub fn back(&mut self) -> BackOutcome {
        match self.ancestry.pop() {
            Some(parent) => {
                let left = std::mem::replace(&mut self.current, parent);
                self.cursor = 0;
                info!(
                    "Back from '{}' to '{}' (depth {})",
                    left.title,
                    self.current.title,
                    self.ancestry.len()
                );
                BackOutcome::Ascended
            }
            None => BackOutcome::NoParent,
        }
    }

    pub fn current_node(&self) -> &Node {
        &self.current
    }

    pub fn depth(&self) -> usize {
        self.ancestry.len()
    }

    pub fn is_root(&self) -> bool {
        self.ancestry.is_empty()
    }

    /// Titles from the root down to the current screen.
    pub fn breadcrumbs(&self) -> Vec<&str> {
        self.ancestry
            .iter()
            .chain(std::iter::once(&self.current))
            .map(|node| node.title.as_str())
            .collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.current.entry(self.cursor)
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        self.cursor = self.clamp(self.cursor + 1);
    }

    pub fn cursor_first(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_last(&mut self) {
        self.cursor = self.current.len().saturating_sub(1);
    }

    pub fn page_up(&mut self, page: usize) {
        self.cursor = self.cursor.saturating_sub(page.max(1));
    }

    pub fn page_down(&mut self, page: usize) {
        self.cursor = self.clamp(self.cursor + page.max(1));
    }

    fn clamp(&self, index: usize) -> usize {
        index.min(self.current.len().saturating_sub(1))
    }
}
