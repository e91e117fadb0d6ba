//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).
//!
//! A small synthetic tree, independent from the real résumé content:
//!
//! ```text
//! Sample
//! ├── Team ──► Team
//! │            ├── Lead ──► Lead
//! │            │            └── Carol
//! │            ├── Alice
//! │            └── Bob
//! ├── Motto          (short leaf)
//! ├── Story          (long leaf)
//! └── Archive ──► Archive (no entries)
//! ```

use crate::core::navigation::NavigationStack;
use crate::core::node::{Entry, Node};
use crate::core::state::{App, Viewport};

pub const STORY: &str = "Started out fixing printers, moved on to writing drivers for them, \
    and eventually ended up building the service that schedules every print job in the building.";

pub fn sample_root() -> Node {
    Node::new(
        "Sample",
        vec![
            Entry::branch("Team", "People I work with", sample_team),
            Entry::leaf("Motto", "Ship it"),
            Entry::leaf("Story", STORY),
            Entry::branch("Archive", "Nothing here yet", sample_archive),
        ],
    )
}

pub fn sample_team() -> Node {
    Node::new(
        "Team",
        vec![
            Entry::branch("Lead", "Who runs things", sample_lead),
            Entry::leaf("Alice", "Design"),
            Entry::leaf("Bob", "Backend"),
        ],
    )
}

pub fn sample_lead() -> Node {
    Node::new("Lead", vec![Entry::leaf("Carol", "Carol runs the team")])
}

pub fn sample_archive() -> Node {
    Node::new("Archive", Vec::new())
}

/// Creates a test App over the sample tree with an 80x24 viewport.
pub fn test_app() -> App {
    App::new(NavigationStack::new(sample_root()), Viewport::new(80, 24))
}
