//! # Content Tree
//!
//! A `Node` is one menu screen: a title plus an ordered list of entries.
//! Each `Entry` is either a `Branch` (leads to another screen) or a `Leaf`
//! (display-only text).
//!
//! Child screens are never stored. A branch holds a plain `fn() -> Node`
//! producer that is invoked every time the branch is entered:
//!
//! ```text
//! root() ──► Node "Résumé"
//!            ├── Branch "Skills"      ──► skills()  ──► Node "Skills"
//!            │                                          ├── Leaf "Databases"
//!            │                                          └── ...
//!            └── Leaf   "..."
//! ```
//!
//! Producers are function pointers rather than closures so they cannot
//! capture state: calling one twice yields the same screen. Nothing in the
//! tree points back at its parent; "back" is the navigator's job.

/// Builds a screen on demand. Must be pure and cheap (no I/O).
pub type Producer = fn() -> Node;

/// One navigable menu screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub title: String,
    pub entries: Vec<Entry>,
}

impl Node {
    pub fn new(title: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            title: title.into(),
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Entry labels in display order.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(Entry::label).collect()
    }
}

/// A single row of a `Node`.
#[derive(Debug, Clone)]
pub enum Entry {
    /// Leads to another screen.
    Branch {
        label: String,
        summary: String,
        child: Producer,
    },
    /// Terminal row carrying the full text shown in the detail view.
    Leaf { label: String, text: String },
}

impl Entry {
    pub fn branch(label: impl Into<String>, summary: impl Into<String>, child: Producer) -> Self {
        Entry::Branch {
            label: label.into(),
            summary: summary.into(),
            child,
        }
    }

    pub fn leaf(label: impl Into<String>, text: impl Into<String>) -> Self {
        Entry::Leaf {
            label: label.into(),
            text: text.into(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Entry::Branch { label, .. } | Entry::Leaf { label, .. } => label,
        }
    }

    /// Second line of a list row: the branch summary or the leaf text.
    pub fn description(&self) -> &str {
        match self {
            Entry::Branch { summary, .. } => summary,
            Entry::Leaf { text, .. } => text,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Entry::Leaf { .. })
    }
}

// Producers are compared by what they show, not by address: function
// pointer identity is not stable across codegen units.
impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Entry::Branch {
                    label: a_label,
                    summary: a_summary,
                    ..
                },
                Entry::Branch {
                    label: b_label,
                    summary: b_summary,
                    ..
                },
            ) => a_label == b_label && a_summary == b_summary,
            (
                Entry::Leaf {
                    label: a_label,
                    text: a_text,
                },
                Entry::Leaf {
                    label: b_label,
                    text: b_text,
                },
            ) => a_label == b_label && a_text == b_text,
            _ => false,
        }
    }
}
