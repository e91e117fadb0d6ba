//! # Core Application Logic
//!
//! The navigation state machine. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Node / Entry (tree)  │
//!                    │  • NavigationStack      │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`node`]: `Node` and `Entry`, the lazily produced content tree
//! - [`navigation`]: `NavigationStack`, the push/pop state machine
//! - [`state`]: the `App` struct
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`config`]: config file, env and CLI resolution (the one module with I/O)

pub mod action;
pub mod config;
pub mod navigation;
pub mod node;
pub mod state;
