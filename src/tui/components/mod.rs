//! # TUI Components
//!
//! All UI components for the terminal interface. Every one of them is
//! props-based: it borrows what it draws for a single frame and keeps no
//! state between frames.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (centered screen title)
//! ├── menu_list.rs     (entries of the current node)
//! ├── help_bar.rs      (key hints under the list)
//! └── detail_view.rs   (full text of one leaf)
//! ```
//!
//! Each file holds the component, its rendering logic and its tests.

pub mod detail_view;
pub mod help_bar;
pub mod menu_list;
pub mod title_bar;

pub use detail_view::DetailView;
pub use help_bar::HelpBar;
pub use menu_list::MenuList;
pub use title_bar::TitleBar;
