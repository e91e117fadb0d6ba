//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard events into `core::Action` values via the dispatcher.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Strictly one event at a time:
//!
//! ```text
//! draw(state, hint) → read event → dispatch → (state', hint') → draw ...
//! ```
//!
//! There is nothing to animate, so the loop blocks on input and only
//! redraws after an event that was dispatched. A read or draw failure ends
//! the loop and is returned to the caller; the terminal is restored either
//! way.

mod component;
pub mod components;
pub mod dispatch;
pub mod event;
pub mod layout;
pub mod theme;
mod ui;

use log::{debug, info};
use std::io::stdout;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;

use crate::core::config::ResolvedConfig;
use crate::core::navigation::NavigationStack;
use crate::core::node::Node;
use crate::core::state::{App, Viewport};
use crate::tui::dispatch::{Dispatch, RenderHint, dispatch};
use crate::tui::event::read_event;
use crate::tui::theme::Theme;

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Run the navigator over `root` until the user quits.
pub fn run(config: &ResolvedConfig, root: Node) -> std::io::Result<()> {
    let theme = Theme::from_config(&config.theme);

    let mut terminal = ratatui::try_init()?;
    let result = TerminalModeGuard::new().and_then(|_guard| {
        let size = terminal.size()?;
        let mut app = App::new(
            NavigationStack::new(root),
            Viewport::new(size.width, size.height),
        );
        info!("Terminal size {}x{}", size.width, size.height);

        let mut hint = RenderHint::List;
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal.draw(|f| ui::draw_ui(f, &app, &theme, hint))?;
                needs_redraw = false;
            }

            // Ignored events (mouse, key release) don't touch the frame.
            let Some(event) = read_event()? else {
                continue;
            };

            match dispatch(&mut app, event, hint) {
                Dispatch::Quit => {
                    info!("Quitting at depth {}", app.nav.depth());
                    break;
                }
                Dispatch::Render(next) => {
                    debug!("Event {:?} -> {:?}", event, next);
                    hint = next;
                    needs_redraw = true;
                }
            }
        }
        Ok(())
    });

    ratatui::restore();
    result
}
