use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Leave the program
    ForceQuit, // Ctrl+C
    Quit,      // q

    // Navigation
    Submit,
    Escape,
    CursorUp,
    CursorDown,
    Home,
    End,
    PageUp,
    PageDown,

    Resize(u16, u16),
    /// Any other key. Carries no action but still ends a detail view.
    Unhandled,
}

/// Block until the next event arrives.
pub fn read_event() -> std::io::Result<Option<TuiEvent>> {
    Ok(map_event(event::read()?))
}

/// Translate a raw crossterm event. Returns `None` for events the
/// navigator ignores entirely (mouse, focus, key releases).
pub fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            Some(map_key(key_event))
        }
        Event::Resize(width, height) => Some(TuiEvent::Resize(width, height)),
        _ => None,
    }
}

fn map_key(key_event: KeyEvent) -> TuiEvent {
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => TuiEvent::ForceQuit,
        (_, KeyCode::Char('q')) => TuiEvent::Quit,
        (_, KeyCode::Enter) => TuiEvent::Submit,
        (_, KeyCode::Esc) => TuiEvent::Escape,
        (_, KeyCode::Up | KeyCode::Char('k')) => TuiEvent::CursorUp,
        (_, KeyCode::Down | KeyCode::Char('j')) => TuiEvent::CursorDown,
        (_, KeyCode::Home | KeyCode::Char('g')) => TuiEvent::Home,
        (_, KeyCode::End | KeyCode::Char('G')) => TuiEvent::End,
        (_, KeyCode::PageUp | KeyCode::Left | KeyCode::Char('h')) => TuiEvent::PageUp,
        (_, KeyCode::PageDown | KeyCode::Right | KeyCode::Char('l')) => TuiEvent::PageDown,
        _ => TuiEvent::Unhandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent, MouseEventKind};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn plain(code: KeyCode) -> Option<TuiEvent> {
        map_event(key(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            map_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
        assert_eq!(plain(KeyCode::Char('q')), Some(TuiEvent::Quit));
    }

    #[test]
    fn test_plain_c_is_not_quit() {
        assert_eq!(plain(KeyCode::Char('c')), Some(TuiEvent::Unhandled));
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(plain(KeyCode::Enter), Some(TuiEvent::Submit));
        assert_eq!(plain(KeyCode::Esc), Some(TuiEvent::Escape));
        assert_eq!(plain(KeyCode::Up), Some(TuiEvent::CursorUp));
        assert_eq!(plain(KeyCode::Char('k')), Some(TuiEvent::CursorUp));
        assert_eq!(plain(KeyCode::Down), Some(TuiEvent::CursorDown));
        assert_eq!(plain(KeyCode::Char('j')), Some(TuiEvent::CursorDown));
        assert_eq!(plain(KeyCode::Char('g')), Some(TuiEvent::Home));
        assert_eq!(
            map_event(key(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Some(TuiEvent::End)
        );
        assert_eq!(plain(KeyCode::Left), Some(TuiEvent::PageUp));
        assert_eq!(plain(KeyCode::PageDown), Some(TuiEvent::PageDown));
    }

    #[test]
    fn test_resize() {
        assert_eq!(
            map_event(Event::Resize(120, 40)),
            Some(TuiEvent::Resize(120, 40))
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_event(Event::Key(release)), None);
    }

    #[test]
    fn test_mouse_ignored() {
        let mouse = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(map_event(Event::Mouse(mouse)), None);
    }
}
