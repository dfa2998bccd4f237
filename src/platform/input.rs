//! Input mapping
//!
//! Every frontend funnels keys and pointer presses into [`Action`]. During
//! name entry printable characters are text and pointer presses do nothing;
//! everywhere else any key or press is the primary action.

use crate::sim::{Action, GamePhase};

/// Map a pointer press (mouse button, touch). Presses never confirm a name,
/// only Enter does.
pub fn map_pointer(phase: GamePhase) -> Option<Action> {
    match phase {
        GamePhase::NameEntry => None,
        _ => Some(Action::Primary),
    }
}

/// Map a DOM `KeyboardEvent.key` value. A page has nothing to quit to, so
/// no key maps to [`Action::Quit`].
pub fn map_key_name(key: &str, phase: GamePhase) -> Option<Action> {
    if phase == GamePhase::NameEntry {
        return match key {
            "Enter" => Some(Action::Primary),
            "Backspace" => Some(Action::Backspace),
            _ => single_char(key).map(Action::Char),
        };
    }
    match key {
        // Modifier and lock keys alone do nothing
        "Shift" | "Control" | "Alt" | "Meta" | "CapsLock" | "Tab" => None,
        _ => Some(Action::Primary),
    }
}

fn single_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Map a crossterm terminal event
#[cfg(not(target_arch = "wasm32"))]
pub fn map_terminal_event(event: &crossterm::event::Event, phase: GamePhase) -> Option<Action> {
    use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};

    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Some(Action::Quit);
            }
            match (key.code, phase) {
                (KeyCode::Esc, _) => Some(Action::Quit),
                (KeyCode::Enter, GamePhase::NameEntry) => Some(Action::Primary),
                (KeyCode::Backspace, GamePhase::NameEntry) => Some(Action::Backspace),
                (KeyCode::Char(c), GamePhase::NameEntry) => Some(Action::Char(c)),
                (_, GamePhase::NameEntry) => None,
                (KeyCode::Char('q'), _) => Some(Action::Quit),
                (KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Up, _) => Some(Action::Primary),
                (KeyCode::Char(_), GamePhase::GameOver) => Some(Action::Primary),
                _ => None,
            }
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(_) => map_pointer(phase),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_outside_name_entry() {
        assert_eq!(map_key_name(" ", GamePhase::Running), Some(Action::Primary));
        assert_eq!(map_key_name("a", GamePhase::GameOver), Some(Action::Primary));
        assert_eq!(map_key_name("Shift", GamePhase::Running), None);
        assert_eq!(map_key_name("Escape", GamePhase::Start), Some(Action::Primary));
    }

    #[test]
    fn test_key_names_in_name_entry() {
        let phase = GamePhase::NameEntry;
        assert_eq!(map_key_name("x", phase), Some(Action::Char('x')));
        assert_eq!(map_key_name("Backspace", phase), Some(Action::Backspace));
        assert_eq!(map_key_name("Enter", phase), Some(Action::Primary));
        assert_eq!(map_key_name("ArrowUp", phase), None);
    }

    #[test]
    fn test_pointer_is_primary() {
        for phase in [GamePhase::Start, GamePhase::Running, GamePhase::GameOver] {
            assert_eq!(map_pointer(phase), Some(Action::Primary));
        }
    }

    #[test]
    fn test_pointer_ignored_during_name_entry() {
        assert_eq!(map_pointer(GamePhase::NameEntry), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_terminal_keys() {
        use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

        let key = |code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE));

        assert_eq!(
            map_terminal_event(&key(KeyCode::Char(' ')), GamePhase::Running),
            Some(Action::Primary)
        );
        assert_eq!(
            map_terminal_event(&key(KeyCode::Char('q')), GamePhase::Running),
            Some(Action::Quit)
        );
        // 'q' is just a letter while typing a name
        assert_eq!(
            map_terminal_event(&key(KeyCode::Char('q')), GamePhase::NameEntry),
            Some(Action::Char('q'))
        );
        assert_eq!(
            map_terminal_event(&key(KeyCode::Enter), GamePhase::NameEntry),
            Some(Action::Primary)
        );
        assert_eq!(
            map_terminal_event(&key(KeyCode::Backspace), GamePhase::NameEntry),
            Some(Action::Backspace)
        );
        assert_eq!(
            map_terminal_event(
                &Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
                GamePhase::NameEntry
            ),
            Some(Action::Quit)
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_terminal_mouse_press() {
        use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

        let press = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_terminal_event(&press, GamePhase::Running), Some(Action::Primary));
        assert_eq!(map_terminal_event(&press, GamePhase::NameEntry), None);
    }
}
