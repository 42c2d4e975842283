use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Start the next prediction cycle
    Trigger,
    None,
}

/// Map a key event to an action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        (KeyCode::Enter, KeyModifiers::NONE) => Action::Trigger,
        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::Trigger,
        (KeyCode::Char('n'), KeyModifiers::NONE) => Action::Trigger,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_trigger_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Enter, KeyModifiers::NONE)), Action::Trigger);
        assert_eq!(handle_key_event(key(KeyCode::Char(' '), KeyModifiers::NONE)), Action::Trigger);
        assert_eq!(handle_key_event(key(KeyCode::Char('n'), KeyModifiers::NONE)), Action::Trigger);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE)), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Esc, KeyModifiers::NONE)), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)), Action::Quit);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(handle_key_event(key(KeyCode::Char('x'), KeyModifiers::NONE)), Action::None);
        assert_eq!(handle_key_event(key(KeyCode::Char('n'), KeyModifiers::CONTROL)), Action::None);
    }
}
