use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the status screen to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveDown,
    MoveUp,
    Stage,
    Unstage,
}

/// Map a key event to an action; unbound keys and key releases yield `None`
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Char('a') => Some(Action::Stage),
        KeyCode::Char('r') | KeyCode::Char('u') => Some(Action::Unstage),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_bound_keys() {
        assert_eq!(action_for_key(press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(action_for_key(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(action_for_key(press(KeyCode::Down)), Some(Action::MoveDown));
        assert_eq!(action_for_key(press(KeyCode::Char('j'))), Some(Action::MoveDown));
        assert_eq!(action_for_key(press(KeyCode::Up)), Some(Action::MoveUp));
        assert_eq!(action_for_key(press(KeyCode::Char('k'))), Some(Action::MoveUp));
        assert_eq!(action_for_key(press(KeyCode::Char('a'))), Some(Action::Stage));
        assert_eq!(action_for_key(press(KeyCode::Char('r'))), Some(Action::Unstage));
        assert_eq!(action_for_key(press(KeyCode::Char('u'))), Some(Action::Unstage));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for_key(key), Some(Action::Quit));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(action_for_key(press(KeyCode::Char('c'))), None);
        assert_eq!(action_for_key(press(KeyCode::Char('x'))), None);
        assert_eq!(action_for_key(press(KeyCode::Enter)), None);
        assert_eq!(action_for_key(press(KeyCode::Left)), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(action_for_key(release), None);
    }
}
