// Terminal key events to app key actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{AppMode, KeyAction};

pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Maps a key press in the reader or notes screen. Command mode keys go to
/// the command deck instead and yield `None` here.
pub fn key_to_action(mode: AppMode, key: &KeyEvent) -> Option<KeyAction> {
    if is_interrupt(key) {
        return Some(KeyAction::Quit);
    }
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    match mode {
        AppMode::Reading | AppMode::Paused => match key.code {
            KeyCode::Char(' ') => Some(KeyAction::TogglePlay),
            KeyCode::Left if shift => Some(KeyAction::MuchSlower),
            KeyCode::Right if shift => Some(KeyAction::MuchFaster),
            KeyCode::Left => Some(KeyAction::StepBack),
            KeyCode::Right => Some(KeyAction::StepForward),
            KeyCode::Up => Some(KeyAction::Faster),
            KeyCode::Down => Some(KeyAction::Slower),
            KeyCode::Char(c @ '0'..='9') => Some(KeyAction::SeekTenth(c as u8 - b'0')),
            KeyCode::Char('r') => Some(KeyAction::Restart),
            KeyCode::Char('a') => Some(KeyAction::CycleAlignment),
            KeyCode::Esc => Some(KeyAction::Back),
            _ => None,
        },
        AppMode::Notes => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(KeyAction::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(KeyAction::Down),
            KeyCode::Enter => Some(KeyAction::Select),
            KeyCode::Char('d') | KeyCode::Delete => Some(KeyAction::Delete),
            KeyCode::Esc => Some(KeyAction::Back),
            _ => None,
        },
        AppMode::Command | AppMode::Quit => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_reader_keys() {
        let mode = AppMode::Reading;
        assert_eq!(
            key_to_action(mode, &key(KeyCode::Char(' '))),
            Some(KeyAction::TogglePlay)
        );
        assert_eq!(
            key_to_action(mode, &key(KeyCode::Left)),
            Some(KeyAction::StepBack)
        );
        assert_eq!(
            key_to_action(mode, &key(KeyCode::Up)),
            Some(KeyAction::Faster)
        );
        assert_eq!(
            key_to_action(mode, &key(KeyCode::Char('7'))),
            Some(KeyAction::SeekTenth(7))
        );
        assert_eq!(key_to_action(mode, &key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_shift_arrows_change_speed() {
        let event = KeyEvent::new(KeyCode::Right, KeyModifiers::SHIFT);
        assert_eq!(
            key_to_action(AppMode::Paused, &event),
            Some(KeyAction::MuchFaster)
        );
        let event = KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT);
        assert_eq!(
            key_to_action(AppMode::Paused, &event),
            Some(KeyAction::MuchSlower)
        );
    }

    #[test]
    fn test_notes_keys() {
        assert_eq!(
            key_to_action(AppMode::Notes, &key(KeyCode::Enter)),
            Some(KeyAction::Select)
        );
        assert_eq!(
            key_to_action(AppMode::Notes, &key(KeyCode::Char('d'))),
            Some(KeyAction::Delete)
        );
        assert_eq!(key_to_action(AppMode::Notes, &key(KeyCode::Char(' '))), None);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            key_to_action(AppMode::Command, &event),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            key_to_action(AppMode::Reading, &event),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn test_command_mode_keys_unmapped() {
        assert_eq!(key_to_action(AppMode::Command, &key(KeyCode::Char('a'))), None);
    }
}
