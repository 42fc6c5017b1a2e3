//! Key mapping from terminal events to control events.

use crate::types::ControlEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to control events.
pub fn handle_key_event(key: KeyEvent) -> Option<ControlEvent> {
    if is_interrupt(key) {
        return Some(ControlEvent::Interrupt);
    }

    match key.code {
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => {
            Some(ControlEvent::TogglePause)
        }
        KeyCode::Enter => Some(ControlEvent::Acknowledge),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(ControlEvent::Quit),
        _ => None,
    }
}

/// Ctrl+C. Raw mode turns the signal into a key press.
pub fn is_interrupt(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key should quit the simulation.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        handle_key_event(key),
        Some(ControlEvent::Quit | ControlEvent::Interrupt)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_pause_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(ControlEvent::TogglePause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('P'))),
            Some(ControlEvent::TogglePause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(ControlEvent::TogglePause)
        );
    }

    #[test]
    fn test_enter_acknowledges() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(ControlEvent::Acknowledge)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_ctrl_c_is_interrupt_not_plain_c() {
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(ControlEvent::Interrupt)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('c'))), None);
    }
}
