//! Keyboard mapping for the terminal frontend.
//!
//! Each key press maps to at most one `GameAction`; held-key repeats come
//! from the terminal's own auto-repeat. Phase gating lives in the game state,
//! so the map stays context-free (Enter is always `Start`, the state decides
//! whether that means anything).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

/// Map a key press to a game action
pub fn map_key(code: KeyCode) -> Option<GameAction> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::SoftDrop),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char(' ') => {
            Some(GameAction::Rotate)
        }
        KeyCode::Char('x') | KeyCode::Char('X') => Some(GameAction::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::TogglePause),
        KeyCode::Enter => Some(GameAction::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        _ => None,
    }
}

/// Whether a key event should quit the program (q, Esc, or Ctrl-C)
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    #[test]
    fn test_movement_keys_map_both_arrows_and_letters() {
        assert_eq!(map_key(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(map_key(KeyCode::Char('a')), Some(GameAction::MoveLeft));
        assert_eq!(map_key(KeyCode::Right), Some(GameAction::MoveRight));
        assert_eq!(map_key(KeyCode::Char('D')), Some(GameAction::MoveRight));
        assert_eq!(map_key(KeyCode::Down), Some(GameAction::SoftDrop));
        assert_eq!(map_key(KeyCode::Up), Some(GameAction::Rotate));
        assert_eq!(map_key(KeyCode::Char(' ')), Some(GameAction::Rotate));
        assert_eq!(map_key(KeyCode::Char('x')), Some(GameAction::HardDrop));
    }

    #[test]
    fn test_lifecycle_keys() {
        assert_eq!(map_key(KeyCode::Char('p')), Some(GameAction::TogglePause));
        assert_eq!(map_key(KeyCode::Enter), Some(GameAction::Start));
        assert_eq!(map_key(KeyCode::Char('r')), Some(GameAction::Restart));
    }

    #[test]
    fn test_unbound_keys_map_to_nothing() {
        assert_eq!(map_key(KeyCode::Char('z')), None);
        assert_eq!(map_key(KeyCode::Tab), None);
        assert_eq!(map_key(KeyCode::F(1)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(key(KeyCode::Char('q'))));
        assert!(should_quit(key(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(key(KeyCode::Char('c'))));
        assert!(!should_quit(key(KeyCode::Left)));
    }
}
