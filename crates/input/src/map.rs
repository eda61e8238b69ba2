//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game commands.
///
/// Letter keys match in either case. Unmapped keys yield `None`.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if should_quit(key) {
        return Some(Command::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::RotateCw),

        // Actions
        KeyCode::Char(' ') | KeyCode::Char('h') | KeyCode::Char('H') => Some(Command::HardDrop),
        KeyCode::Char('g')
        | KeyCode::Char('G')
        | KeyCode::Char('c')
        | KeyCode::Char('C') => Some(Command::Hold),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Resume),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Option<Command> {
        map_key(KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(key(KeyCode::Left), Some(Command::MoveLeft));
        assert_eq!(key(KeyCode::Right), Some(Command::MoveRight));
        assert_eq!(key(KeyCode::Down), Some(Command::SoftDrop));

        assert_eq!(key(KeyCode::Char('a')), Some(Command::MoveLeft));
        assert_eq!(key(KeyCode::Char('D')), Some(Command::MoveRight));
        assert_eq!(key(KeyCode::Char('s')), Some(Command::SoftDrop));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(key(KeyCode::Up), Some(Command::RotateCw));
        assert_eq!(key(KeyCode::Char('w')), Some(Command::RotateCw));
        assert_eq!(key(KeyCode::Char('W')), Some(Command::RotateCw));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(key(KeyCode::Char(' ')), Some(Command::HardDrop));
        assert_eq!(key(KeyCode::Char('h')), Some(Command::HardDrop));
        assert_eq!(key(KeyCode::Char('g')), Some(Command::Hold));
        assert_eq!(key(KeyCode::Char('c')), Some(Command::Hold));
        assert_eq!(key(KeyCode::Char('p')), Some(Command::Pause));
        assert_eq!(key(KeyCode::Char('r')), Some(Command::Resume));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(key(KeyCode::Char('x')), None);
        assert_eq!(key(KeyCode::Enter), None);
        assert_eq!(key(KeyCode::Tab), None);
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
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));

        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }
}
