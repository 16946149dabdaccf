//! Key mapping from terminal events to game keys.

use crate::types::{Key, KeyInput, KeyState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a terminal key code to the game key it controls.
pub fn map_key_code(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Key::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Key::Right)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Key::Down)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Key::Up)
        }

        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Some(Key::Start),

        _ => None,
    }
}

/// Map a crossterm key event (with its press/repeat/release kind) to a
/// [`KeyInput`] for the listener.
pub fn handle_key_event(event: KeyEvent) -> Option<KeyInput> {
    let key = map_key_code(event.code)?;
    let state = match event.kind {
        KeyEventKind::Press => KeyState::Down,
        KeyEventKind::Repeat => KeyState::Repeat,
        KeyEventKind::Release => KeyState::Up,
    };
    Some(KeyInput { key, state })
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
        && (matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)))
}
