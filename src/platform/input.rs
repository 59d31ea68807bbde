//! Keyboard bindings
//!
//! | Key        | Action                  |
//! |------------|-------------------------|
//! | `w` / `s`  | left paddle up / down   |
//! | Up / Down  | right paddle up / down  |
//! | Space      | restart (game over)     |
//! | Esc        | exit (game over)        |
//! | `q`, Ctrl-C| quit immediately        |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::session::Command;
use crate::sim::Side;

/// What a key press means to the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward to the session
    Command(Command),
    /// Leave the game loop without asking the session
    Quit,
}

/// Map a key event to an action; releases and unbound keys map to `None`
pub fn map_key(key: KeyEvent) -> Option<KeyAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(KeyAction::Quit),
            _ => None,
        };
    }

    let command = match key.code {
        KeyCode::Char('w') | KeyCode::Char('W') => Command::MoveUp(Side::Left),
        KeyCode::Char('s') | KeyCode::Char('S') => Command::MoveDown(Side::Left),
        KeyCode::Up => Command::MoveUp(Side::Right),
        KeyCode::Down => Command::MoveDown(Side::Right),
        KeyCode::Char(' ') => Command::Restart,
        KeyCode::Esc => Command::Exit,
        KeyCode::Char('q') => return Some(KeyAction::Quit),
        _ => return None,
    };
    Some(KeyAction::Command(command))
}
