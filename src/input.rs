//! Keyboard state polled by the simulation, and the terminal key mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Keys the simulation polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Jump,
}

/// Anything that can answer "is this key held right now".
pub trait InputSource {
    fn is_key_down(&self, key: Key) -> bool;
}

/// Snapshot of held keys for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub jump: bool,
}

impl KeyState {
    pub fn jumping() -> Self {
        Self { jump: true }
    }
}

impl InputSource for KeyState {
    fn is_key_down(&self, key: Key) -> bool {
        match key {
            Key::Jump => self.jump,
        }
    }
}

/// What the host should do with a terminal key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    /// Space, Up, or Enter.
    Jump,
    /// Esc, `q`, or Ctrl-C.
    Quit,
    None,
}

/// Map a crossterm key event to a host action.
///
/// Terminals do not report key-up, so every press or auto-repeat seen during a
/// frame counts as the key being held for that frame.
pub fn map_key(key: KeyEvent) -> HostAction {
    if key.kind == KeyEventKind::Release {
        return HostAction::None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => HostAction::Quit,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => HostAction::Jump,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => HostAction::Quit,
        _ => HostAction::None,
    }
}
