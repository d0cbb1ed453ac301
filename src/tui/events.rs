use crate::error::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::collections::VecDeque;

/// Logical navigation event produced by a single key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    Up,
    Down,
    Confirm,
    Cancel,
}

/// Blocking source of navigation events.
pub trait KeySource {
    /// Wait for the next key press. `None` means the key has no meaning here.
    fn next_event(&mut self) -> Result<Option<NavEvent>>;
}

pub fn map_key(key: KeyEvent) -> Option<NavEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Up => Some(NavEvent::Up),
        KeyCode::Down => Some(NavEvent::Down),
        KeyCode::Enter => Some(NavEvent::Confirm),
        KeyCode::Esc => Some(NavEvent::Cancel),
        _ => None,
    }
}

/// Reads key presses from the real terminal.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_event(&mut self) -> Result<Option<NavEvent>> {
        match event::read()? {
            Event::Key(key) => Ok(map_key(key)),
            _ => Ok(None),
        }
    }
}

/// Replays a fixed list of key results, for driving menus without a terminal.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    queue: VecDeque<Option<NavEvent>>,
}

impl ScriptedKeys {
    pub fn new(events: impl IntoIterator<Item = NavEvent>) -> Self {
        Self {
            queue: events.into_iter().map(Some).collect(),
        }
    }

    /// Insert an unrecognized key press at the end of the script.
    pub fn unknown(mut self) -> Self {
        self.queue.push_back(None);
        self
    }

    pub fn then(mut self, event: NavEvent) -> Self {
        self.queue.push_back(Some(event));
        self
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_event(&mut self) -> Result<Option<NavEvent>> {
        self.queue.pop_front().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "key script exhausted").into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)
    }

    #[test]
    fn test_arrow_enter_escape_are_mapped() {
        assert_eq!(map_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)), Some(NavEvent::Up));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)),
            Some(NavEvent::Down)
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            Some(NavEvent::Confirm)
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Some(NavEvent::Cancel)
        );
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(map_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)), None);
        assert_eq!(map_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)), None);
        assert_eq!(map_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_release_and_repeat_are_ignored() {
        assert_eq!(map_key(key(KeyCode::Enter, KeyEventKind::Release)), None);
        assert_eq!(map_key(key(KeyCode::Down, KeyEventKind::Repeat)), None);
    }

    #[test]
    fn test_scripted_keys_run_out() {
        let mut keys = ScriptedKeys::new([NavEvent::Down]).unknown();
        assert_eq!(keys.next_event().unwrap(), Some(NavEvent::Down));
        assert_eq!(keys.next_event().unwrap(), None);
        assert_eq!(keys.remaining(), 0);
        assert!(keys.next_event().is_err());
    }
}
