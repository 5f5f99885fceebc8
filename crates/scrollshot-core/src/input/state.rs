//! Shared pressed-key transition tracker.
//!
//! Both the live combination matcher and the interactive recorder consume
//! the raw key-transition stream through this one tracker rather than
//! keeping independent copies of the bookkeeping.

use std::collections::HashSet;

use crate::input::KeyCode;

/// Set of currently-down virtual keys, rebuilt from transition events.
///
/// Pressing a sided Shift/Ctrl/Alt variant also inserts the generic family
/// code; releasing the sided variant removes both. The WIN family has no
/// generic code and is tracked per side only.
#[derive(Debug, Default)]
pub struct PressedKeys {
    down: HashSet<KeyCode>,
}

impl PressedKeys {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down transition.
    ///
    /// Returns `true` if the key was not already down (auto-repeat and
    /// duplicate hook deliveries report `false`).
    pub fn press(&mut self, key: KeyCode) -> bool {
        let newly_pressed = self.down.insert(key);
        match key {
            KeyCode::ShiftLeft | KeyCode::ShiftRight => {
                self.down.insert(KeyCode::Shift);
            }
            KeyCode::ControlLeft | KeyCode::ControlRight => {
                self.down.insert(KeyCode::Control);
            }
            KeyCode::AltLeft | KeyCode::AltRight => {
                self.down.insert(KeyCode::Alt);
            }
            _ => {}
        }
        newly_pressed
    }

    /// Record a key-up transition.
    ///
    /// Releasing a sided variant clears the generic family code as well,
    /// even if the other side is still held.
    pub fn release(&mut self, key: KeyCode) {
        self.down.remove(&key);
        match key {
            KeyCode::ShiftLeft | KeyCode::ShiftRight => {
                self.down.remove(&KeyCode::Shift);
            }
            KeyCode::ControlLeft | KeyCode::ControlRight => {
                self.down.remove(&KeyCode::Control);
            }
            KeyCode::AltLeft | KeyCode::AltRight => {
                self.down.remove(&KeyCode::Alt);
            }
            _ => {}
        }
    }

    /// Whether a specific key is currently down.
    pub fn is_down(&self, key: KeyCode) -> bool {
        self.down.contains(&key)
    }

    /// Whether no key is currently down.
    pub fn none_down(&self) -> bool {
        self.down.is_empty()
    }

    /// Forget all tracked keys.
    pub fn clear(&mut self) {
        self.down.clear();
    }

    /// Whether either WIN key is down.
    pub fn win_down(&self) -> bool {
        self.is_down(KeyCode::MetaLeft) || self.is_down(KeyCode::MetaRight)
    }

    /// Whether any Ctrl variant is down.
    pub fn ctrl_down(&self) -> bool {
        self.is_down(KeyCode::Control)
            || self.is_down(KeyCode::ControlLeft)
            || self.is_down(KeyCode::ControlRight)
    }

    /// Whether any Alt variant is down.
    pub fn alt_down(&self) -> bool {
        self.is_down(KeyCode::Alt)
            || self.is_down(KeyCode::AltLeft)
            || self.is_down(KeyCode::AltRight)
    }

    /// Whether any Shift variant is down.
    pub fn shift_down(&self) -> bool {
        self.is_down(KeyCode::Shift)
            || self.is_down(KeyCode::ShiftLeft)
            || self.is_down(KeyCode::ShiftRight)
    }
}
