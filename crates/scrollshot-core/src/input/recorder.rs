//! Interactive combination recording.
//!
//! Lets a user define a new [`CombinationSpec`] by pressing and releasing
//! the desired chord once. Reuses the shared [`PressedKeys`] tracker the
//! live matcher is built on; only the per-gesture bookkeeping differs.

use tracing::{debug, info};

use crate::input::{CombinationSpec, KeyCode, PressedKeys, ShiftMode};

/// Records one demonstration gesture into a [`CombinationSpec`].
///
/// The first non-core-modifier key pressed becomes the candidate primary
/// key. A shift key may hold that slot, but a later non-shift key press
/// takes it over, so a gesture may start from Shift and settle on another
/// primary. Modifier families are marked "used" the moment each side is
/// first pressed. The gesture completes when every key has been released
/// and the candidate itself was released at least once.
#[derive(Debug, Default)]
pub struct CombinationRecorder {
    pressed: PressedKeys,
    candidate: Option<KeyCode>,
    primary_released: bool,
    used_win_left: bool,
    used_win_right: bool,
    used_ctrl_left: bool,
    used_ctrl_right: bool,
    used_alt_left: bool,
    used_alt_right: bool,
    used_shift_left: bool,
    used_shift_right: bool,
}

impl CombinationRecorder {
    /// Create a recorder awaiting a fresh gesture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all progress and await a fresh gesture.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Consume one key transition.
    ///
    /// Returns the recorded combination once the gesture completes; a
    /// gesture that never produced a valid candidate keeps recording.
    pub fn on_key(&mut self, key: KeyCode, pressed: bool) -> Option<CombinationSpec> {
        if pressed {
            self.handle_key_down(key);
            return None;
        }

        self.pressed.release(key);
        if Some(key) == self.candidate {
            self.primary_released = true;
        }

        if self.pressed.none_down() && self.primary_released {
            if let Some(primary) = self.candidate {
                return self.finish(primary);
            }
        }
        None
    }

    fn handle_key_down(&mut self, key: KeyCode) {
        // Auto-repeat: only the first down of a key updates the gesture.
        if !self.pressed.press(key) {
            return;
        }

        match key {
            KeyCode::MetaLeft => self.used_win_left = true,
            KeyCode::MetaRight => self.used_win_right = true,
            KeyCode::ControlLeft => self.used_ctrl_left = true,
            KeyCode::ControlRight => self.used_ctrl_right = true,
            KeyCode::AltLeft => self.used_alt_left = true,
            KeyCode::AltRight => self.used_alt_right = true,
            KeyCode::Alt => {
                self.used_alt_left = true;
                self.used_alt_right = true;
            }
            _ => {}
        }

        if key == KeyCode::ShiftLeft {
            self.used_shift_left = true;
        } else if key == KeyCode::ShiftRight {
            self.used_shift_right = true;
        }

        if !key.is_core_modifier() {
            match self.candidate {
                None => {
                    self.candidate = Some(key);
                    self.primary_released = false;
                }
                // A shift placeholder yields to the first real primary key.
                Some(current) if current.is_shift() && !key.is_shift() => {
                    self.candidate = Some(key);
                    self.primary_released = false;
                }
                Some(_) => {}
            }
            debug!(candidate = ?self.candidate, "Recorder candidate updated");
        }
    }

    fn finish(&mut self, primary: KeyCode) -> Option<CombinationSpec> {
        if primary.is_core_modifier() {
            self.reset();
            return None;
        }

        let shift_used = self.used_shift_left || self.used_shift_right;
        let shift_mode = if !shift_used {
            ShiftMode::Any
        } else if self.used_shift_left && !self.used_shift_right {
            ShiftMode::LeftOnly
        } else if self.used_shift_right && !self.used_shift_left {
            ShiftMode::RightOnly
        } else {
            ShiftMode::Any
        };

        let spec = CombinationSpec {
            primary,
            require_win: self.used_win_left || self.used_win_right,
            require_ctrl: self.used_ctrl_left || self.used_ctrl_right,
            require_alt: self.used_alt_left || self.used_alt_right,
            require_shift: shift_used && !primary.is_shift(),
            shift_mode,
        };

        info!(combination = %spec.describe(), "Combination recorded");
        self.reset();
        Some(spec)
    }
}
