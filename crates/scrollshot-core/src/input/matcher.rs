//! Edge-triggered combination matching over the raw key-transition stream.
//!
//! Low-level hooks deliver uncoalesced events: a single physical hold of a
//! combination produces auto-repeat key-downs and arbitrary unrelated key
//! chatter. The matcher latches on the first satisfying key-down and stays
//! silent until the primary key or any modifier is released.

use tracing::debug;

use crate::input::{CombinationSpec, KeyCode, PressedKeys, ShiftMode};

/// Matches a [`CombinationSpec`] against live key transitions.
///
/// [`CombinationMatcher::on_key`] must be fed every key event in arrival
/// order from a single thread; the hook delivery mechanism serializes
/// events, so no further locking is needed.
#[derive(Debug)]
pub struct CombinationMatcher {
    spec: CombinationSpec,
    keys: PressedKeys,
    latched: bool,
}

impl CombinationMatcher {
    /// Create a matcher for the given combination.
    pub fn new(spec: CombinationSpec) -> Self {
        Self {
            spec,
            keys: PressedKeys::new(),
            latched: false,
        }
    }

    /// The combination currently being matched.
    pub fn spec(&self) -> &CombinationSpec {
        &self.spec
    }

    /// Atomically replace the active combination.
    ///
    /// Clears the key tracker and the latch: a stale partial combination
    /// under the old spec is meaningless under the new one.
    pub fn set_spec(&mut self, spec: CombinationSpec) {
        self.spec = spec;
        self.keys.clear();
        self.latched = false;
    }

    /// Consume one key transition; returns `true` on the activation edge.
    ///
    /// Activation fires at most once per continuous hold. Releasing the
    /// primary key or any modifier re-arms the trigger, even while other
    /// required keys stay held; full release is not required.
    pub fn on_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if pressed {
            self.keys.press(key);
            if self.latched {
                return false;
            }
            if self.satisfied() {
                self.latched = true;
                debug!(combination = %self.spec.describe(), "Combination activated");
                return true;
            }
            false
        } else {
            self.keys.release(key);
            if key.is_modifier() || key == self.spec.primary {
                self.latched = false;
            }
            false
        }
    }

    fn satisfied(&self) -> bool {
        let primary_down = self.keys.is_down(self.spec.primary);
        let win_ok = !self.spec.require_win || self.keys.win_down();
        let ctrl_ok = !self.spec.require_ctrl || self.keys.ctrl_down();
        let alt_ok = !self.spec.require_alt || self.keys.alt_down();

        let mut shift_ok = true;
        if self.spec.require_shift {
            shift_ok = self.keys.shift_down();
        }
        match self.spec.shift_mode {
            ShiftMode::LeftOnly => shift_ok = self.keys.is_down(KeyCode::ShiftLeft),
            ShiftMode::RightOnly => shift_ok = self.keys.is_down(KeyCode::ShiftRight),
            ShiftMode::Any => {}
        }

        primary_down && win_ok && ctrl_ok && alt_ok && shift_ok
    }
}
