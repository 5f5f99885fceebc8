use std::str::FromStr;

use scrollshot_core::{CombinationSpec, KeyCode, ShiftMode};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Trigger combination settings as stored on disk.
///
/// Keys are kept as string tokens so a hand-edited file stays readable;
/// conversion to a [`CombinationSpec`] is lenient and falls back to the
/// default binding rather than refusing to run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotkeyConfig {
    /// Token for the combination's primary key (e.g. `RightShift`, `F5`).
    #[serde(default = "default_primary_key")]
    pub primary_key: String,
    /// Require either WIN key.
    #[serde(default = "default_require_win")]
    pub require_win: bool,
    /// Require any Ctrl variant.
    #[serde(default)]
    pub require_ctrl: bool,
    /// Require any Alt variant.
    #[serde(default)]
    pub require_alt: bool,
    /// Require any Shift variant (subject to `shift_mode`).
    #[serde(default)]
    pub require_shift: bool,
    /// `Any`, `LeftOnly`, or `RightOnly`.
    #[serde(default = "default_shift_mode")]
    pub shift_mode: String,
}

fn default_primary_key() -> String {
    CombinationSpec::default().primary.to_string()
}

fn default_require_win() -> bool {
    CombinationSpec::default().require_win
}

fn default_shift_mode() -> String {
    CombinationSpec::default().shift_mode.as_str().to_string()
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        let mut config = Self {
            primary_key: String::new(),
            require_win: false,
            require_ctrl: false,
            require_alt: false,
            require_shift: false,
            shift_mode: String::new(),
        };
        config.set_combination(&CombinationSpec::default());
        config
    }
}

impl HotkeyConfig {
    /// Resolve the stored tokens into a [`CombinationSpec`].
    ///
    /// An unparseable primary key falls back to the default binding with
    /// a warning; an unknown shift mode falls back to `Any`.
    pub fn combination(&self) -> CombinationSpec {
        let primary = match KeyCode::from_str(&self.primary_key) {
            Ok(key) => key,
            Err(e) => {
                warn!(
                    error = %e,
                    fallback = %CombinationSpec::default().describe(),
                    "Unusable primary key in configuration, using default binding"
                );
                return CombinationSpec::default();
            }
        };

        CombinationSpec {
            primary,
            require_win: self.require_win,
            require_ctrl: self.require_ctrl,
            require_alt: self.require_alt,
            require_shift: self.require_shift,
            shift_mode: ShiftMode::parse(&self.shift_mode),
        }
    }

    /// Store a combination back into config tokens.
    pub fn set_combination(&mut self, spec: &CombinationSpec) {
        self.primary_key = spec.primary.to_string();
        self.require_win = spec.require_win;
        self.require_ctrl = spec.require_ctrl;
        self.require_alt = spec.require_alt;
        self.require_shift = spec.require_shift;
        self.shift_mode = spec.shift_mode.as_str().to_string();
    }
}
