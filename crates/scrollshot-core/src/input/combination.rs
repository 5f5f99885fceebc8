use crate::input::KeyCode;

/// How a Shift requirement is evaluated against the sided shift keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShiftMode {
    /// Either shift key satisfies the requirement.
    #[default]
    Any,
    /// Only the left shift key counts; the requirement is implied.
    LeftOnly,
    /// Only the right shift key counts; the requirement is implied.
    RightOnly,
}

impl ShiftMode {
    /// Parse a configuration value, defaulting to [`ShiftMode::Any`] for
    /// anything unrecognized.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "leftonly" => Self::LeftOnly,
            "rightonly" => Self::RightOnly,
            _ => Self::Any,
        }
    }

    /// Configuration token for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::LeftOnly => "LeftOnly",
            Self::RightOnly => "RightOnly",
        }
    }
}

/// A trigger combination: one primary key plus modifier requirements.
///
/// `shift_mode` overrides the plain `require_shift` flag whenever it is
/// not [`ShiftMode::Any`]: a sided mode demands that specific shift key
/// even when `require_shift` is false. When the primary key is itself a
/// shift key it satisfies the shift clause on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinationSpec {
    /// The non-modifier (or shift) key that completes the combination.
    pub primary: KeyCode,
    /// Require either WIN key to be held.
    pub require_win: bool,
    /// Require any Ctrl variant to be held.
    pub require_ctrl: bool,
    /// Require any Alt variant to be held.
    pub require_alt: bool,
    /// Require any Shift variant to be held (subject to `shift_mode`).
    pub require_shift: bool,
    /// Which shift keys count toward the shift requirement.
    pub shift_mode: ShiftMode,
}

impl Default for CombinationSpec {
    /// The safe fallback binding: Win + Right Shift.
    fn default() -> Self {
        Self {
            primary: KeyCode::ShiftRight,
            require_win: true,
            require_ctrl: false,
            require_alt: false,
            require_shift: false,
            shift_mode: ShiftMode::RightOnly,
        }
    }
}

impl CombinationSpec {
    /// Human-readable description, e.g. `Win + Right Shift` or
    /// `Ctrl + Shift + F5`.
    pub fn describe(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.require_win {
            parts.push("Win".to_string());
        }
        if self.require_ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.require_alt {
            parts.push("Alt".to_string());
        }

        // A shift primary names itself; a separate shift part would repeat it.
        let include_shift = match self.primary {
            KeyCode::ShiftLeft => {
                parts.push("Left Shift".to_string());
                false
            }
            KeyCode::ShiftRight => {
                parts.push("Right Shift".to_string());
                false
            }
            KeyCode::Shift => {
                parts.push("Shift".to_string());
                false
            }
            _ => self.require_shift || self.shift_mode != ShiftMode::Any,
        };

        if include_shift {
            let part = match self.shift_mode {
                ShiftMode::LeftOnly => "Left Shift",
                ShiftMode::RightOnly => "Right Shift",
                ShiftMode::Any => "Shift",
            };
            parts.push(part.to_string());
        }

        if !self.primary.is_shift() {
            parts.push(self.primary.label());
        }

        parts.join(" + ")
    }
}
