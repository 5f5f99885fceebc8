//! Platform-neutral virtual key model.
//!
//! Sided modifier variants coexist with the generic family codes that the
//! hook stream synthesizes for Shift/Ctrl/Alt. The WIN family has no
//! generic code and is always matched through its sided variants.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// A virtual key as seen by the low-level input hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Generic Shift family code.
    Shift,
    /// Left Shift.
    ShiftLeft,
    /// Right Shift.
    ShiftRight,
    /// Generic Ctrl family code.
    Control,
    /// Left Ctrl.
    ControlLeft,
    /// Right Ctrl.
    ControlRight,
    /// Generic Alt family code.
    Alt,
    /// Left Alt.
    AltLeft,
    /// Right Alt.
    AltRight,
    /// Left Windows/Super key.
    MetaLeft,
    /// Right Windows/Super key.
    MetaRight,
    /// Printable letter or digit key, stored as its uppercase character.
    Char(char),
    /// Function key F1 through F24, stored as its one-based index.
    Function(u8),
    /// Space bar.
    Space,
    /// Enter/Return.
    Enter,
    /// Tab.
    Tab,
    /// Backspace.
    Backspace,
    /// Escape.
    Escape,
    /// Caps Lock.
    CapsLock,
    /// Pause/Break.
    Pause,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Home.
    Home,
    /// End.
    End,
    /// Insert.
    Insert,
    /// Delete.
    Delete,
    /// Up arrow.
    UpArrow,
    /// Down arrow.
    DownArrow,
    /// Left arrow.
    LeftArrow,
    /// Right arrow.
    RightArrow,
    /// Numeric keypad digit, stored as its value (0–9).
    Numpad(u8),
    /// Numeric keypad multiply.
    KpMultiply,
    /// Numeric keypad add.
    KpPlus,
    /// Numeric keypad subtract.
    KpMinus,
    /// Raw key code the hook delivered but the key model does not name.
    Unknown(u32),
}

impl KeyCode {
    /// Whether this key belongs to the Shift family (generic or sided).
    pub fn is_shift(&self) -> bool {
        matches!(self, Self::Shift | Self::ShiftLeft | Self::ShiftRight)
    }

    /// Whether this key is a WIN/CTRL/ALT modifier (generic or sided).
    ///
    /// Shift is excluded: a shift key may serve as a combination's
    /// primary key, the other modifier families may not.
    pub fn is_core_modifier(&self) -> bool {
        matches!(
            self,
            Self::Control
                | Self::ControlLeft
                | Self::ControlRight
                | Self::Alt
                | Self::AltLeft
                | Self::AltRight
                | Self::MetaLeft
                | Self::MetaRight
        )
    }

    /// Whether this key is any modifier, including the Shift family.
    pub fn is_modifier(&self) -> bool {
        self.is_shift() || self.is_core_modifier()
    }

    /// Human-readable name for status text, e.g. `Right Shift`.
    pub fn label(&self) -> String {
        match self {
            Self::Shift => "Shift".to_string(),
            Self::ShiftLeft => "Left Shift".to_string(),
            Self::ShiftRight => "Right Shift".to_string(),
            Self::Control => "Ctrl".to_string(),
            Self::ControlLeft => "Left Ctrl".to_string(),
            Self::ControlRight => "Right Ctrl".to_string(),
            Self::Alt => "Alt".to_string(),
            Self::AltLeft => "Left Alt".to_string(),
            Self::AltRight => "Right Alt".to_string(),
            Self::MetaLeft | Self::MetaRight => "Win".to_string(),
            Self::Char(c) => c.to_string(),
            Self::Function(n) => format!("F{}", n),
            Self::Space => "Space".to_string(),
            Self::Enter => "Enter".to_string(),
            Self::Tab => "Tab".to_string(),
            Self::Backspace => "Backspace".to_string(),
            Self::Escape => "Escape".to_string(),
            Self::CapsLock => "Caps Lock".to_string(),
            Self::Pause => "Pause".to_string(),
            Self::PageUp => "Page Up".to_string(),
            Self::PageDown => "Page Down".to_string(),
            Self::Home => "Home".to_string(),
            Self::End => "End".to_string(),
            Self::Insert => "Insert".to_string(),
            Self::Delete => "Delete".to_string(),
            Self::UpArrow => "Up".to_string(),
            Self::DownArrow => "Down".to_string(),
            Self::LeftArrow => "Left".to_string(),
            Self::RightArrow => "Right".to_string(),
            Self::Numpad(n) => format!("Numpad {}", n),
            Self::KpMultiply => "Numpad *".to_string(),
            Self::KpPlus => "Numpad +".to_string(),
            Self::KpMinus => "Numpad -".to_string(),
            Self::Unknown(code) => format!("{:#X}", code),
        }
    }
}

impl fmt::Display for KeyCode {
    /// Configuration token for this key, e.g. `RightShift` or `F3`.
    ///
    /// Round-trips through [`KeyCode::from_str`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shift => write!(f, "Shift"),
            Self::ShiftLeft => write!(f, "LeftShift"),
            Self::ShiftRight => write!(f, "RightShift"),
            Self::Control => write!(f, "Ctrl"),
            Self::ControlLeft => write!(f, "LeftCtrl"),
            Self::ControlRight => write!(f, "RightCtrl"),
            Self::Alt => write!(f, "Alt"),
            Self::AltLeft => write!(f, "LeftAlt"),
            Self::AltRight => write!(f, "RightAlt"),
            Self::MetaLeft => write!(f, "LeftWin"),
            Self::MetaRight => write!(f, "RightWin"),
            Self::Char(c) => write!(f, "{}", c),
            Self::Function(n) => write!(f, "F{}", n),
            Self::Space => write!(f, "Space"),
            Self::Enter => write!(f, "Enter"),
            Self::Tab => write!(f, "Tab"),
            Self::Backspace => write!(f, "Backspace"),
            Self::Escape => write!(f, "Escape"),
            Self::CapsLock => write!(f, "CapsLock"),
            Self::Pause => write!(f, "Pause"),
            Self::PageUp => write!(f, "PageUp"),
            Self::PageDown => write!(f, "PageDown"),
            Self::Home => write!(f, "Home"),
            Self::End => write!(f, "End"),
            Self::Insert => write!(f, "Insert"),
            Self::Delete => write!(f, "Delete"),
            Self::UpArrow => write!(f, "Up"),
            Self::DownArrow => write!(f, "Down"),
            Self::LeftArrow => write!(f, "Left"),
            Self::RightArrow => write!(f, "Right"),
            Self::Numpad(n) => write!(f, "Numpad{}", n),
            Self::KpMultiply => write!(f, "NumpadMultiply"),
            Self::KpPlus => write!(f, "NumpadAdd"),
            Self::KpMinus => write!(f, "NumpadSubtract"),
            Self::Unknown(code) => write!(f, "{:#X}", code),
        }
    }
}

/// Error returned when a configuration token names no known key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognized key token: {token}")]
pub struct ParseKeyError {
    /// The token that failed to parse.
    pub token: String,
}

impl FromStr for KeyCode {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let lower = token.to_ascii_lowercase();

        let named = match lower.as_str() {
            "shift" => Some(Self::Shift),
            "leftshift" => Some(Self::ShiftLeft),
            "rightshift" => Some(Self::ShiftRight),
            "ctrl" => Some(Self::Control),
            "leftctrl" => Some(Self::ControlLeft),
            "rightctrl" => Some(Self::ControlRight),
            "alt" => Some(Self::Alt),
            "leftalt" => Some(Self::AltLeft),
            "rightalt" => Some(Self::AltRight),
            "win" | "leftwin" => Some(Self::MetaLeft),
            "rightwin" => Some(Self::MetaRight),
            "space" => Some(Self::Space),
            "enter" => Some(Self::Enter),
            "tab" => Some(Self::Tab),
            "backspace" => Some(Self::Backspace),
            "escape" => Some(Self::Escape),
            "capslock" => Some(Self::CapsLock),
            "pause" => Some(Self::Pause),
            "pageup" => Some(Self::PageUp),
            "pagedown" => Some(Self::PageDown),
            "home" => Some(Self::Home),
            "end" => Some(Self::End),
            "insert" => Some(Self::Insert),
            "delete" => Some(Self::Delete),
            "up" => Some(Self::UpArrow),
            "down" => Some(Self::DownArrow),
            "left" => Some(Self::LeftArrow),
            "right" => Some(Self::RightArrow),
            "numpadmultiply" => Some(Self::KpMultiply),
            "numpadadd" => Some(Self::KpPlus),
            "numpadsubtract" => Some(Self::KpMinus),
            _ => None,
        };
        if let Some(key) = named {
            return Ok(key);
        }

        // Single printable letter or digit.
        if token.len() == 1 {
            if let Some(c) = token.chars().next() {
                if c.is_ascii_alphanumeric() {
                    return Ok(Self::Char(c.to_ascii_uppercase()));
                }
            }
        }

        // Function keys F1..F24.
        if let Some(rest) = lower.strip_prefix('f') {
            if let Ok(index) = rest.parse::<u8>() {
                if (1..=24).contains(&index) {
                    return Ok(Self::Function(index));
                }
            }
        }

        // Numpad digits.
        if let Some(rest) = lower.strip_prefix("numpad") {
            if let Ok(digit) = rest.parse::<u8>() {
                if digit <= 9 {
                    return Ok(Self::Numpad(digit));
                }
            }
        }

        // Raw hex code, e.g. "0x2F".
        if let Some(hex) = lower.strip_prefix("0x") {
            if let Ok(code) = u32::from_str_radix(hex, 16) {
                return Ok(Self::Unknown(code));
            }
        }

        Err(ParseKeyError {
            token: token.to_string(),
        })
    }
}
