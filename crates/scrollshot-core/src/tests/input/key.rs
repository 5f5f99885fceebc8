use crate::KeyCode;

use std::str::FromStr;

/// WHAT: Configuration tokens round-trip through Display and FromStr
/// WHY: Saved bindings must load back as the same keys
#[test]
#[allow(clippy::unwrap_used)]
fn given_representative_keys_when_round_tripped_then_unchanged() {
    let keys = [
        KeyCode::ShiftRight,
        KeyCode::ControlLeft,
        KeyCode::AltRight,
        KeyCode::MetaLeft,
        KeyCode::Char('X'),
        KeyCode::Char('7'),
        KeyCode::Function(12),
        KeyCode::Space,
        KeyCode::PageUp,
        KeyCode::Numpad(4),
        KeyCode::KpPlus,
        KeyCode::Unknown(0x2F),
    ];

    for key in keys {
        let token = key.to_string();
        assert_eq!(KeyCode::from_str(&token).unwrap(), key, "token {token}");
    }
}

/// WHAT: Parsing is case-insensitive and trims whitespace
/// WHY: Hand-edited configuration files should be forgiving
#[test]
#[allow(clippy::unwrap_used)]
fn given_sloppy_tokens_when_parsed_then_recognized() {
    assert_eq!(
        KeyCode::from_str(" rightshift ").unwrap(),
        KeyCode::ShiftRight
    );
    assert_eq!(KeyCode::from_str("f3").unwrap(), KeyCode::Function(3));
    assert_eq!(KeyCode::from_str("x").unwrap(), KeyCode::Char('X'));
    assert_eq!(KeyCode::from_str("numpad9").unwrap(), KeyCode::Numpad(9));
    assert_eq!(KeyCode::from_str("0x2f").unwrap(), KeyCode::Unknown(0x2F));
}

/// WHAT: Unrecognized tokens are rejected
/// WHY: The caller decides the fallback, not the parser
#[test]
fn given_unknown_token_when_parsed_then_error() {
    assert!(KeyCode::from_str("NotAKey").is_err());
    assert!(KeyCode::from_str("F99").is_err());
    assert!(KeyCode::from_str("").is_err());
}

/// WHAT: Modifier classification separates shift from the core families
/// WHY: Shift may be a primary key; WIN/CTRL/ALT may not
#[test]
fn given_modifier_keys_when_classified_then_families_distinguished() {
    assert!(KeyCode::ShiftLeft.is_shift());
    assert!(KeyCode::ShiftLeft.is_modifier());
    assert!(!KeyCode::ShiftLeft.is_core_modifier());

    assert!(KeyCode::ControlRight.is_core_modifier());
    assert!(KeyCode::ControlRight.is_modifier());
    assert!(!KeyCode::ControlRight.is_shift());

    assert!(KeyCode::MetaRight.is_core_modifier());

    assert!(!KeyCode::Char('A').is_modifier());
    assert!(!KeyCode::Function(1).is_modifier());
}
