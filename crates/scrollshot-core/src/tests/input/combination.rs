use crate::{CombinationSpec, KeyCode, ShiftMode};

/// WHAT: The default binding is Win + Right Shift
/// WHY: It is the safe fallback when configuration is unusable
#[test]
fn given_default_spec_when_described_then_win_right_shift() {
    let spec = CombinationSpec::default();

    assert_eq!(spec.primary, KeyCode::ShiftRight);
    assert!(spec.require_win);
    assert_eq!(spec.shift_mode, ShiftMode::RightOnly);
    assert_eq!(spec.describe(), "Win + Right Shift");
}

/// WHAT: Descriptions list modifiers before the primary key
/// WHY: Status text must read like a conventional shortcut
#[test]
fn given_ctrl_shift_f5_when_described_then_conventional_order() {
    let spec = CombinationSpec {
        primary: KeyCode::Function(5),
        require_win: false,
        require_ctrl: true,
        require_alt: false,
        require_shift: true,
        shift_mode: ShiftMode::Any,
    };

    assert_eq!(spec.describe(), "Ctrl + Shift + F5");
}

/// WHAT: A sided shift mode names the side even without require_shift
/// WHY: Sided modes imply the requirement
#[test]
fn given_left_only_mode_when_described_then_left_shift_named() {
    let spec = CombinationSpec {
        primary: KeyCode::Char('D'),
        require_win: true,
        require_ctrl: false,
        require_alt: false,
        require_shift: false,
        shift_mode: ShiftMode::LeftOnly,
    };

    assert_eq!(spec.describe(), "Win + Left Shift + D");
}

/// WHAT: A shift primary is not repeated as a shift requirement
/// WHY: "Right Shift + Right Shift" would be nonsense
#[test]
fn given_shift_primary_when_described_then_named_once() {
    let spec = CombinationSpec {
        primary: KeyCode::ShiftLeft,
        require_win: false,
        require_ctrl: true,
        require_alt: false,
        require_shift: true,
        shift_mode: ShiftMode::LeftOnly,
    };

    assert_eq!(spec.describe(), "Ctrl + Left Shift");
}

/// WHAT: Shift-mode tokens parse leniently
/// WHY: Unknown values fall back to accepting either shift
#[test]
fn given_mode_tokens_when_parsed_then_lenient() {
    assert_eq!(ShiftMode::parse("LeftOnly"), ShiftMode::LeftOnly);
    assert_eq!(ShiftMode::parse("rightonly"), ShiftMode::RightOnly);
    assert_eq!(ShiftMode::parse("Any"), ShiftMode::Any);
    assert_eq!(ShiftMode::parse("garbage"), ShiftMode::Any);

    assert_eq!(ShiftMode::LeftOnly.as_str(), "LeftOnly");
}
