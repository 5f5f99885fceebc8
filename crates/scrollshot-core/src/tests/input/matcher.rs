use crate::{CombinationMatcher, CombinationSpec, KeyCode, ShiftMode};

fn win_right_shift_x() -> CombinationSpec {
    CombinationSpec {
        primary: KeyCode::Char('X'),
        require_win: true,
        require_ctrl: false,
        require_alt: false,
        require_shift: false,
        shift_mode: ShiftMode::RightOnly,
    }
}

/// WHAT: Full combination activates exactly once per continuous hold
/// WHY: The latch must suppress auto-repeat and duplicate key-downs
#[test]
fn given_full_combination_when_primary_repeats_then_activates_once() {
    // Given: Win + right-only Shift + X
    let mut matcher = CombinationMatcher::new(win_right_shift_x());

    // When: pressing Win, right Shift, then X
    assert!(!matcher.on_key(KeyCode::MetaLeft, true));
    assert!(!matcher.on_key(KeyCode::ShiftRight, true));
    assert!(matcher.on_key(KeyCode::Char('X'), true));

    // Then: auto-repeat of the primary while held does not re-fire
    assert!(!matcher.on_key(KeyCode::Char('X'), true));
    assert!(!matcher.on_key(KeyCode::Char('X'), true));
}

/// WHAT: Releasing and re-pressing the primary re-activates
/// WHY: The latch re-arms on primary release while modifiers stay held
#[test]
fn given_latched_combination_when_primary_cycled_then_reactivates() {
    let mut matcher = CombinationMatcher::new(win_right_shift_x());

    matcher.on_key(KeyCode::MetaLeft, true);
    matcher.on_key(KeyCode::ShiftRight, true);
    assert!(matcher.on_key(KeyCode::Char('X'), true));

    // When: releasing only the primary, modifiers still down
    assert!(!matcher.on_key(KeyCode::Char('X'), false));

    // Then: the next primary press fires again
    assert!(matcher.on_key(KeyCode::Char('X'), true));
}

/// WHAT: Releasing any modifier re-arms the trigger mid-hold
/// WHY: Partial release intentionally re-arms; full release is not required
#[test]
fn given_latched_combination_when_modifier_cycled_then_reactivates() {
    let mut matcher = CombinationMatcher::new(win_right_shift_x());

    matcher.on_key(KeyCode::MetaLeft, true);
    matcher.on_key(KeyCode::ShiftRight, true);
    assert!(matcher.on_key(KeyCode::Char('X'), true));

    // When: cycling Win while Shift and the primary stay held
    assert!(!matcher.on_key(KeyCode::MetaLeft, false));
    // Re-press: all clauses hold again on this key-down
    assert!(matcher.on_key(KeyCode::MetaLeft, true));
}

/// WHAT: Activation is independent of key-press ordering
/// WHY: Users press chord members in arbitrary order
#[test]
fn given_primary_pressed_first_when_modifiers_follow_then_activates() {
    let mut matcher = CombinationMatcher::new(win_right_shift_x());

    assert!(!matcher.on_key(KeyCode::Char('X'), true));
    assert!(!matcher.on_key(KeyCode::ShiftRight, true));

    // Then: the last missing clause completes the combination
    assert!(matcher.on_key(KeyCode::MetaRight, true));
}

/// WHAT: Left Shift never satisfies a right-only spec
/// WHY: Sided shift modes must ignore the opposite shift key
#[test]
fn given_right_only_spec_when_left_shift_used_then_never_activates() {
    let mut matcher = CombinationMatcher::new(win_right_shift_x());

    assert!(!matcher.on_key(KeyCode::ShiftLeft, true));
    assert!(!matcher.on_key(KeyCode::MetaLeft, true));
    assert!(!matcher.on_key(KeyCode::Char('X'), true));

    // Then: not even repeated presses in other orders activate
    assert!(!matcher.on_key(KeyCode::Char('X'), false));
    assert!(!matcher.on_key(KeyCode::Char('X'), true));
}

/// WHAT: Either shift satisfies a plain shift requirement
/// WHY: require_shift without a sided mode accepts both shift keys
#[test]
fn given_any_shift_requirement_when_left_shift_used_then_activates() {
    let spec = CombinationSpec {
        primary: KeyCode::Char('C'),
        require_win: false,
        require_ctrl: true,
        require_alt: false,
        require_shift: true,
        shift_mode: ShiftMode::Any,
    };
    let mut matcher = CombinationMatcher::new(spec);

    assert!(!matcher.on_key(KeyCode::ControlLeft, true));
    assert!(!matcher.on_key(KeyCode::ShiftLeft, true));
    assert!(matcher.on_key(KeyCode::Char('C'), true));
}

/// WHAT: Unrelated key chatter does not clear the latch
/// WHY: Only the primary key and modifiers participate in re-arming
#[test]
fn given_latched_combination_when_unrelated_keys_cycle_then_latch_holds() {
    let mut matcher = CombinationMatcher::new(win_right_shift_x());

    matcher.on_key(KeyCode::MetaLeft, true);
    matcher.on_key(KeyCode::ShiftRight, true);
    assert!(matcher.on_key(KeyCode::Char('X'), true));

    // When: chatter from an unrelated key
    assert!(!matcher.on_key(KeyCode::Char('Q'), true));
    assert!(!matcher.on_key(KeyCode::Char('Q'), false));

    // Then: the primary auto-repeat still does not re-fire
    assert!(!matcher.on_key(KeyCode::Char('X'), true));
}

/// WHAT: set_spec clears tracked keys and the latch
/// WHY: A stale partial combination is meaningless under a new spec
#[test]
fn given_held_combination_when_spec_replaced_then_tracking_restarts() {
    let mut matcher = CombinationMatcher::new(win_right_shift_x());

    matcher.on_key(KeyCode::MetaLeft, true);
    matcher.on_key(KeyCode::ShiftRight, true);
    assert!(matcher.on_key(KeyCode::Char('X'), true));

    // When: replacing the spec mid-hold
    matcher.set_spec(win_right_shift_x());

    // Then: the still-held modifiers are forgotten; the primary alone
    // cannot satisfy the fresh state
    assert!(!matcher.on_key(KeyCode::Char('X'), true));
}

/// WHAT: A shift key works as the primary of a sided-shift spec
/// WHY: The primary satisfies the shift clause on its own
#[test]
fn given_shift_primary_spec_when_pressed_then_activates() {
    // Given: the default Win + Right Shift binding
    let mut matcher = CombinationMatcher::new(CombinationSpec::default());

    assert!(!matcher.on_key(KeyCode::MetaLeft, true));
    assert!(matcher.on_key(KeyCode::ShiftRight, true));

    // Then: releasing and re-pressing the shift primary re-activates
    assert!(!matcher.on_key(KeyCode::ShiftRight, false));
    assert!(matcher.on_key(KeyCode::ShiftRight, true));
}
