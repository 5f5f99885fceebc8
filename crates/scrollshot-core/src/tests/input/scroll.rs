use crate::ScrollAccumulator;

/// WHAT: Threshold crossing emits exactly one capture request
/// WHY: N downward ticks must map to one capture, never more
#[test]
fn given_threshold_three_when_three_down_ticks_then_fires_once() {
    let mut scroll = ScrollAccumulator::new(3);

    assert!(!scroll.on_wheel(-1));
    assert!(!scroll.on_wheel(-1));
    assert!(scroll.on_wheel(-1));

    // Then: the counter restarted; the next crossing needs three more
    assert!(!scroll.on_wheel(-1));
    assert!(!scroll.on_wheel(-1));
    assert!(scroll.on_wheel(-1));
}

/// WHAT: An upward tick discards accumulated progress
/// WHY: A reversed gesture must not count toward the next capture
#[test]
fn given_partial_progress_when_scrolled_up_then_progress_discarded() {
    let mut scroll = ScrollAccumulator::new(3);

    assert!(!scroll.on_wheel(-1));
    assert!(!scroll.on_wheel(-1));
    assert!(!scroll.on_wheel(1));

    // Then: exactly one request over the whole sequence -1,-1,+1,-1,-1,-1
    assert!(!scroll.on_wheel(-1));
    assert!(!scroll.on_wheel(-1));
    assert!(scroll.on_wheel(-1));
}

/// WHAT: Changing the threshold zeroes pending progress
/// WHY: Progress under the old threshold is meaningless under the new one
#[test]
fn given_partial_progress_when_threshold_changed_then_count_restarts() {
    let mut scroll = ScrollAccumulator::new(5);

    assert!(!scroll.on_wheel(-1));
    assert!(!scroll.on_wheel(-1));

    scroll.set_threshold(3);

    assert!(!scroll.on_wheel(-1));
    assert!(!scroll.on_wheel(-1));
    assert!(scroll.on_wheel(-1));
}

/// WHAT: A zero threshold is clamped to one
/// WHY: A misconfigured threshold must not disable capturing
#[test]
fn given_zero_threshold_when_constructed_then_every_down_tick_fires() {
    let mut scroll = ScrollAccumulator::new(0);

    assert_eq!(scroll.threshold(), 1);
    assert!(scroll.on_wheel(-1));
    assert!(scroll.on_wheel(-1));
}

/// WHAT: reset discards progress without firing
/// WHY: Re-entering capture mode must always start a fresh gesture count
#[test]
fn given_partial_progress_when_reset_then_count_restarts() {
    let mut scroll = ScrollAccumulator::new(2);

    assert!(!scroll.on_wheel(-1));
    scroll.reset();

    assert!(!scroll.on_wheel(-1));
    assert!(scroll.on_wheel(-1));
}

/// WHAT: Zero deltas neither accumulate nor reset
/// WHY: Some hook sources deliver horizontal-only wheel events as zero
#[test]
fn given_partial_progress_when_zero_delta_then_progress_kept() {
    let mut scroll = ScrollAccumulator::new(2);

    assert!(!scroll.on_wheel(-1));
    assert!(!scroll.on_wheel(0));
    assert!(scroll.on_wheel(-1));
}
