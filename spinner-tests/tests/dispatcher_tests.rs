//! Integration Tests für den Input Dispatcher
//!
//! Laufen auf dem Host (x86_64), ohne Hardware.

use spinner_core::{
    AnimationMode, ButtonMap, ControlEvent, ControlState, InputDispatcher, MAX_DELAY_MS,
    MIN_DELAY_MS,
};

// Gleiche Masken wie die GPIO-Interrupts der Firmware liefern würden
const BUTTON_A: u32 = 1 << 2;
const BUTTON_B: u32 = 1 << 3;
const BUTTON_C: u32 = 1 << 4;
const BUTTON_D: u32 = 1 << 5;

fn dispatcher(state: &ControlState) -> InputDispatcher<'_> {
    InputDispatcher::new(state, ButtonMap::from_pins([2, 3, 4, 5]))
}

// ============================================================================
// Tests: Taster A (Modus)
// ============================================================================

#[test]
fn test_button_a_toggles_mode_and_notifies() {
    let state = ControlState::new();
    let dispatcher = dispatcher(&state);

    assert_eq!(
        dispatcher.dispatch(BUTTON_A),
        Some(ControlEvent::ModeChanged(AnimationMode::Spin))
    );
    assert_eq!(
        dispatcher.dispatch(BUTTON_A),
        Some(ControlEvent::ModeChanged(AnimationMode::Blink))
    );
}

#[test]
fn test_button_a_parity_decides_mode() {
    for presses in 0..10 {
        let state = ControlState::new();
        let dispatcher = dispatcher(&state);
        for _ in 0..presses {
            dispatcher.dispatch(BUTTON_A);
        }
        let expected = if presses % 2 == 0 {
            AnimationMode::Blink
        } else {
            AnimationMode::Spin
        };
        assert_eq!(state.animation_mode(), expected, "after {presses} presses");
    }
}

// ============================================================================
// Tests: Taster B/D (Delay)
// ============================================================================

#[test]
fn test_button_b_increases_by_100_until_clamped() {
    let state = ControlState::new();
    let dispatcher = dispatcher(&state);

    let mut previous = state.delay_ms();
    for _ in 0..60 {
        let event = dispatcher.dispatch(BUTTON_B);
        let delay = state.delay_ms();
        assert!(delay <= MAX_DELAY_MS);
        if previous < MAX_DELAY_MS {
            assert_eq!(delay, previous + 100);
            assert_eq!(event, Some(ControlEvent::DelayChanged(delay)));
        } else {
            assert_eq!(delay, MAX_DELAY_MS);
            assert_eq!(event, None);
        }
        previous = delay;
    }
}

#[test]
fn test_button_d_decreases_by_100_until_clamped() {
    let state = ControlState::new();
    let dispatcher = dispatcher(&state);

    let mut previous = state.delay_ms();
    for _ in 0..20 {
        let event = dispatcher.dispatch(BUTTON_D);
        let delay = state.delay_ms();
        assert!(delay >= MIN_DELAY_MS);
        if previous > MIN_DELAY_MS {
            assert_eq!(delay, previous - 100);
            assert_eq!(event, Some(ControlEvent::DelayChanged(delay)));
        } else {
            assert_eq!(delay, MIN_DELAY_MS);
            assert_eq!(event, None);
        }
        previous = delay;
    }
}

#[test]
fn test_delay_at_max_ignores_three_more_presses() {
    let state = ControlState::new();
    let dispatcher = dispatcher(&state);
    while state.delay_ms() < MAX_DELAY_MS {
        dispatcher.dispatch(BUTTON_B);
    }

    for _ in 0..3 {
        assert_eq!(dispatcher.dispatch(BUTTON_B), None);
    }
    assert_eq!(state.delay_ms(), 5000);
}

#[test]
fn test_delay_stays_multiple_of_step() {
    let state = ControlState::new();
    let dispatcher = dispatcher(&state);
    let pattern = [BUTTON_B, BUTTON_D, BUTTON_D, BUTTON_B, BUTTON_B, BUTTON_B, BUTTON_D];
    for mask in pattern.iter().cycle().take(200) {
        dispatcher.dispatch(*mask);
        assert_eq!(state.delay_ms() % 100, 0);
    }
}

// ============================================================================
// Tests: Taster C und unbekannte Masken
// ============================================================================

#[test]
fn test_button_c_changes_nothing() {
    let state = ControlState::new();
    let dispatcher = dispatcher(&state);

    for _ in 0..5 {
        assert_eq!(dispatcher.dispatch(BUTTON_C), None);
    }
    assert_eq!(state.delay_ms(), 1000);
    assert_eq!(state.animation_mode(), AnimationMode::Blink);
}

#[test]
fn test_chord_is_dropped() {
    let state = ControlState::new();
    let dispatcher = dispatcher(&state);

    assert_eq!(dispatcher.dispatch(BUTTON_A | BUTTON_B), None);
    assert_eq!(dispatcher.dispatch(BUTTON_B | BUTTON_D), None);
    assert_eq!(state.delay_ms(), 1000);
    assert_eq!(state.animation_mode(), AnimationMode::Blink);
}

#[test]
fn test_unknown_mask_is_dropped() {
    let state = ControlState::new();
    let dispatcher = dispatcher(&state);

    assert_eq!(dispatcher.dispatch(1 << 20), None);
    assert_eq!(dispatcher.dispatch(0), None);
    assert_eq!(state.delay_ms(), 1000);
}
