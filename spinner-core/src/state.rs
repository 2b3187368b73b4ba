//! Geteilter Steuerzustand (Delay + Animations-Modus)
//!
//! Wird vom Dispatcher aus dem Interrupt-Kontext geschrieben und vom
//! Scheduler in der Hauptschleife gelesen. Beide Felder sind unabhängige
//! Atomics: ein um einen Poll-Zyklus veralteter Wert ist erlaubt,
//! deshalb reicht `Ordering::Relaxed` und es gibt keine Critical Section.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::types::AnimationMode;

/// Delay beim Start in Millisekunden
pub const DEFAULT_DELAY_MS: u32 = 1000;

/// Kleinster einstellbarer Delay
pub const MIN_DELAY_MS: u32 = 100;

/// Größter einstellbarer Delay
pub const MAX_DELAY_MS: u32 = 5000;

/// Schrittweite pro Tastendruck
pub const DELAY_STEP_MS: u32 = 100;

/// Steuerzustand, geteilt per `&'static` Referenz
#[derive(Debug)]
pub struct ControlState {
    delay_ms: AtomicU32,
    spin: AtomicBool,
}

impl ControlState {
    /// Startwerte: 1000 ms, Blink-Modus
    pub const fn new() -> Self {
        Self {
            delay_ms: AtomicU32::new(DEFAULT_DELAY_MS),
            spin: AtomicBool::new(false),
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms.load(Ordering::Relaxed)
    }

    pub fn animation_mode(&self) -> AnimationMode {
        AnimationMode::from_flag(self.spin.load(Ordering::Relaxed))
    }

    /// Wechselt Blink ↔ Spin und gibt den neuen Modus zurück
    pub fn toggle_mode(&self) -> AnimationMode {
        let previous = self.spin.fetch_xor(true, Ordering::Relaxed);
        AnimationMode::from_flag(!previous)
    }

    /// Erhöht den Delay um `DELAY_STEP_MS`
    ///
    /// Gibt den neuen Wert zurück, oder `None` wenn `MAX_DELAY_MS` bereits
    /// erreicht ist (Wert bleibt dann unverändert).
    pub fn increase_delay(&self) -> Option<u32> {
        self.delay_ms
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |delay| {
                (delay < MAX_DELAY_MS).then(|| (delay + DELAY_STEP_MS).min(MAX_DELAY_MS))
            })
            .ok()
            .map(|previous| (previous + DELAY_STEP_MS).min(MAX_DELAY_MS))
    }

    /// Verringert den Delay um `DELAY_STEP_MS`
    ///
    /// Gibt den neuen Wert zurück, oder `None` wenn `MIN_DELAY_MS` bereits
    /// erreicht ist.
    pub fn decrease_delay(&self) -> Option<u32> {
        self.delay_ms
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |delay| {
                (delay > MIN_DELAY_MS).then(|| delay.saturating_sub(DELAY_STEP_MS).max(MIN_DELAY_MS))
            })
            .ok()
            .map(|previous| previous.saturating_sub(DELAY_STEP_MS).max(MIN_DELAY_MS))
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = ControlState::new();
        assert_eq!(state.delay_ms(), 1000);
        assert_eq!(state.animation_mode(), AnimationMode::Blink);
    }

    #[test]
    fn test_toggle_mode_returns_new_mode() {
        let state = ControlState::new();
        assert_eq!(state.toggle_mode(), AnimationMode::Spin);
        assert_eq!(state.animation_mode(), AnimationMode::Spin);
        assert_eq!(state.toggle_mode(), AnimationMode::Blink);
    }

    #[test]
    fn test_increase_saturates_at_max() {
        let state = ControlState::new();
        for expected in (1100..=5000).step_by(100) {
            assert_eq!(state.increase_delay(), Some(expected));
        }
        assert_eq!(state.increase_delay(), None);
        assert_eq!(state.delay_ms(), MAX_DELAY_MS);
    }

    #[test]
    fn test_decrease_saturates_at_min() {
        let state = ControlState::new();
        for expected in (100..=900).rev().step_by(100) {
            assert_eq!(state.decrease_delay(), Some(expected));
        }
        assert_eq!(state.decrease_delay(), None);
        assert_eq!(state.delay_ms(), MIN_DELAY_MS);
    }
}
