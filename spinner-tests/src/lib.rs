//! Mock-Implementierungen für Host-Tests
//!
//! Werden von den Integrationstests in `tests/` genutzt.

use std::cell::Cell;

use spinner_core::{Clock, Led, LedBank, LedError};

// ============================================================================
// Mock LED Bank
// ============================================================================

/// Ein aufgezeichneter Schreibzugriff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedWrite {
    Set(Led, bool),
    Toggle(Led),
}

#[derive(Default)]
pub struct MockLedBank {
    /// Aktueller Zustand der vier LEDs
    pub on: [bool; 4],
    /// Alle Schreibzugriffe in Reihenfolge
    pub writes: Vec<LedWrite>,
    /// Simuliere Fehler beim nächsten Schreibzugriff
    pub fail_next_write: bool,
}

impl MockLedBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_on(&self, led: Led) -> bool {
        self.on[led.index()]
    }

    /// Nummern (1..=4) aller eingeschalteten LEDs
    pub fn lit(&self) -> Vec<usize> {
        Led::ALL
            .iter()
            .filter(|led| self.is_on(**led))
            .map(|led| led.index() + 1)
            .collect()
    }

    fn check_failure(&mut self) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }
        Ok(())
    }
}

impl LedBank for MockLedBank {
    fn set(&mut self, led: Led, on: bool) -> Result<(), LedError> {
        self.check_failure()?;
        self.on[led.index()] = on;
        self.writes.push(LedWrite::Set(led, on));
        Ok(())
    }

    fn toggle(&mut self, led: Led) -> Result<(), LedError> {
        self.check_failure()?;
        self.on[led.index()] ^= true;
        self.writes.push(LedWrite::Toggle(led));
        Ok(())
    }
}

// ============================================================================
// Mock Clock
// ============================================================================

/// Manuell gesteuerte Zeitquelle
#[derive(Default)]
pub struct MockClock {
    now: Cell<u32>,
}

impl MockClock {
    pub fn at(now_ms: u32) -> Self {
        Self {
            now: Cell::new(now_ms),
        }
    }

    pub fn set(&self, now_ms: u32) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}
