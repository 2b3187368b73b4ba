//! LED Scheduler - zeitgesteuerte Zustandsmaschine für die vier LEDs
//!
//! Wird in der Hauptschleife wiederholt aufgerufen. Erst wenn mehr als
//! `delay_ms` seit dem letzten Übergang vergangen sind, ändert sich etwas.

use crate::state::ControlState;
use crate::traits::{Clock, LedBank, LedError};
use crate::types::{AnimationMode, Led, Position, Transition};

/// Ein Schritt der Übergangstabelle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub extinguish: Led,
    pub illuminate: Led,
}

/// Übergangstabelle, indiziert über die Position
///
/// Reihenfolge der Lichter ist LED1 → LED2 → LED4 → LED3 (nicht numerisch!),
/// das ergibt auf dem Board einen Kreis.
pub const TRANSITIONS: [Step; 4] = [
    Step { extinguish: Led::Led1, illuminate: Led::Led2 },
    Step { extinguish: Led::Led2, illuminate: Led::Led4 },
    Step { extinguish: Led::Led4, illuminate: Led::Led3 },
    Step { extinguish: Led::Led3, illuminate: Led::Led1 },
];

/// Schritt für eine Position
pub const fn step_for(position: Position) -> Step {
    TRANSITIONS[position.index()]
}

/// LED Scheduler
///
/// Besitzt die LEDs, die Zeitquelle und den Rotations-Zustand exklusiv.
/// Der `ControlState` wird nur gelesen.
///
/// # Trait-basierte Abstraktion
/// - Real Hardware: `GpioLedBank` + `EmbassyClock`
/// - Tests: `MockLedBank` + `MockClock`
pub struct LedScheduler<L: LedBank, C: Clock> {
    leds: L,
    clock: C,
    position: Position,
    last_transition_ms: u32,
}

impl<L: LedBank, C: Clock> LedScheduler<L, C> {
    /// Startet an Position 1 mit Zeitstempel 0
    pub fn new(leds: L, clock: C) -> Self {
        Self {
            leds,
            clock,
            position: Position::First,
            last_transition_ms: 0,
        }
    }

    /// Schaltet alle LEDs aus (Startzustand)
    pub fn all_off(&mut self) -> Result<(), LedError> {
        for led in Led::ALL {
            self.leds.set(led, false)?;
        }
        Ok(())
    }

    /// Prüft die Zeit und führt ggf. einen Übergang aus
    ///
    /// - `Ok(None)`: Delay noch nicht abgelaufen, keine Änderung
    /// - `Ok(Some(t))`: Übergang `t` wurde geschrieben
    /// - `Err(_)`: ein LED-Schreibzugriff schlug fehl. Position und
    ///   Zeitstempel sind trotzdem schon weitergeschaltet.
    pub fn poll(&mut self, control: &ControlState) -> Result<Option<Transition>, LedError> {
        let now = self.clock.now_ms();
        let elapsed = now.wrapping_sub(self.last_transition_ms);
        if elapsed <= control.delay_ms() {
            return Ok(None);
        }

        // Modus wird jedes Mal frisch gelesen, ein Moduswechsel setzt
        // die Position nicht zurück
        let mode = control.animation_mode();
        let position = self.position;
        let step = step_for(position);

        if mode.is_spin() {
            self.position = position.next();
        }
        self.last_transition_ms = now;

        self.leds.set(step.extinguish, false)?;
        match mode {
            AnimationMode::Spin => self.leds.set(step.illuminate, true)?,
            AnimationMode::Blink => self.leds.toggle(step.illuminate)?,
        }

        Ok(Some(Transition {
            position,
            mode,
            extinguish: step.extinguish,
            illuminate: step.illuminate,
        }))
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn last_transition_ms(&self) -> u32 {
        self.last_transition_ms
    }

    pub fn leds(&self) -> &L {
        &self.leds
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    /// Minimaler Mock: nur der LED-Zustand, keine Aufzeichnung (no_std)
    #[derive(Default)]
    struct Leds {
        on: [bool; 4],
    }

    impl LedBank for Leds {
        fn set(&mut self, led: Led, on: bool) -> Result<(), LedError> {
            self.on[led.index()] = on;
            Ok(())
        }

        fn toggle(&mut self, led: Led) -> Result<(), LedError> {
            self.on[led.index()] ^= true;
            Ok(())
        }
    }

    struct FixedClock(Cell<u32>);

    impl Clock for FixedClock {
        fn now_ms(&self) -> u32 {
            self.0.get()
        }
    }

    #[test]
    fn test_table_order_is_1_2_4_3() {
        let lit: [Led; 4] = [
            TRANSITIONS[0].illuminate,
            TRANSITIONS[1].illuminate,
            TRANSITIONS[2].illuminate,
            TRANSITIONS[3].illuminate,
        ];
        assert_eq!(lit, [Led::Led2, Led::Led4, Led::Led3, Led::Led1]);
    }

    #[test]
    fn test_each_step_extinguishes_previous_light() {
        for i in 0..4 {
            assert_eq!(TRANSITIONS[(i + 1) % 4].extinguish, TRANSITIONS[i].illuminate);
        }
    }

    #[test]
    fn test_no_transition_at_exact_delay() {
        let control = ControlState::new();
        let mut scheduler = LedScheduler::new(Leds::default(), FixedClock(Cell::new(1000)));
        assert_eq!(scheduler.poll(&control), Ok(None));
        assert_eq!(scheduler.last_transition_ms(), 0);
    }

    #[test]
    fn test_elapsed_is_wraparound_safe() {
        let control = ControlState::new();
        let clock = FixedClock(Cell::new(u32::MAX - 10));
        let mut scheduler = LedScheduler::new(Leds::default(), clock);
        scheduler.poll(&control).unwrap();
        assert_eq!(scheduler.last_transition_ms(), u32::MAX - 10);

        // 500 ms später, über den Überlauf hinweg
        scheduler.clock().0.set(489);
        assert_eq!(scheduler.poll(&control), Ok(None));

        // 1001 ms später
        scheduler.clock().0.set(990);
        assert!(scheduler.poll(&control).unwrap().is_some());
    }
}
