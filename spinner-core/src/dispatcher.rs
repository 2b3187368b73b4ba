//! Input Dispatcher - ordnet Taster-Interrupts einer Zustandsänderung zu
//!
//! Läuft im Interrupt-Kontext: keine Allokation, kein Lock, kein Blocking.
//! Die LEDs werden hier nie angefasst, das macht nur der Scheduler.

use crate::state::ControlState;
use crate::types::{Button, ControlEvent};

/// Registrierte Bit-Masken der vier Taster (Reihenfolge A, B, C, D)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonMap {
    masks: [u32; 4],
}

impl ButtonMap {
    pub const fn new(masks: [u32; 4]) -> Self {
        Self { masks }
    }

    /// Erstellt die Masken aus GPIO-Nummern (`1 << pin`)
    pub const fn from_pins(pins: [u8; 4]) -> Self {
        Self::new([
            1 << pins[0],
            1 << pins[1],
            1 << pins[2],
            1 << pins[3],
        ])
    }

    /// Ordnet eine Maske genau einem Taster zu
    ///
    /// Nur exakte Treffer zählen: gleichzeitig gedrückte Taster (mehrere Bits)
    /// und unbekannte Masken ergeben `None`.
    pub fn classify(&self, mask: u32) -> Option<Button> {
        self.masks
            .iter()
            .position(|&registered| registered == mask)
            .map(|i| Button::ALL[i])
    }
}

/// Input Dispatcher
///
/// # Beispiele
///
/// ```
/// # use spinner_core::{ButtonMap, ControlEvent, ControlState, InputDispatcher};
/// let state = ControlState::new();
/// let dispatcher = InputDispatcher::new(&state, ButtonMap::from_pins([2, 3, 4, 5]));
/// assert_eq!(dispatcher.dispatch(1 << 3), Some(ControlEvent::DelayChanged(1100)));
/// assert_eq!(dispatcher.dispatch(1 << 4), None); // Taster C ist nicht belegt
/// ```
#[derive(Debug, Clone, Copy)]
pub struct InputDispatcher<'a> {
    state: &'a ControlState,
    buttons: ButtonMap,
}

impl<'a> InputDispatcher<'a> {
    pub const fn new(state: &'a ControlState, buttons: ButtonMap) -> Self {
        Self { state, buttons }
    }

    pub fn buttons(&self) -> &ButtonMap {
        &self.buttons
    }

    /// Verarbeitet einen Tastendruck
    ///
    /// Gibt die Benachrichtigung für das Log zurück, oder `None` wenn sich
    /// nichts geändert hat (unbekannte Maske, Taster C, Delay an der Grenze).
    pub fn dispatch(&self, mask: u32) -> Option<ControlEvent> {
        match self.buttons.classify(mask)? {
            Button::ToggleMode => Some(ControlEvent::ModeChanged(self.state.toggle_mode())),
            Button::IncreaseDelay => self.state.increase_delay().map(ControlEvent::DelayChanged),
            Button::Reserved => None,
            Button::DecreaseDelay => self.state.decrease_delay().map(ControlEvent::DelayChanged),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: ButtonMap = ButtonMap::new([0b0001, 0b0010, 0b0100, 0b1000]);

    #[test]
    fn test_classify_exact_masks() {
        assert_eq!(MAP.classify(0b0001), Some(Button::ToggleMode));
        assert_eq!(MAP.classify(0b0010), Some(Button::IncreaseDelay));
        assert_eq!(MAP.classify(0b0100), Some(Button::Reserved));
        assert_eq!(MAP.classify(0b1000), Some(Button::DecreaseDelay));
    }

    #[test]
    fn test_classify_rejects_chords_and_unknown() {
        assert_eq!(MAP.classify(0b0011), None);
        assert_eq!(MAP.classify(0b1_0000), None);
        assert_eq!(MAP.classify(0), None);
    }

    #[test]
    fn test_from_pins() {
        let map = ButtonMap::from_pins([2, 3, 4, 5]);
        assert_eq!(map.classify(1 << 2), Some(Button::ToggleMode));
        assert_eq!(map.classify(1 << 5), Some(Button::DecreaseDelay));
    }
}
