//! Hardware Abstraction Traits
//!
//! Diese Traits definieren die Schnittstellen zu LEDs und Zeitquelle
//! ohne konkrete Implementierung.

use crate::types::Led;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    WriteFailed,
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::WriteFailed => defmt::write!(fmt, "WriteFailed"),
        }
    }
}

/// Trait für die vier LED-Ausgänge
///
/// # Implementierungen
/// - **Production:** GpioLedBank (ESP32 GPIO Outputs)
/// - **Testing:** MockLedBank (zeichnet alle Schreibzugriffe auf)
pub trait LedBank: Send {
    /// Setzt eine LED an (`true`) oder aus (`false`)
    fn set(&mut self, led: Led, on: bool) -> Result<(), LedError>;

    /// Invertiert den aktuellen Zustand einer LED
    fn toggle(&mut self, led: Led) -> Result<(), LedError>;
}

/// Monotone Zeitquelle in Millisekunden
///
/// Der Zähler darf überlaufen, der Scheduler rechnet mit `wrapping_sub`.
pub trait Clock {
    fn now_ms(&self) -> u32;
}
