// LED Bank und Zeitquelle auf ESP32-Hardware
//
// Implementiert die Traits aus spinner-core mit esp-hal GPIO Outputs
// und embassy-time.

use embassy_time::Instant;
use esp_hal::gpio::{AnyPin, Level, Output, OutputConfig};
use spinner_core::{Clock, Led, LedBank, LedError};

/// Vier GPIO-Ausgänge, Index = `Led::index()`
pub struct GpioLedBank<'a> {
    outputs: [Output<'a>; 4],
}

impl<'a> GpioLedBank<'a> {
    /// Erstellt die Bank aus den vier LED-Pins (Reihenfolge LED1..LED4)
    ///
    /// Alle Ausgänge starten auf Low.
    pub fn new(pins: [AnyPin<'a>; 4]) -> Self {
        let outputs = pins.map(|pin| Output::new(pin, Level::Low, OutputConfig::default()));
        Self { outputs }
    }
}

// GPIO-Schreibzugriffe können auf dem ESP32 nicht fehlschlagen,
// LedError::WriteFailed tritt hier nie auf
impl LedBank for GpioLedBank<'_> {
    fn set(&mut self, led: Led, on: bool) -> Result<(), LedError> {
        self.outputs[led.index()].set_level(Level::from(on));
        Ok(())
    }

    fn toggle(&mut self, led: Led) -> Result<(), LedError> {
        self.outputs[led.index()].toggle();
        Ok(())
    }
}

/// Millisekunden seit Boot aus embassy-time
///
/// Auf `u32` gekürzt: läuft nach ~49 Tagen über,
/// der Scheduler rechnet mit `wrapping_sub`.
#[derive(Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
