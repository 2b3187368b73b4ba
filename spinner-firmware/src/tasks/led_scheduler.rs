// LED Scheduler Task - schaltet die vier LEDs nach Delay und Modus
use defmt::{debug, error, info};
use embassy_time::{Duration, Timer};
use esp_hal::gpio::AnyPin;

use crate::config::SCHEDULER_POLL_INTERVAL_MS;
use crate::hal::{EmbassyClock, GpioLedBank};
use crate::{Clock, ControlState, LedBank, LedScheduler};

/// LED Scheduler Logic - Testbare Logik ohne Hardware-Abhängigkeit
///
/// - Schaltet beim Start alle LEDs aus
/// - Prüft alle `SCHEDULER_POLL_INTERVAL_MS`, ob der Delay abgelaufen ist
/// - Führt dann einen Spin- oder Blink-Übergang aus (siehe `LedScheduler::poll`)
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter `L: LedBank` und `C: Clock` ermöglichen:
/// - Real Hardware (GpioLedBank + EmbassyClock) im Production-Code
/// - Mock Implementation (MockLedBank + MockClock) in Tests
///
/// # Parameter
/// - `leds`: LED Bank (Hardware oder Mock)
/// - `clock`: Zeitquelle in Millisekunden
/// - `control`: Geteilter Zustand, wird vom Taster-Interrupt geschrieben
pub async fn led_scheduler_logic<L: LedBank, C: Clock>(
    leds: L,
    clock: C,
    control: &'static ControlState,
) -> ! {
    let mut scheduler = LedScheduler::new(leds, clock);

    // Start: alle LEDs aus
    if let Err(e) = scheduler.all_off() {
        error!("Failed to switch LEDs off: {}", e);
    }
    info!(
        "LED scheduler running (delay {} ms, mode {})",
        control.delay_ms(),
        control.animation_mode()
    );

    loop {
        match scheduler.poll(control) {
            Ok(Some(transition)) => debug!("{}", transition),
            Ok(None) => {}
            // Position ist schon weitergeschaltet, nächster Übergang läuft normal
            Err(e) => error!("Failed to write to LED: {}", e),
        }

        // Async Delay: gibt CPU an andere Tasks zurück
        Timer::after(Duration::from_millis(SCHEDULER_POLL_INTERVAL_MS)).await;
    }
}

/// LED Scheduler Task - Embassy Task für parallele Ausführung
///
/// Dieser Task übernimmt die GPIO-Initialisierung und ruft dann
/// die testbare `led_scheduler_logic()` Funktion auf.
///
/// # Parameter
/// - `pins`: LED1..LED4 GPIOs
/// - `control`: Geteilter Zustand (Delay + Modus)
#[embassy_executor::task]
pub async fn led_scheduler_task(pins: [AnyPin<'static>; 4], control: &'static ControlState) {
    let leds = GpioLedBank::new(pins);
    led_scheduler_logic(leds, EmbassyClock, control).await
}
