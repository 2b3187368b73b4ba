// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Delay-Grenzen und Startwerte liegen in spinner-core (state.rs),
// hier steht nur, was vom Board abhängt.

// ============================================================================
// Taster Konfiguration
// ============================================================================

/// GPIO-Nummern der Taster A, B, C, D
///
/// Muss zu den Peripherals passen, die main.rs an `init_buttons` übergibt!
/// Daraus werden die Bit-Masken (`1 << pin`) für den Dispatcher gebildet.
pub const BUTTON_GPIOS: [u8; 4] = [2, 3, 4, 5];

/// Kapazität des Benachrichtigungs-Channels (Interrupt → Log-Task)
/// Ist er voll, werden weitere Benachrichtigungen verworfen
pub const NOTIFICATION_QUEUE_SIZE: usize = 4;

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Nummern von LED1..LED4 (nur fürs Log, siehe main.rs)
pub const LED_GPIOS: [u8; 4] = [18, 19, 20, 21];

// ============================================================================
// Scheduler Konfiguration
// ============================================================================

/// Abstand zwischen zwei Scheduler-Prüfungen in Millisekunden
///
/// Bestimmt nur die Auflösung, nicht die Geschwindigkeit der Animation
/// (die steuert der Delay aus dem ControlState).
pub const SCHEDULER_POLL_INTERVAL_MS: u64 = 5;
