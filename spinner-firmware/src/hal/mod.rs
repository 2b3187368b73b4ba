// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die Traits aus spinner-core für den ESP32-C6
// und kapselt den GPIO-Interrupt der Taster.

pub mod buttons;
pub mod leds;

pub use buttons::init_buttons;
pub use leds::{EmbassyClock, GpioLedBank};
