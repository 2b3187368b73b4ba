// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;
use static_cell::StaticCell;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_led_spinner::config::{BUTTON_GPIOS, LED_GPIOS};
use esp_led_spinner::hal::init_buttons;
use esp_led_spinner::tasks::{led_scheduler_task, notification_task};
use esp_led_spinner::{ButtonMap, ControlState, InputDispatcher, NotificationChannel};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime, installiert den
/// Taster-Interrupt und spawnt die Tasks. Danach schläft main().
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Geteilter Zustand: Interrupt schreibt, Scheduler liest
    static CONTROL: StaticCell<ControlState> = StaticCell::new();
    let control: &'static ControlState = CONTROL.init(ControlState::new());

    // Benachrichtigungs-Channel (Taster-Interrupt → Log Task)
    static NOTIFICATIONS: StaticCell<NotificationChannel> = StaticCell::new();
    let notifications = &*NOTIFICATIONS.init(NotificationChannel::new());

    // Taster A..D: Reihenfolge muss zu BUTTON_GPIOS passen!
    let dispatcher = InputDispatcher::new(control, ButtonMap::from_pins(BUTTON_GPIOS));
    init_buttons(
        peripherals.IO_MUX,
        [
            peripherals.GPIO2.into(),
            peripherals.GPIO3.into(),
            peripherals.GPIO4.into(),
            peripherals.GPIO5.into(),
        ],
        dispatcher,
        notifications.sender(),
    );
    for (name, pin) in ["A", "B", "C", "D"].iter().zip(BUTTON_GPIOS) {
        info!("Set up button {} at GPIO{}", name, pin);
    }

    // Spawn Log Task
    spawner
        .spawn(notification_task(notifications.receiver()))
        .unwrap();

    // Spawn LED Scheduler Task (LED1..LED4, Reihenfolge muss zu LED_GPIOS passen)
    for (i, pin) in LED_GPIOS.iter().enumerate() {
        info!("Set up LED{} at GPIO{}", i + 1, pin);
    }
    spawner
        .spawn(led_scheduler_task(
            [
                peripherals.GPIO18.into(),
                peripherals.GPIO19.into(),
                peripherals.GPIO20.into(),
                peripherals.GPIO21.into(),
            ],
            control,
        ))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks und im Interrupt)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
