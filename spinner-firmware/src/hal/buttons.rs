// Taster-Interrupts → Input Dispatcher
//
// Vier Taster mit Pull-Up, Interrupt auf fallender Flanke. Der Handler
// baut aus allen gerade anstehenden Interrupts eine Bit-Maske und gibt sie
// an den Dispatcher. Mehrere gleichzeitige Flanken ergeben eine Maske mit
// mehreren Bits und werden vom Dispatcher verworfen.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::{Mutex, raw::CriticalSectionRawMutex};
use esp_hal::{
    gpio::{AnyPin, Event, Input, InputConfig, Io, Pull},
    handler,
    peripherals::IO_MUX,
    ram,
};
use spinner_core::InputDispatcher;

use crate::NotificationSender;
use crate::config::BUTTON_GPIOS;

/// Alles, was der Interrupt-Handler braucht
struct ButtonBank {
    inputs: [Input<'static>; 4],
    dispatcher: InputDispatcher<'static>,
    notifications: NotificationSender,
}

impl ButtonBank {
    /// Liest und quittiert alle anstehenden Taster-Interrupts
    fn take_pending_mask(&mut self) -> u32 {
        let mut mask = 0;
        for (input, pin) in self.inputs.iter_mut().zip(BUTTON_GPIOS) {
            if input.is_interrupt_set() {
                input.clear_interrupt();
                mask |= 1 << pin;
            }
        }
        mask
    }
}

static BUTTONS: Mutex<CriticalSectionRawMutex, RefCell<Option<ButtonBank>>> =
    Mutex::new(RefCell::new(None));

/// Konfiguriert die Taster und installiert den GPIO-Interrupt-Handler
///
/// # Parameter
/// - `mux`: IO_MUX Peripheral (für den Interrupt-Handler)
/// - `pins`: Taster A..D, gleiche Reihenfolge wie `BUTTON_GPIOS`
/// - `dispatcher`: Dispatcher mit der Masken-Zuordnung aus `BUTTON_GPIOS`
/// - `notifications`: Sender für Log-Benachrichtigungen
pub fn init_buttons(
    mux: IO_MUX<'static>,
    pins: [AnyPin<'static>; 4],
    dispatcher: InputDispatcher<'static>,
    notifications: NotificationSender,
) {
    let mut io = Io::new(mux);
    io.set_interrupt_handler(handle_button_press);

    let inputs = pins.map(|pin| {
        let mut input = Input::new(pin, InputConfig::default().with_pull(Pull::Up));
        input.listen(Event::FallingEdge);
        input
    });

    BUTTONS.lock(|cell| {
        cell.borrow_mut().replace(ButtonBank {
            inputs,
            dispatcher,
            notifications,
        });
    });
}

#[handler]
#[ram]
fn handle_button_press() {
    BUTTONS.lock(|cell| {
        let mut cell = cell.borrow_mut();
        let Some(bank) = cell.as_mut() else {
            return;
        };

        let mask = bank.take_pending_mask();
        if let Some(event) = bank.dispatcher.dispatch(mask) {
            // Channel voll → Benachrichtigung verwerfen, Zustand ist schon geändert
            let _ = bank.notifications.try_send(event);
        }
    });
}
