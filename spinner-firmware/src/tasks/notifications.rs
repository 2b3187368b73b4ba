// Notification Task - Log Sink für Modus- und Delay-Änderungen
use defmt::info;

use crate::NotificationReceiver;

/// Loggt jede Benachrichtigung aus dem Taster-Interrupt
///
/// Läuft als eigener Task, damit im Interrupt-Kontext nicht geloggt wird.
#[embassy_executor::task]
pub async fn notification_task(receiver: NotificationReceiver) {
    loop {
        let event = receiver.receive().await;
        info!("{}", event);
    }
}
