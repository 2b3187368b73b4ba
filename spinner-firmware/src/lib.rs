// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von spinner-core
pub use spinner_core::{
    ButtonMap, Clock, ControlEvent, ControlState, InputDispatcher, Led, LedBank, LedError,
    LedScheduler,
};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::config::NOTIFICATION_QUEUE_SIZE;

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// CriticalSectionRawMutex statt NoopRawMutex: der Sender wird aus dem
// GPIO-Interrupt-Handler benutzt, nicht nur aus Embassy Tasks.

/// Channel für Benachrichtigungen (Taster-Interrupt → Log Task)
pub type NotificationChannel =
    Channel<CriticalSectionRawMutex, ControlEvent, NOTIFICATION_QUEUE_SIZE>;

/// Sender für Benachrichtigungen (nur `try_send` im Interrupt!)
pub type NotificationSender =
    Sender<'static, CriticalSectionRawMutex, ControlEvent, NOTIFICATION_QUEUE_SIZE>;

/// Receiver für Benachrichtigungen (Log Task empfängt)
pub type NotificationReceiver =
    Receiver<'static, CriticalSectionRawMutex, ControlEvent, NOTIFICATION_QUEUE_SIZE>;
