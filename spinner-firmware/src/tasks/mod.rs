// Task-Modul: Enthält alle Embassy Tasks
//
// Der Scheduler-Task schaltet die LEDs, der Notification-Task loggt,
// was der Taster-Interrupt geändert hat.

pub mod led_scheduler;
pub mod notifications;

// Re-export Tasks für einfachen Import
pub use led_scheduler::led_scheduler_task;
pub use notifications::notification_task;
