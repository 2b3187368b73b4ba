//! Spinner Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert den geteilten Steuerzustand, den Input Dispatcher
//! (Taster → Zustand) und den LED Scheduler (Zustand + Zeit → LEDs).

#![no_std]

pub mod dispatcher;
pub mod scheduler;
pub mod state;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use dispatcher::{ButtonMap, InputDispatcher};
pub use scheduler::{LedScheduler, Step, TRANSITIONS, step_for};
pub use state::{ControlState, DEFAULT_DELAY_MS, DELAY_STEP_MS, MAX_DELAY_MS, MIN_DELAY_MS};
pub use traits::{Clock, LedBank, LedError};
pub use types::{AnimationMode, Button, ControlEvent, Led, Position, Transition};
